//! Unit conversion utilities
//!
//! All cabinet geometry is carried in inches. This module converts between
//! inches, millimeters, feet and drawing pixels, and parses/formats lengths
//! the way they are written in the shop (decimal or mixed fractions).

use crate::error::CabinetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    #[default]
    Imperial,
}

impl MeasurementSystem {
    /// Convert a value in inches into this system
    pub fn from_inches(&self, inches: f64) -> f64 {
        match self {
            Self::Metric => inches_to_mm(inches),
            Self::Imperial => inches,
        }
    }

    /// Convert a value in this system into inches
    pub fn to_inches(&self, value: f64) -> f64 {
        match self {
            Self::Metric => mm_to_inches(value),
            Self::Imperial => value,
        }
    }

    /// Convert a value from `self` into `target`
    pub fn convert(&self, value: f64, target: MeasurementSystem) -> f64 {
        target.from_inches(self.to_inches(value))
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn feet_to_inches(feet: f64) -> f64 {
    feet * INCHES_PER_FOOT
}

pub fn inches_to_feet(inches: f64) -> f64 {
    inches / INCHES_PER_FOOT
}

/// Drawing scale used by the 2D elevation and plan views.
///
/// A scale can only be built through [`Scale::new`], which guarantees a
/// strictly positive, finite `pixels_per_inch`. The conversion functions
/// therefore never need to check for division by zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    name: String,
    pixels_per_inch: f64,
}

impl Scale {
    /// Create a new scale
    pub fn new(name: impl Into<String>, pixels_per_inch: f64) -> Result<Self, CabinetError> {
        let name = name.into();
        if !pixels_per_inch.is_finite() || pixels_per_inch <= 0.0 {
            return Err(CabinetError::InvalidScale {
                name,
                pixels_per_inch,
            });
        }
        Ok(Self {
            name,
            pixels_per_inch,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pixels_per_inch(&self) -> f64 {
        self.pixels_per_inch
    }
}

/// Convert a length in inches to drawing pixels
pub fn to_pixels(value_inches: f64, scale: &Scale) -> f64 {
    value_inches * scale.pixels_per_inch
}

/// Convert drawing pixels back to inches
pub fn to_inches(pixels: f64, scale: &Scale) -> f64 {
    pixels / scale.pixels_per_inch
}

/// Validated, read-only set of named drawing scales
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleTable {
    scales: Vec<Scale>,
}

impl ScaleTable {
    /// Build a table from already validated scales, rejecting duplicate names.
    pub fn new(scales: Vec<Scale>) -> Result<Self, CabinetError> {
        for (i, scale) in scales.iter().enumerate() {
            if scales[..i].iter().any(|s| s.name == scale.name) {
                return Err(CabinetError::InvalidScale {
                    name: scale.name.clone(),
                    pixels_per_inch: scale.pixels_per_inch,
                });
            }
        }
        Ok(Self { scales })
    }

    /// Build a table from `(name, pixels_per_inch)` pairs
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, CabinetError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let scales = entries
            .into_iter()
            .map(|(name, ppi)| Scale::new(name, ppi))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(scales)
    }

    /// Architectural drawing scales at 96 screen pixels per inch
    pub fn standard() -> Self {
        let scales = vec![
            Scale {
                name: "quarter-inch".to_string(),
                pixels_per_inch: 2.0,
            },
            Scale {
                name: "half-inch".to_string(),
                pixels_per_inch: 4.0,
            },
            Scale {
                name: "one-inch".to_string(),
                pixels_per_inch: 8.0,
            },
            Scale {
                name: "full-size".to_string(),
                pixels_per_inch: 96.0,
            },
        ];
        Self { scales }
    }

    pub fn get(&self, name: &str) -> Option<&Scale> {
        self.scales.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scale> {
        self.scales.iter()
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Format length value for display
///
/// * `value_inches` - Value in inches
/// * `system` - Target measurement system
pub fn format_length(value_inches: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.1}", inches_to_mm(value_inches)),
        MeasurementSystem::Imperial => format!("{:.3}", value_inches),
    }
}

/// Format inches as a shop fraction, e.g. `22-1/2"`.
///
/// The value is rounded to the nearest `1/denominator` and the fraction is
/// reduced. A zero denominator is treated as whole inches.
pub fn format_fraction(inches: f64, denominator: u32) -> String {
    let denominator = denominator.max(1);
    let negative = inches < 0.0;
    let steps = (inches.abs() * denominator as f64).round() as u64;
    let whole = steps / denominator as u64;
    let mut num = steps % denominator as u64;
    let mut den = denominator as u64;

    let sign = if negative && steps > 0 { "-" } else { "" };
    if num == 0 {
        return format!("{}{}\"", sign, whole);
    }

    let g = gcd(num, den);
    num /= g;
    den /= g;
    if whole == 0 {
        format!("{}{}/{}\"", sign, num, den)
    } else {
        format!("{}{}-{}/{}\"", sign, whole, num, den)
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Parse length string to inches
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim().trim_end_matches('"');
    if input.is_empty() {
        return Ok(0.0);
    }

    match system {
        MeasurementSystem::Metric => input
            .trim_end_matches("mm")
            .trim()
            .parse::<f64>()
            .map(mm_to_inches)
            .map_err(|e| e.to_string()),
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                return input
                    .trim_end_matches("in")
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| e.to_string());
            }

            // Mixed fraction: "22 1/2" or "22-1/2"
            let negative = input.starts_with('-');
            let normalized = input.trim_start_matches('-').replacen('-', " ", 1);
            let mut total = 0.0;

            for part in normalized.split_whitespace() {
                if part.contains('/') {
                    let frac: Vec<&str> = part.split('/').collect();
                    if frac.len() != 2 {
                        return Err("Invalid fraction format".to_string());
                    }
                    let num = frac[0].parse::<f64>().map_err(|_| "Invalid numerator")?;
                    let den = frac[1].parse::<f64>().map_err(|_| "Invalid denominator")?;
                    if den == 0.0 {
                        return Err("Division by zero".to_string());
                    }
                    total += num / den;
                } else {
                    total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
                }
            }

            Ok(if negative { -total } else { total })
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_metric_conversion() {
        assert_eq!(format_length(1.0, MeasurementSystem::Metric), "25.4");
        assert!(approx(
            parse_length("25.4", MeasurementSystem::Metric).unwrap(),
            1.0
        ));
        assert!(approx(
            parse_length("508mm", MeasurementSystem::Metric).unwrap(),
            20.0
        ));
    }

    #[test]
    fn test_imperial_decimal() {
        assert_eq!(format_length(0.75, MeasurementSystem::Imperial), "0.750");
        assert_eq!(parse_length("34.5", MeasurementSystem::Imperial).unwrap(), 34.5);
        assert_eq!(parse_length("24\"", MeasurementSystem::Imperial).unwrap(), 24.0);
    }

    #[test]
    fn test_imperial_fraction() {
        assert_eq!(parse_length("22 1/2", MeasurementSystem::Imperial).unwrap(), 22.5);
        assert_eq!(parse_length("22-1/2", MeasurementSystem::Imperial).unwrap(), 22.5);
        assert_eq!(parse_length("3/4", MeasurementSystem::Imperial).unwrap(), 0.75);
        assert_eq!(parse_length("-1/2", MeasurementSystem::Imperial).unwrap(), -0.5);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_length("abc", MeasurementSystem::Metric).is_err());
        assert!(parse_length("1/0", MeasurementSystem::Imperial).is_err());
        assert!(parse_length("1/2/3", MeasurementSystem::Imperial).is_err());
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_fraction(22.5, 16), "22-1/2\"");
        assert_eq!(format_fraction(0.75, 16), "3/4\"");
        assert_eq!(format_fraction(24.0, 16), "24\"");
        assert_eq!(format_fraction(11.4375, 16), "11-7/16\"");
        assert_eq!(format_fraction(5.0 / 3.0, 8), "1-5/8\"");
    }

    #[test]
    fn test_feet_and_mm() {
        assert_eq!(feet_to_inches(7.0), 84.0);
        assert_eq!(inches_to_feet(96.0), 8.0);
        assert!(approx(inches_to_mm(0.75), 19.05));
        assert!(approx(
            MeasurementSystem::Metric.convert(19.05, MeasurementSystem::Imperial),
            0.75
        ));
    }

    #[test]
    fn test_scale_rejects_non_positive() {
        assert!(Scale::new("zero", 0.0).is_err());
        assert!(Scale::new("negative", -4.0).is_err());
        assert!(Scale::new("nan", f64::NAN).is_err());
        assert!(Scale::new("ok", 4.0).is_ok());
    }

    #[test]
    fn test_scale_table() {
        let table = ScaleTable::standard();
        assert_eq!(table.len(), 4);
        let half = table.get("half-inch").unwrap();
        assert_eq!(to_pixels(24.0, half), 96.0);
        assert_eq!(to_inches(96.0, half), 24.0);
        assert!(table.get("missing").is_none());

        let dup = ScaleTable::from_entries([("a", 1.0), ("a", 2.0)]);
        assert!(dup.is_err());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(MeasurementSystem::Metric), "mm");
        assert_eq!(unit_label(MeasurementSystem::Imperial), "in");
    }
}
