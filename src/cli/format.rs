//! Plain-text table output.

use cabinetkit_core::units::{format_fraction, unit_label};
use cabinetkit_core::MeasurementSystem;
use std::fmt::Write;

/// How lengths are printed in tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthFormat {
    pub unit: MeasurementSystem,
    pub precision: usize,
    /// Fraction denominator for inch output; `None` prints decimals
    pub fractions: Option<u32>,
}

impl LengthFormat {
    /// Format a length given in inches
    pub fn inches(&self, value: f64) -> String {
        match (self.unit, self.fractions) {
            (MeasurementSystem::Imperial, Some(den)) => format_fraction(value, den),
            _ => {
                let converted = MeasurementSystem::Imperial.convert(value, self.unit);
                format!("{:.*}{}", self.precision, converted, unit_label(self.unit))
            }
        }
    }
}

/// Left-aligned columns sized to their widest cell
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let line = |out: &mut String, cells: Vec<&str>| {
        let mut text = String::new();
        for (cell, width) in cells.iter().zip(&widths) {
            let _ = write!(text, "{:<width$}  ", cell, width = *width);
        }
        let _ = writeln!(out, "{}", text.trim_end());
    };

    line(&mut out, headers.to_vec());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    line(&mut out, rule.iter().map(String::as_str).collect());
    for row in rows {
        line(&mut out, row.iter().map(String::as_str).collect());
    }
    out
}
