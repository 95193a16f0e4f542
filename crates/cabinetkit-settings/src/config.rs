//! Configuration management for CabinetKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Generation defaults (material, carcass thickness, styles)
//! - Export preferences (units, precision)
//! - Display settings (drawing scales)

use cabinetkit_core::units::ScaleTable;
use cabinetkit_core::{
    CabinetResult, CabinetStyle, DoorStyle, Error, MeasurementSystem, Result,
};
use cabinetkit_designer::GeneratorDefaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest number of decimals accepted for table output
pub const MAX_PRECISION: u32 = 6;

const FRACTION_DENOMINATORS: &[u32] = &[2, 4, 8, 16, 32, 64];

/// Defaults applied to generated cabinets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Sheet material name for carcass and doors
    pub material: String,
    /// Carcass thickness in inches; unset uses the material's nominal thickness
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    pub style: CabinetStyle,
    pub door_style: DoorStyle,
    pub include_back: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let defaults = GeneratorDefaults::default();
        Self {
            material: defaults.material,
            thickness: defaults.thickness,
            style: defaults.style,
            door_style: defaults.door_style,
            include_back: defaults.include_back,
        }
    }
}

impl GenerationSettings {
    pub fn to_defaults(&self) -> GeneratorDefaults {
        GeneratorDefaults {
            material: self.material.clone(),
            thickness: self.thickness,
            style: self.style,
            door_style: self.door_style,
            include_back: self.include_back,
        }
    }
}

/// Cut-list export preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Unit for exported dimensions
    pub unit: MeasurementSystem,
    /// Decimal places in table output
    pub precision: u32,
    /// Print inch dimensions as shop fractions in table output
    pub fractions: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            unit: MeasurementSystem::Imperial,
            precision: 3,
            fractions: false,
        }
    }
}

/// A named drawing scale as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    pub name: String,
    pub pixels_per_inch: f64,
}

/// Drawing and display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Scale used when none is requested
    pub default_scale: String,
    /// Denominator for fractional inch display
    pub fraction_denominator: u32,
    pub scales: Vec<ScaleEntry>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_scale: "half-inch".to_string(),
            fraction_denominator: 16,
            scales: ScaleTable::standard()
                .iter()
                .map(|s| ScaleEntry {
                    name: s.name().to_string(),
                    pixels_per_inch: s.pixels_per_inch(),
                })
                .collect(),
        }
    }
}

impl DisplaySettings {
    /// Build the validated scale table
    pub fn scale_table(&self) -> CabinetResult<ScaleTable> {
        ScaleTable::from_entries(
            self.scales
                .iter()
                .map(|e| (e.name.as_str(), e.pixels_per_inch)),
        )
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationSettings,
    pub export: ExportSettings,
    pub display: DisplaySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, `<config dir>/cabinetkit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cabinetkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating the parent directory
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::other(format!("Failed to create config directory: {}", e)))?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        tracing::info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Load an explicit config file, or the default location if it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            None => {
                tracing::warn!("No platform config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Generation
        if self.generation.material.trim().is_empty() {
            return Err(Error::other("Default material must not be empty".to_string()));
        }

        if let Some(thickness) = self.generation.thickness {
            if !thickness.is_finite() || thickness <= 0.0 {
                return Err(Error::other("Carcass thickness must be > 0".to_string()));
            }
        }

        // Export
        if self.export.precision > MAX_PRECISION {
            return Err(Error::other(format!(
                "Export precision must be <= {}",
                MAX_PRECISION
            )));
        }

        // Display
        if !FRACTION_DENOMINATORS.contains(&self.display.fraction_denominator) {
            return Err(Error::other(format!(
                "Fraction denominator must be one of {:?}",
                FRACTION_DENOMINATORS
            )));
        }

        let scales = self.display.scale_table()?;
        if scales.get(&self.display.default_scale).is_none() {
            return Err(Error::other(format!(
                "Default scale '{}' is not defined",
                self.display.default_scale
            )));
        }

        Ok(())
    }
}
