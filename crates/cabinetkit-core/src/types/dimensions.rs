//! Overall cabinet box dimensions.

use crate::error::{CabinetError, CabinetResult};
use serde::{Deserialize, Serialize};

/// Box dimensions in inches.
///
/// `thickness` is the carcass material thickness, not a box extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub thickness: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64, thickness: f64) -> Self {
        Self {
            width,
            height,
            depth,
            thickness,
        }
    }

    /// Smallest of the three box extents
    pub fn min_extent(&self) -> f64 {
        self.width.min(self.height).min(self.depth)
    }

    /// Check that every value is positive and finite and that the material
    /// thickness is less than half of the smallest box extent.
    pub fn validate(&self) -> CabinetResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("thickness", self.thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CabinetError::invalid_dimension(
                    name,
                    value,
                    "must be a positive number",
                ));
            }
        }

        if self.thickness >= self.min_extent() / 2.0 {
            return Err(CabinetError::degenerate(format!(
                "material thickness {} must be less than half of the smallest extent {}",
                self.thickness,
                self.min_extent()
            )));
        }

        Ok(())
    }
}
