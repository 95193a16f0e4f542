//! Sheet nesting layouts
//!
//! A layout is a caller-supplied placement of parts on a sheet; this module
//! validates it and reports waste. It does not search for a packing.
//! Sheet and part sizes share one unit.

use cabinetkit_core::{CabinetError, CabinetResult, SheetSize};
use cabinetkit_designer::CutListItem;
use serde::{Deserialize, Serialize};

/// Part rotation on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl TryFrom<u16> for Rotation {
    type Error = CabinetError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            other => Err(CabinetError::degenerate(format!(
                "rotation must be 0 or 90 degrees, got {}",
                other
            ))),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NestingSheet {
    pub width: f64,
    pub height: f64,
}

impl NestingSheet {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    fn validate(&self) -> CabinetResult<()> {
        for (name, value) in [("sheet width", self.width), ("sheet height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CabinetError::invalid_dimension(name, value, "must be positive"));
            }
        }
        Ok(())
    }
}

impl From<SheetSize> for NestingSheet {
    fn from(size: SheetSize) -> Self {
        Self::new(size.width, size.height)
    }
}

/// A part placed on a sheet, origin at its lower-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestingPart {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: Rotation,
    /// Id of the cut-list item this part was cut for
    pub cut_list_item: Option<String>,
}

impl NestingPart {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: Rotation::Deg0,
            cut_list_item: None,
        }
    }

    /// Place one piece of a cut-list item
    pub fn for_item(item: &CutListItem, x: f64, y: f64, rotation: Rotation) -> Self {
        Self {
            x,
            y,
            width: item.width,
            height: item.height,
            rotation,
            cut_list_item: Some(item.id.clone()),
        }
    }

    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Width and height as laid on the sheet
    pub fn footprint(&self) -> (f64, f64) {
        match self.rotation {
            Rotation::Deg0 => (self.width, self.height),
            Rotation::Deg90 => (self.height, self.width),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A validated sheet layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestingLayout {
    pub sheet: NestingSheet,
    pub parts: Vec<NestingPart>,
    pub waste_percentage: f64,
}

impl NestingLayout {
    /// Validate that every part lies on the sheet and compute waste.
    ///
    /// Overlaps between parts are not checked.
    pub fn new(sheet: NestingSheet, parts: Vec<NestingPart>) -> CabinetResult<Self> {
        sheet.validate()?;

        for (i, part) in parts.iter().enumerate() {
            if ![part.x, part.y, part.width, part.height]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(CabinetError::degenerate(format!(
                    "part {} has a non-finite position or size",
                    i
                )));
            }
            let (w, h) = part.footprint();
            if !(w > 0.0 && h > 0.0) {
                return Err(CabinetError::degenerate(format!(
                    "part {} has a non-positive size {} x {}",
                    i, part.width, part.height
                )));
            }
            let eps = 1e-9;
            if part.x < -eps
                || part.y < -eps
                || part.x + w > sheet.width + eps
                || part.y + h > sheet.height + eps
            {
                return Err(CabinetError::degenerate(format!(
                    "part {} at ({}, {}) size {} x {} is off the {} x {} sheet",
                    i, part.x, part.y, w, h, sheet.width, sheet.height
                )));
            }
        }

        let used: f64 = parts.iter().map(NestingPart::area).sum();
        let waste_percentage = (1.0 - used / sheet.area()) * 100.0;

        Ok(Self {
            sheet,
            parts,
            waste_percentage,
        })
    }

    pub fn used_area(&self) -> f64 {
        self.sheet.area() * (1.0 - self.waste_percentage / 100.0)
    }
}

/// Lower bound on sheets needed for a cut list, by area alone.
///
/// Kerf and grain are ignored; this is for reporting, not purchasing.
pub fn estimate_sheet_count(items: &[CutListItem], sheet: &NestingSheet) -> CabinetResult<u32> {
    sheet.validate()?;
    let total: f64 = items
        .iter()
        .map(|i| i.area() * f64::from(i.quantity))
        .sum();
    Ok((total / sheet.area()).ceil() as u32)
}
