//! Cabinet type, construction style and door style.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cabinet placement type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinetType {
    /// Floor-standing base cabinet
    Base,
    /// Wall-hung upper cabinet
    Wall,
    /// Full-height pantry/oven cabinet
    Tall,
}

impl CabinetType {
    /// Get all cabinet types
    pub fn all() -> &'static [CabinetType] {
        &[CabinetType::Base, CabinetType::Wall, CabinetType::Tall]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Wall => "wall",
            Self::Tall => "tall",
        }
    }
}

impl fmt::Display for CabinetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base"),
            Self::Wall => write!(f, "Wall"),
            Self::Tall => write!(f, "Tall"),
        }
    }
}

impl FromStr for CabinetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "wall" | "upper" => Ok(Self::Wall),
            "tall" | "pantry" => Ok(Self::Tall),
            _ => Err(format!("Unknown cabinet type: {}", s)),
        }
    }
}

/// Box construction style. Each style defines its own door-to-box clearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CabinetStyle {
    /// Frameless full-overlay construction
    #[default]
    Euro,
    /// Doors set inside the face frame opening
    Inset,
    /// Face frame with partial-overlay doors
    #[serde(rename = "faceframe")]
    FaceFrame,
}

impl CabinetStyle {
    /// Clearance in inches subtracted from each door's nominal width and height
    pub fn door_clearance(&self) -> f64 {
        match self {
            Self::Euro => 0.125,
            Self::Inset => 1.625,
            Self::FaceFrame => 1.0,
        }
    }

    /// Frameless boxes expose the front edges of the carcass panels
    pub fn exposes_carcass_edges(&self) -> bool {
        match self {
            Self::Euro => true,
            Self::Inset | Self::FaceFrame => false,
        }
    }
}

impl fmt::Display for CabinetStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Euro => write!(f, "Euro"),
            Self::Inset => write!(f, "Inset"),
            Self::FaceFrame => write!(f, "Face Frame"),
        }
    }
}

impl FromStr for CabinetStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "euro" | "frameless" => Ok(Self::Euro),
            "inset" => Ok(Self::Inset),
            "faceframe" => Ok(Self::FaceFrame),
            _ => Err(format!("Unknown cabinet style: {}", s)),
        }
    }
}

/// Door panel profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DoorStyle {
    Slab,
    #[default]
    Shaker,
    RaisedPanel,
    Glass,
}

impl fmt::Display for DoorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slab => write!(f, "Slab"),
            Self::Shaker => write!(f, "Shaker"),
            Self::RaisedPanel => write!(f, "Raised Panel"),
            Self::Glass => write!(f, "Glass Front"),
        }
    }
}

impl FromStr for DoorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "slab" | "flat" => Ok(Self::Slab),
            "shaker" => Ok(Self::Shaker),
            "raisedpanel" | "raised" => Ok(Self::RaisedPanel),
            "glass" => Ok(Self::Glass),
            _ => Err(format!("Unknown door style: {}", s)),
        }
    }
}
