//! Drill-pattern library
//!
//! This module provides:
//! - Drill settings (spindle, feed, tool, coolant) for cabinet boring
//! - Pattern layouts describing where holes fall on a panel
//! - The standard pattern library, built once on first access
//!
//! All lengths are millimetres. Patterns are never assigned to a panel
//! automatically; see [`crate::placement::attach_pattern`].

use cabinetkit_core::{CabinetError, CabinetResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Pattern category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternCategory {
    ShelfHoles,
    HingeBoring,
    HandleMounts,
    Joinery,
    Hardware,
}

impl PatternCategory {
    pub fn all() -> &'static [PatternCategory] {
        &[
            PatternCategory::ShelfHoles,
            PatternCategory::HingeBoring,
            PatternCategory::HandleMounts,
            PatternCategory::Joinery,
            PatternCategory::Hardware,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShelfHoles => "shelf-holes",
            Self::HingeBoring => "hinge-boring",
            Self::HandleMounts => "handle-mounts",
            Self::Joinery => "joinery",
            Self::Hardware => "hardware",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternCategory {
    type Err = CabinetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| CabinetError::not_found("pattern category", s))
    }
}

/// Hole arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    /// A single row of holes
    Linear,
    /// Several parallel rows
    Grid,
}

impl PatternType {
    pub fn name(&self) -> &'static str {
        match self {
            PatternType::Linear => "Linear",
            PatternType::Grid => "Grid",
        }
    }
}

/// Boring tool geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    /// Brad-point bit
    BradPoint,
    /// Forstner bit, flat bottomed (hinge cups)
    Forstner,
    /// Twist drill
    Twist,
    /// Stepped bit for cam housings
    StepDrill,
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BradPoint => write!(f, "Brad Point"),
            Self::Forstner => write!(f, "Forstner"),
            Self::Twist => write!(f, "Twist Drill"),
            Self::StepDrill => write!(f, "Step Drill"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coolant {
    Off,
    AirBlast,
    Mist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Machine settings for a pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillSettings {
    /// RPM
    pub spindle_speed: u32,
    /// Plunge feed in mm/min
    pub feed_rate: f64,
    pub tool_type: ToolType,
    /// Tool diameter in mm
    pub tool_diameter: f64,
    pub coolant: Coolant,
    /// Depth per peck in mm; `None` drills in one plunge
    pub peck_depth: Option<f64>,
}

/// How many holes a row gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoleCount {
    /// As many holes as fit between the end offsets at the pitch
    Fill,
    /// Exactly `n` holes at the pitch, centred on the panel
    Fixed(u32),
    /// `n` holes spread evenly between the end offsets
    Spread(u32),
}

/// Where the holes of a pattern fall on a panel.
///
/// X runs along the panel width, Y across its height from the front edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternLayout {
    /// Centre-to-centre spacing along a row
    pub pitch: f64,
    pub count: HoleCount,
    /// Distance from each panel end to the outermost hole centre
    pub end_offset: f64,
    /// Distance from the front edge to the first row
    pub edge_offset: f64,
    pub rows: u32,
    /// Spacing between rows (grid patterns)
    pub row_spacing: f64,
    /// Hole depth
    pub depth: f64,
}

/// A named boring pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillPattern {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: PatternCategory,
    pub pattern_type: PatternType,
    pub drill_settings: DrillSettings,
    pub layout: PatternLayout,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    /// Minutes per panel, setup included
    pub estimated_time: u32,
}

impl DrillPattern {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Drill pattern library
#[derive(Debug, Clone, Default)]
pub struct DrillPatternLibrary {
    patterns: HashMap<String, DrillPattern>,
}

impl DrillPatternLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern, replacing any pattern with the same id
    pub fn add_pattern(&mut self, pattern: DrillPattern) {
        self.patterns.insert(pattern.id.clone(), pattern);
    }

    pub fn get_pattern(&self, id: &str) -> CabinetResult<&DrillPattern> {
        self.patterns
            .get(id)
            .ok_or_else(|| CabinetError::not_found("drill pattern", id))
    }

    /// All patterns, sorted by id
    pub fn list_patterns(&self) -> Vec<&DrillPattern> {
        let mut patterns: Vec<_> = self.patterns.values().collect();
        patterns.sort_by(|a, b| a.id.cmp(&b.id));
        patterns
    }

    pub fn list_by_category(&self, category: PatternCategory) -> Vec<&DrillPattern> {
        self.list_patterns()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive exact tag match
    pub fn search_by_tag(&self, tag: &str) -> Vec<&DrillPattern> {
        self.list_patterns()
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect()
    }

    /// Categories that have at least one pattern
    pub fn categories(&self) -> Vec<PatternCategory> {
        self.patterns
            .values()
            .map(|p| p.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn pattern(
    id: &str,
    name: &str,
    description: &str,
    category: PatternCategory,
    pattern_type: PatternType,
    drill_settings: DrillSettings,
    layout: PatternLayout,
    tags: &[&str],
    difficulty: Difficulty,
    estimated_time: u32,
) -> DrillPattern {
    DrillPattern {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        pattern_type,
        drill_settings,
        layout,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        difficulty,
        estimated_time,
    }
}

fn settings(spindle_speed: u32, feed_rate: f64, tool_type: ToolType, tool_diameter: f64) -> DrillSettings {
    DrillSettings {
        spindle_speed,
        feed_rate,
        tool_type,
        tool_diameter,
        coolant: Coolant::AirBlast,
        peck_depth: None,
    }
}

fn init_standard_library() -> DrillPatternLibrary {
    let mut library = DrillPatternLibrary::new();

    library.add_pattern(pattern(
        "shelf-pins-32mm",
        "32mm System Shelf Pins",
        "Adjustable shelf pin holes on the 32mm system, 37mm back from the front edge",
        PatternCategory::ShelfHoles,
        PatternType::Linear,
        settings(3000, 500.0, ToolType::BradPoint, 5.0),
        PatternLayout {
            pitch: 32.0,
            count: HoleCount::Fill,
            end_offset: 64.0,
            edge_offset: 37.0,
            rows: 1,
            row_spacing: 0.0,
            depth: 12.0,
        },
        &["shelf", "system-32", "euro", "adjustable"],
        Difficulty::Beginner,
        10,
    ));

    library.add_pattern(pattern(
        "shelf-pins-1in",
        "1\" Spaced Shelf Pins",
        "Imperial shelf pin holes for 1/4\" pins at one-inch spacing",
        PatternCategory::ShelfHoles,
        PatternType::Linear,
        settings(3000, 500.0, ToolType::BradPoint, 6.35),
        PatternLayout {
            pitch: 25.4,
            count: HoleCount::Fill,
            end_offset: 76.2,
            edge_offset: 38.1,
            rows: 1,
            row_spacing: 0.0,
            depth: 9.5,
        },
        &["shelf", "imperial", "adjustable"],
        Difficulty::Beginner,
        10,
    ));

    library.add_pattern(pattern(
        "hinge-cup-35mm",
        "35mm Concealed Hinge Cups",
        "Cup bores for European concealed hinges, 100mm from the door ends",
        PatternCategory::HingeBoring,
        PatternType::Linear,
        DrillSettings {
            coolant: Coolant::Off,
            ..settings(1800, 300.0, ToolType::Forstner, 35.0)
        },
        PatternLayout {
            pitch: 0.0,
            count: HoleCount::Spread(2),
            end_offset: 100.0,
            edge_offset: 22.5,
            rows: 1,
            row_spacing: 0.0,
            depth: 13.0,
        },
        &["hinge", "euro", "door", "concealed"],
        Difficulty::Intermediate,
        8,
    ));

    library.add_pattern(pattern(
        "handle-mount-96mm",
        "96mm Handle Mount",
        "Two through holes at 96mm centres for pulls",
        PatternCategory::HandleMounts,
        PatternType::Linear,
        settings(2400, 400.0, ToolType::BradPoint, 5.0),
        PatternLayout {
            pitch: 96.0,
            count: HoleCount::Fixed(2),
            end_offset: 0.0,
            edge_offset: 40.0,
            rows: 1,
            row_spacing: 0.0,
            depth: 19.0,
        },
        &["handle", "pull", "door", "drawer"],
        Difficulty::Beginner,
        3,
    ));

    library.add_pattern(pattern(
        "handle-mount-128mm",
        "128mm Handle Mount",
        "Two through holes at 128mm centres for pulls",
        PatternCategory::HandleMounts,
        PatternType::Linear,
        settings(2400, 400.0, ToolType::BradPoint, 5.0),
        PatternLayout {
            pitch: 128.0,
            count: HoleCount::Fixed(2),
            end_offset: 0.0,
            edge_offset: 40.0,
            rows: 1,
            row_spacing: 0.0,
            depth: 19.0,
        },
        &["handle", "pull", "door", "drawer"],
        Difficulty::Beginner,
        3,
    ));

    library.add_pattern(pattern(
        "knob-single",
        "Single Knob",
        "One centred through hole for a knob",
        PatternCategory::HandleMounts,
        PatternType::Linear,
        settings(2400, 400.0, ToolType::BradPoint, 5.0),
        PatternLayout {
            pitch: 0.0,
            count: HoleCount::Spread(1),
            end_offset: 0.0,
            edge_offset: 40.0,
            rows: 1,
            row_spacing: 0.0,
            depth: 19.0,
        },
        &["knob", "door", "drawer"],
        Difficulty::Beginner,
        2,
    ));

    library.add_pattern(pattern(
        "dowel-8mm",
        "8mm Dowel Joint",
        "Face bores for 8mm dowels joining top and bottom panels to the sides",
        PatternCategory::Joinery,
        PatternType::Grid,
        DrillSettings {
            peck_depth: Some(6.0),
            ..settings(2800, 450.0, ToolType::BradPoint, 8.0)
        },
        PatternLayout {
            pitch: 0.0,
            count: HoleCount::Spread(3),
            end_offset: 37.0,
            edge_offset: 9.5,
            rows: 2,
            row_spacing: 32.0,
            depth: 12.0,
        },
        &["dowel", "joinery", "carcass"],
        Difficulty::Intermediate,
        12,
    ));

    library.add_pattern(pattern(
        "cam-lock-15mm",
        "15mm Cam Lock Housing",
        "Housings for 15mm cam lock fittings in knock-down carcasses",
        PatternCategory::Joinery,
        PatternType::Linear,
        DrillSettings {
            coolant: Coolant::Off,
            ..settings(1800, 300.0, ToolType::StepDrill, 15.0)
        },
        PatternLayout {
            pitch: 0.0,
            count: HoleCount::Spread(2),
            end_offset: 50.0,
            edge_offset: 34.0,
            rows: 1,
            row_spacing: 0.0,
            depth: 12.5,
        },
        &["cam-lock", "joinery", "knock-down", "carcass"],
        Difficulty::Advanced,
        15,
    ));

    library.add_pattern(pattern(
        "drawer-slide-32mm",
        "32mm Drawer Slide Mounting",
        "Screw holes for side-mount drawer slides on the 32mm system",
        PatternCategory::Hardware,
        PatternType::Grid,
        settings(3000, 500.0, ToolType::Twist, 3.0),
        PatternLayout {
            pitch: 32.0,
            count: HoleCount::Fixed(4),
            end_offset: 0.0,
            edge_offset: 37.0,
            rows: 2,
            row_spacing: 96.0,
            depth: 10.0,
        },
        &["drawer", "slide", "system-32", "hardware"],
        Difficulty::Intermediate,
        10,
    ));

    tracing::debug!(patterns = library.len(), "Initialised drill pattern library");
    library
}

/// Shared standard drill-pattern library
pub fn library() -> &'static DrillPatternLibrary {
    static LIBRARY: OnceLock<DrillPatternLibrary> = OnceLock::new();
    LIBRARY.get_or_init(init_standard_library)
}

/// Look up a standard pattern by id
pub fn get_pattern(id: &str) -> CabinetResult<&'static DrillPattern> {
    library().get_pattern(id)
}

pub fn list_patterns() -> Vec<&'static DrillPattern> {
    library().list_patterns()
}

pub fn list_by_category(category: PatternCategory) -> Vec<&'static DrillPattern> {
    library().list_by_category(category)
}

pub fn search_by_tag(tag: &str) -> Vec<&'static DrillPattern> {
    library().search_by_tag(tag)
}

pub fn categories() -> Vec<PatternCategory> {
    library().categories()
}
