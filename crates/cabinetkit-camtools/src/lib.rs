//! # CabinetKit CAM Tools
//!
//! Boring and sheet-layout support for manufacturing cabinet parts.
//!
//! ## Components
//!
//! - **Drill Patterns**: Static library of shelf-pin, hinge, handle, joinery and hardware patterns
//! - **Placement**: Hole positions for a panel and explicit pattern-to-part association
//! - **Nesting**: Display-only sheet layouts with waste reporting
//!
//! Patterns are looked up by id and attached by the caller; nothing here
//! assigns patterns to parts on its own.

pub mod drill_patterns;
pub mod nesting;
pub mod placement;

pub use drill_patterns::{
    get_pattern, list_by_category, list_patterns, search_by_tag, Coolant, Difficulty,
    DrillPattern, DrillPatternLibrary, DrillSettings, HoleCount, PatternCategory, PatternLayout,
    PatternType, ToolType,
};
pub use nesting::{estimate_sheet_count, NestingLayout, NestingPart, NestingSheet, Rotation};
pub use placement::{attach_pattern, DrillOperation, HolePosition};
