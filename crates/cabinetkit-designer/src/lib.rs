//! # CabinetKit Designer
//!
//! Parametric cabinet design: turns a handful of named dimensions into a
//! complete cabinet record and its cut list.
//!
//! ## Core Components
//!
//! - **Catalog**: Standard widths, heights and depths, plus the read-only template table
//! - **Cabinet**: The cabinet record and its partial-update patches
//! - **Generator**: Request validation and cabinet construction with injected ids
//! - **Cut List**: Panel decomposition, edge banding and shop summaries
//! - **Export**: CSV and JSON cut-list reports
//!
//! ## Data flow
//!
//! ```text
//! Catalog ──> Generator ──> Cabinet ──> Cut List ──> Export
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cabinetkit_designer::cut_list::total_part_count;
//! use cabinetkit_designer::{build_cut_list, CabinetGenerator, SequentialIdSource};
//!
//! let generator = CabinetGenerator::new(SequentialIdSource::new("cab"));
//! let cabinet = generator.generate_base(24.0).unwrap();
//! let items = build_cut_list(&cabinet).unwrap();
//! assert_eq!(total_part_count(&items), cabinet.expected_part_count());
//! ```

pub mod cabinet;
pub mod catalog;
pub mod cut_list;
pub mod export;
pub mod generator;

pub use cabinet::{apply_patch, Cabinet, CabinetPatch};
pub use catalog::{get_template, list_templates, CabinetTemplate, TemplateCatalog};
pub use cut_list::{build_cut_list, CutListItem, CutListSummary, Edge, EdgeBanding};
pub use export::{export_csv, write_csv, CutListReport};
pub use generator::{
    CabinetGenerator, CabinetRequest, GeneratorDefaults, IdSource, SequentialIdSource,
    UuidIdSource,
};
