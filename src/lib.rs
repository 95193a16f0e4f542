//! # CabinetKit
//!
//! A parametric kitchen cabinet generator with support for:
//! - Standard base, wall and tall cabinet catalogs
//! - Euro, inset and face-frame construction
//! - Cut lists with edge banding, exported as CSV or JSON
//! - Drill patterns for shelf pins, hinges, handles and joinery
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Units, dimension and style types, materials, errors
//! 2. **cabinetkit-designer** - Template catalog, generator, cut lists, export
//! 3. **cabinetkit-camtools** - Drill patterns, hole placement, nesting layouts
//! 4. **cabinetkit-settings** - Configuration files
//! 5. **cabinetkit** - Command-line binary that integrates all crates

pub mod cli;

pub use cabinetkit_camtools as camtools;
pub use cabinetkit_core::data;
pub use cabinetkit_designer as designer;

pub use cabinetkit_core::{
    CabinetError, CabinetResult, CabinetStyle, CabinetType, Dimensions, DoorStyle, Error,
    MeasurementSystem, Result, Scale, ScaleTable,
};

pub use cabinetkit_designer::{
    apply_patch, build_cut_list, export_csv, get_template, list_templates, Cabinet,
    CabinetGenerator, CabinetPatch, CabinetRequest, CabinetTemplate, CutListItem, CutListReport,
    CutListSummary, EdgeBanding, GeneratorDefaults, IdSource, SequentialIdSource, UuidIdSource,
};

pub use cabinetkit_camtools::{
    attach_pattern, get_pattern, list_by_category, DrillOperation, DrillPattern, NestingLayout,
    PatternCategory,
};

pub use cabinetkit_settings::Config;

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("CABINETKIT_BUILD_DATE");

/// Version string for `--version`, with the build date
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("CABINETKIT_BUILD_DATE"),
    ")"
);

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output on stderr, leaving stdout for command output
/// - RUST_LOG environment variable support
/// - `default_level` when RUST_LOG is unset
pub fn init_logging(default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
