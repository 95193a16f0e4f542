//! CabinetKit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;

pub use config::{Config, DisplaySettings, ExportSettings, GenerationSettings, ScaleEntry};
