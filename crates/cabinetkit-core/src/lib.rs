//! # CabinetKit Core
//!
//! Core types and utilities for CabinetKit.
//! Provides the unit model, cabinet dimension and style types,
//! the sheet-material library and the shared error taxonomy.

pub mod data;
pub mod error;
pub mod types;
pub mod units;

pub use data::{MaterialCategory, MaterialId, MaterialLibrary, SheetMaterial, SheetSize};

pub use error::{CabinetError, CabinetResult, Error, Result};

pub use types::{CabinetStyle, CabinetType, Dimensions, DoorStyle};

pub use units::{
    feet_to_inches, inches_to_feet, inches_to_mm, mm_to_inches, to_inches, to_pixels,
    MeasurementSystem, Scale, ScaleTable,
};
