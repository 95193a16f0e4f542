//! Reference data shared by the generator and the exporters
//!
//! This module provides:
//! - Sheet materials with nominal thickness and stock sizes

pub mod materials;

pub use materials::{
    standard_library, MaterialCategory, MaterialId, MaterialLibrary, SheetMaterial, SheetSize,
};
