//! Sheet Materials module
//!
//! This module provides:
//! - Sheet-good categories (plywood, MDF, particleboard, ...)
//! - Nominal thickness and stock sheet sizes
//! - Edge-banding compatibility
//! - Material library management and the standard shop library

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Sheet material categories for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    /// Veneer-core and combination-core plywood
    Plywood,
    /// Medium density fiberboard
    Mdf,
    /// Particleboard and thermally fused laminate over particleboard
    Particleboard,
    /// Thin back-panel stock (hardboard, 1/4" ply)
    Hardboard,
    /// Solid lumber
    SolidWood,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plywood => write!(f, "Plywood"),
            Self::Mdf => write!(f, "MDF"),
            Self::Particleboard => write!(f, "Particleboard"),
            Self::Hardboard => write!(f, "Hardboard"),
            Self::SolidWood => write!(f, "Solid Wood"),
        }
    }
}

/// Material identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct MaterialId(pub String);

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stock sheet size in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSize {
    pub width: f64,
    pub height: f64,
}

impl SheetSize {
    /// Standard 4' x 8' sheet
    pub const FOUR_BY_EIGHT: SheetSize = SheetSize {
        width: 48.0,
        height: 96.0,
    };

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Complete sheet material definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMaterial {
    /// Unique material identifier (used as the cut-list material name)
    pub id: MaterialId,
    /// Display name
    pub name: String,
    /// Material category
    pub category: MaterialCategory,
    /// Nominal thickness in inches
    pub thickness: f64,
    /// Stock sheet size
    pub sheet: SheetSize,
    /// Whether exposed edges take edge banding
    pub accepts_edge_banding: bool,
    /// Notes and tips
    pub notes: String,
}

impl SheetMaterial {
    /// Create a new material on a 4x8 sheet with banding enabled
    pub fn new(id: MaterialId, name: String, category: MaterialCategory, thickness: f64) -> Self {
        Self {
            id,
            name,
            category,
            thickness,
            sheet: SheetSize::FOUR_BY_EIGHT,
            accepts_edge_banding: true,
            notes: String::new(),
        }
    }
}

/// Sheet material library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialLibrary {
    materials: HashMap<MaterialId, SheetMaterial>,
}

impl MaterialLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Add a material to the library
    pub fn add_material(&mut self, material: SheetMaterial) {
        self.materials.insert(material.id.clone(), material);
    }

    /// Get a material by ID
    pub fn get_material(&self, id: &MaterialId) -> Option<&SheetMaterial> {
        self.materials.get(id)
    }

    /// Find a material by id or display name (case-insensitive)
    pub fn resolve(&self, name: &str) -> Option<&SheetMaterial> {
        let needle = name.trim().to_lowercase();
        self.materials
            .values()
            .find(|m| m.id.0.to_lowercase() == needle || m.name.to_lowercase() == needle)
    }

    /// Get all materials sorted by id
    pub fn get_all_materials(&self) -> Vec<&SheetMaterial> {
        let mut all: Vec<_> = self.materials.values().collect();
        all.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        all
    }

    /// Get all materials in a specific category
    pub fn get_materials_by_category(&self, category: MaterialCategory) -> Vec<&SheetMaterial> {
        let mut found: Vec<_> = self
            .materials
            .values()
            .filter(|m| m.category == category)
            .collect();
        found.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        found
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared read-only standard library, built on first use
pub fn standard_library() -> &'static MaterialLibrary {
    static LIBRARY: OnceLock<MaterialLibrary> = OnceLock::new();
    LIBRARY.get_or_init(init_standard_library)
}

/// Initialize the standard sheet-goods library
pub fn init_standard_library() -> MaterialLibrary {
    let mut library = MaterialLibrary::new();

    let mut plywood = SheetMaterial::new(
        MaterialId("plywood".to_string()),
        "Birch Plywood".to_string(),
        MaterialCategory::Plywood,
        0.75,
    );
    plywood.notes = "Cabinet-grade 3/4\" birch ply, actual thickness is often 23/32\"".to_string();
    library.add_material(plywood);

    let mut maple = SheetMaterial::new(
        MaterialId("maple-plywood".to_string()),
        "Maple Plywood".to_string(),
        MaterialCategory::Plywood,
        0.75,
    );
    maple.notes = "Pre-finished maple veneer, good for exposed interiors".to_string();
    library.add_material(maple);

    let mut mdf = SheetMaterial::new(
        MaterialId("mdf".to_string()),
        "MDF".to_string(),
        MaterialCategory::Mdf,
        0.75,
    );
    mdf.notes = "Paint-grade doors and panels; edges must be sealed before paint".to_string();
    library.add_material(mdf);

    let mut melamine = SheetMaterial::new(
        MaterialId("melamine".to_string()),
        "White Melamine".to_string(),
        MaterialCategory::Particleboard,
        0.625,
    );
    melamine.sheet = SheetSize {
        width: 49.0,
        height: 97.0,
    };
    melamine.notes = "TFL over particleboard; use a scoring blade to avoid chipping".to_string();
    library.add_material(melamine);

    let mut particleboard = SheetMaterial::new(
        MaterialId("particleboard".to_string()),
        "Particleboard".to_string(),
        MaterialCategory::Particleboard,
        0.75,
    );
    particleboard.accepts_edge_banding = false;
    library.add_material(particleboard);

    let mut hardboard = SheetMaterial::new(
        MaterialId("hardboard".to_string()),
        "Hardboard".to_string(),
        MaterialCategory::Hardboard,
        0.25,
    );
    hardboard.accepts_edge_banding = false;
    hardboard.notes = "Back panels only".to_string();
    library.add_material(hardboard);

    let mut oak = SheetMaterial::new(
        MaterialId("red-oak".to_string()),
        "Red Oak".to_string(),
        MaterialCategory::SolidWood,
        0.75,
    );
    oak.sheet = SheetSize {
        width: 7.25,
        height: 96.0,
    };
    oak.accepts_edge_banding = false;
    oak.notes = "1x8 S4S boards for face frames and door rails".to_string();
    library.add_material(oak);

    tracing::debug!(materials = library.len(), "Initialised sheet material library");
    library
}
