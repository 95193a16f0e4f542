//! # Cabinet Template Catalog
//!
//! Standard cabinet sizes and the read-only template catalog built from them.
//!
//! The catalog is populated once, on first access, from the fixed size tables
//! below. There is no mutation API: templates are shared reference data.

use cabinetkit_core::{CabinetError, CabinetResult, CabinetStyle, CabinetType, Dimensions};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default carcass thickness in inches (nominal 3/4" sheet goods)
pub const DEFAULT_THICKNESS: f64 = 0.75;

/// Standard base cabinet counter height, without countertop
pub const BASE_HEIGHT: f64 = 34.5;

const BASE_WIDTHS: &[f64] = &[9.0, 12.0, 15.0, 18.0, 21.0, 24.0, 27.0, 30.0, 33.0, 36.0];
const WALL_WIDTHS: &[f64] = &[9.0, 12.0, 15.0, 18.0, 21.0, 24.0, 27.0, 30.0, 33.0, 36.0];
const TALL_WIDTHS: &[f64] = &[18.0, 24.0, 30.0, 36.0];

const BASE_HEIGHTS: &[f64] = &[BASE_HEIGHT];
const WALL_HEIGHTS: &[f64] = &[12.0, 15.0, 18.0, 24.0, 30.0, 36.0, 42.0];
const TALL_HEIGHTS: &[f64] = &[84.0, 90.0, 96.0];

// First entry is the default depth for the type.
const BASE_DEPTHS: &[f64] = &[24.0, 21.0];
const WALL_DEPTHS: &[f64] = &[12.0, 15.0, 24.0];
const TALL_DEPTHS: &[f64] = &[24.0, 12.0];

const CATALOG_WALL_HEIGHTS: &[f64] = &[30.0, 36.0, 42.0];
const CATALOG_TALL_HEIGHTS: &[f64] = &[84.0, 96.0];

/// Enumerated standard widths for a cabinet type
pub fn standard_widths(cabinet_type: CabinetType) -> &'static [f64] {
    match cabinet_type {
        CabinetType::Base => BASE_WIDTHS,
        CabinetType::Wall => WALL_WIDTHS,
        CabinetType::Tall => TALL_WIDTHS,
    }
}

/// Enumerated standard heights for a cabinet type
pub fn standard_heights(cabinet_type: CabinetType) -> &'static [f64] {
    match cabinet_type {
        CabinetType::Base => BASE_HEIGHTS,
        CabinetType::Wall => WALL_HEIGHTS,
        CabinetType::Tall => TALL_HEIGHTS,
    }
}

/// Enumerated standard depths for a cabinet type, default first
pub fn standard_depths(cabinet_type: CabinetType) -> &'static [f64] {
    match cabinet_type {
        CabinetType::Base => BASE_DEPTHS,
        CabinetType::Wall => WALL_DEPTHS,
        CabinetType::Tall => TALL_DEPTHS,
    }
}

/// Height used when a request does not name one
pub fn default_height(cabinet_type: CabinetType) -> f64 {
    match cabinet_type {
        CabinetType::Base => BASE_HEIGHT,
        CabinetType::Wall => 30.0,
        CabinetType::Tall => 84.0,
    }
}

pub fn default_depth(cabinet_type: CabinetType) -> f64 {
    standard_depths(cabinet_type)[0]
}

fn contains(set: &[f64], value: f64) -> bool {
    set.iter().any(|v| *v == value)
}

pub fn is_standard_width(cabinet_type: CabinetType, width: f64) -> bool {
    contains(standard_widths(cabinet_type), width)
}

pub fn is_standard_height(cabinet_type: CabinetType, height: f64) -> bool {
    contains(standard_heights(cabinet_type), height)
}

pub fn is_standard_depth(cabinet_type: CabinetType, depth: f64) -> bool {
    contains(standard_depths(cabinet_type), depth)
}

/// Doors hung on a box of the given width: one up to 21", two above
pub fn default_door_count(width: f64) -> u32 {
    if width <= 21.0 {
        1
    } else {
        2
    }
}

/// Adjustable shelves for a box of the given type and height
pub fn default_shelf_count(cabinet_type: CabinetType, height: f64) -> u32 {
    match cabinet_type {
        CabinetType::Base => 1,
        CabinetType::Wall => match height {
            h if h <= 15.0 => 0,
            h if h <= 24.0 => 1,
            h if h <= 36.0 => 2,
            _ => 3,
        },
        CabinetType::Tall => 4,
    }
}

/// Immutable cabinet template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetTemplate {
    pub id: String,
    pub name: String,
    pub cabinet_type: CabinetType,
    pub style: CabinetStyle,
    pub dimensions: Dimensions,
    pub door_count: u32,
    pub shelf_count: u32,
}

impl CabinetTemplate {
    fn standard(cabinet_type: CabinetType, width: f64, height: f64) -> Self {
        let (id, name) = match cabinet_type {
            CabinetType::Base => (
                format!("base-{}", width),
                format!("Base Cabinet {}\"", width),
            ),
            CabinetType::Wall => (
                format!("wall-{}x{}", width, height),
                format!("Wall Cabinet {}\" x {}\"", width, height),
            ),
            CabinetType::Tall => (
                format!("tall-{}x{}", width, height),
                format!("Tall Cabinet {}\" x {}\"", width, height),
            ),
        };

        Self {
            id,
            name,
            cabinet_type,
            style: CabinetStyle::Euro,
            dimensions: Dimensions::new(
                width,
                height,
                default_depth(cabinet_type),
                DEFAULT_THICKNESS,
            ),
            door_count: default_door_count(width),
            shelf_count: default_shelf_count(cabinet_type, height),
        }
    }
}

/// Read-only template catalog
#[derive(Debug)]
pub struct TemplateCatalog {
    templates: Vec<CabinetTemplate>,
}

impl TemplateCatalog {
    fn build() -> Self {
        let mut templates = Vec::new();

        for &width in BASE_WIDTHS {
            templates.push(CabinetTemplate::standard(
                CabinetType::Base,
                width,
                BASE_HEIGHT,
            ));
        }
        for &width in WALL_WIDTHS {
            for &height in CATALOG_WALL_HEIGHTS {
                templates.push(CabinetTemplate::standard(CabinetType::Wall, width, height));
            }
        }
        for &width in TALL_WIDTHS {
            for &height in CATALOG_TALL_HEIGHTS {
                templates.push(CabinetTemplate::standard(CabinetType::Tall, width, height));
            }
        }

        tracing::debug!("Built cabinet catalog with {} templates", templates.len());
        Self { templates }
    }

    /// Templates of one type, or all templates, ordered by type, width, height
    pub fn list(&self, cabinet_type: Option<CabinetType>) -> Vec<&CabinetTemplate> {
        self.templates
            .iter()
            .filter(|t| cabinet_type.is_none_or(|ty| t.cabinet_type == ty))
            .collect()
    }

    pub fn get(&self, id: &str) -> CabinetResult<&CabinetTemplate> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CabinetError::not_found("template", id))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Shared catalog, built on first use
pub fn catalog() -> &'static TemplateCatalog {
    static CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();
    CATALOG.get_or_init(TemplateCatalog::build)
}

/// List templates, optionally restricted to one cabinet type
pub fn list_templates(cabinet_type: Option<CabinetType>) -> Vec<&'static CabinetTemplate> {
    catalog().list(cabinet_type)
}

/// Look up a template by id
pub fn get_template(id: &str) -> CabinetResult<&'static CabinetTemplate> {
    catalog().get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        // 10 base + 10 widths x 3 wall heights + 4 widths x 2 tall heights
        assert_eq!(catalog().len(), 10 + 30 + 8);
        assert_eq!(list_templates(Some(CabinetType::Base)).len(), 10);
        assert_eq!(list_templates(Some(CabinetType::Wall)).len(), 30);
        assert_eq!(list_templates(Some(CabinetType::Tall)).len(), 8);
    }

    #[test]
    fn test_get_template() {
        let t = get_template("base-24").unwrap();
        assert_eq!(t.cabinet_type, CabinetType::Base);
        assert_eq!(t.dimensions.width, 24.0);
        assert_eq!(t.dimensions.height, BASE_HEIGHT);
        assert_eq!(t.dimensions.depth, 24.0);
        assert_eq!(t.door_count, 2);
        assert_eq!(t.shelf_count, 1);

        let t = get_template("wall-15x30").unwrap();
        assert_eq!(t.name, "Wall Cabinet 15\" x 30\"");
        assert_eq!(t.door_count, 1);
        assert_eq!(t.shelf_count, 2);
        assert_eq!(t.dimensions.depth, 12.0);
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let err = get_template("base-25").unwrap_err();
        assert!(err.is_not_found());
        assert!(get_template("").is_err());
    }

    #[test]
    fn test_standard_sets() {
        assert!(is_standard_width(CabinetType::Base, 36.0));
        assert!(!is_standard_width(CabinetType::Base, 37.0));
        assert!(!is_standard_width(CabinetType::Tall, 9.0));
        assert!(is_standard_height(CabinetType::Wall, 42.0));
        assert!(!is_standard_height(CabinetType::Base, 30.0));
        assert!(is_standard_depth(CabinetType::Wall, 24.0));
    }

    #[test]
    fn test_default_counts() {
        assert_eq!(default_door_count(21.0), 1);
        assert_eq!(default_door_count(24.0), 2);
        assert_eq!(default_shelf_count(CabinetType::Wall, 12.0), 0);
        assert_eq!(default_shelf_count(CabinetType::Wall, 42.0), 3);
        assert_eq!(default_shelf_count(CabinetType::Tall, 96.0), 4);
    }

    #[test]
    fn test_every_template_has_valid_dimensions() {
        for t in list_templates(None) {
            assert!(t.dimensions.validate().is_ok(), "{} invalid", t.id);
        }
    }
}
