//! Cabinet record and partial-update patches.

use cabinetkit_core::{CabinetResult, CabinetStyle, CabinetType, Dimensions, DoorStyle};
use serde::{Deserialize, Serialize};

/// A single parametrized cabinet.
///
/// The cut list is not stored here; it is derived on demand with
/// [`crate::cut_list::build_cut_list`] and regenerated whenever the cabinet
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub id: String,
    /// Catalog template this cabinet was created from, if any
    pub template_id: Option<String>,
    pub cabinet_type: CabinetType,
    pub dimensions: Dimensions,
    pub style: CabinetStyle,
    pub door_style: DoorStyle,
    pub material: String,
    pub door_count: u32,
    pub shelf_count: u32,
    pub include_back: bool,
}

impl Cabinet {
    /// Copy of this cabinet with a different id, for comparing generated
    /// records independently of the injected identifier.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    /// Total number of physical parts the cut list will contain
    pub fn expected_part_count(&self) -> u32 {
        4 + self.shelf_count + self.door_count + u32::from(self.include_back)
    }
}

/// Partial update to a [`Cabinet`]. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinetPatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub thickness: Option<f64>,
    pub style: Option<CabinetStyle>,
    pub door_style: Option<DoorStyle>,
    pub material: Option<String>,
    pub door_count: Option<u32>,
    pub shelf_count: Option<u32>,
    pub include_back: Option<bool>,
}

impl CabinetPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Merge a patch into a cabinet, returning the updated cabinet.
///
/// The input is left untouched. Dimension changes are re-validated; a patched
/// cabinet keeps its id but is detached from its template once any dimension
/// or count differs from it.
pub fn apply_patch(cabinet: &Cabinet, patch: &CabinetPatch) -> CabinetResult<Cabinet> {
    let mut next = cabinet.clone();

    if let Some(width) = patch.width {
        next.dimensions.width = width;
    }
    if let Some(height) = patch.height {
        next.dimensions.height = height;
    }
    if let Some(depth) = patch.depth {
        next.dimensions.depth = depth;
    }
    if let Some(thickness) = patch.thickness {
        next.dimensions.thickness = thickness;
    }
    if let Some(style) = patch.style {
        next.style = style;
    }
    if let Some(door_style) = patch.door_style {
        next.door_style = door_style;
    }
    if let Some(material) = &patch.material {
        next.material = material.clone();
    }
    if let Some(door_count) = patch.door_count {
        next.door_count = door_count;
    }
    if let Some(shelf_count) = patch.shelf_count {
        next.shelf_count = shelf_count;
    }
    if let Some(include_back) = patch.include_back {
        next.include_back = include_back;
    }

    next.dimensions.validate()?;

    if next.dimensions != cabinet.dimensions
        || next.door_count != cabinet.door_count
        || next.shelf_count != cabinet.shelf_count
        || next.style != cabinet.style
    {
        next.template_id = None;
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::CabinetError;

    fn sample() -> Cabinet {
        Cabinet {
            id: "cab-1".to_string(),
            template_id: Some("base-24".to_string()),
            cabinet_type: CabinetType::Base,
            dimensions: Dimensions::new(24.0, 34.5, 24.0, 0.75),
            style: CabinetStyle::Euro,
            door_style: DoorStyle::Shaker,
            material: "plywood".to_string(),
            door_count: 2,
            shelf_count: 1,
            include_back: true,
        }
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let cab = sample();
        let patch = CabinetPatch::default();
        assert!(patch.is_empty());
        assert_eq!(apply_patch(&cab, &patch).unwrap(), cab);
    }

    #[test]
    fn test_patch_returns_new_value() {
        let cab = sample();
        let patch = CabinetPatch {
            width: Some(30.0),
            material: Some("mdf".to_string()),
            ..Default::default()
        };

        let next = apply_patch(&cab, &patch).unwrap();
        assert_eq!(next.dimensions.width, 30.0);
        assert_eq!(next.material, "mdf");
        assert_eq!(next.id, "cab-1");
        assert_eq!(next.template_id, None);

        // original untouched
        assert_eq!(cab.dimensions.width, 24.0);
        assert_eq!(cab.template_id.as_deref(), Some("base-24"));
    }

    #[test]
    fn test_cosmetic_patch_keeps_template() {
        let cab = sample();
        let patch = CabinetPatch {
            door_style: Some(DoorStyle::Slab),
            ..Default::default()
        };
        let next = apply_patch(&cab, &patch).unwrap();
        assert_eq!(next.template_id.as_deref(), Some("base-24"));
    }

    #[test]
    fn test_patch_rejects_invalid_dimension() {
        let cab = sample();
        let patch = CabinetPatch {
            depth: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            apply_patch(&cab, &patch),
            Err(CabinetError::InvalidDimension { name: "depth", .. })
        ));
    }

    #[test]
    fn test_patch_from_json() {
        let patch: CabinetPatch =
            serde_json::from_str(r#"{"shelf_count": 3, "include_back": false}"#).unwrap();
        let next = apply_patch(&sample(), &patch).unwrap();
        assert_eq!(next.shelf_count, 3);
        assert!(!next.include_back);
        assert_eq!(next.expected_part_count(), 4 + 3 + 2);
    }
}
