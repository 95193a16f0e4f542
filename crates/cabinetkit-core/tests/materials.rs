use cabinetkit_core::data::materials::*;

#[test]
fn test_material_id_display() {
    let id = MaterialId("baltic-birch".to_string());
    assert_eq!(id.to_string(), "baltic-birch");
}

#[test]
fn test_material_creation_defaults() {
    let material = SheetMaterial::new(
        MaterialId("baltic-birch".to_string()),
        "Baltic Birch".to_string(),
        MaterialCategory::Plywood,
        0.709,
    );

    assert_eq!(material.id.0, "baltic-birch");
    assert_eq!(material.sheet, SheetSize::FOUR_BY_EIGHT);
    assert!(material.accepts_edge_banding);
}

#[test]
fn test_material_library_add_and_resolve() {
    let mut library = MaterialLibrary::new();
    assert!(library.is_empty());

    library.add_material(SheetMaterial::new(
        MaterialId("walnut-ply".to_string()),
        "Walnut Plywood".to_string(),
        MaterialCategory::Plywood,
        0.75,
    ));

    assert_eq!(library.len(), 1);
    assert!(library
        .get_material(&MaterialId("walnut-ply".to_string()))
        .is_some());
    assert_eq!(library.resolve("WALNUT PLYWOOD").unwrap().id.0, "walnut-ply");
}

#[test]
fn test_back_panel_stock_is_not_banded() {
    let hardboard = standard_library().resolve("hardboard").unwrap();
    assert_eq!(hardboard.thickness, 0.25);
    assert!(!hardboard.accepts_edge_banding);
}
