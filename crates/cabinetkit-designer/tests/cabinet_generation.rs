// Cabinet generation integration tests
// Covers every standard size for every cabinet type, template instantiation
// and patch round-trips through the cut-list builder.

use cabinetkit_core::{CabinetError, CabinetStyle, CabinetType};
use cabinetkit_designer::catalog::{standard_depths, standard_heights, standard_widths};
use cabinetkit_designer::cut_list::total_part_count;
use cabinetkit_designer::{
    apply_patch, build_cut_list, list_templates, CabinetGenerator, CabinetPatch, CabinetRequest,
    SequentialIdSource, UuidIdSource,
};

fn generator() -> CabinetGenerator {
    CabinetGenerator::new(SequentialIdSource::new("it"))
}

#[test]
fn test_every_standard_size_matches_part_count() {
    let gen = generator();
    let styles = [CabinetStyle::Euro, CabinetStyle::Inset, CabinetStyle::FaceFrame];

    for &ty in CabinetType::all() {
        for &width in standard_widths(ty) {
            for &height in standard_heights(ty) {
                for &depth in standard_depths(ty) {
                    for style in styles {
                        let req = CabinetRequest::new(ty, width)
                            .height(height)
                            .depth(depth)
                            .style(style);
                        let cab = gen.generate(&req).unwrap_or_else(|e| {
                            panic!("{} {}x{}x{} {}: {}", ty, width, height, depth, style, e)
                        });
                        let items = build_cut_list(&cab).unwrap();
                        assert_eq!(
                            total_part_count(&items),
                            cab.expected_part_count(),
                            "{} {}x{}",
                            ty,
                            width,
                            height
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_generation_is_deterministic_apart_from_id() {
    let gen = CabinetGenerator::new(UuidIdSource);
    let req = CabinetRequest::new(CabinetType::Wall, 30.0).height(36.0);

    let a = gen.generate(&req).unwrap();
    let b = gen.generate(&req).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.with_id("x"), b.with_id("x"));

    let items_a = build_cut_list(&a.with_id("x")).unwrap();
    let items_b = build_cut_list(&b.with_id("x")).unwrap();
    assert_eq!(items_a, items_b);
}

#[test]
fn test_every_template_generates() {
    let gen = generator();
    for template in list_templates(None) {
        let cab = gen.from_template(template).unwrap();
        assert_eq!(cab.template_id.as_deref(), Some(template.id.as_str()));
        assert_eq!(cab.dimensions, template.dimensions);
        let items = build_cut_list(&cab).unwrap();
        assert_eq!(total_part_count(&items), cab.expected_part_count());
    }
}

#[test]
fn test_patch_then_rebuild_cut_list() {
    let gen = generator();
    let cab = gen.from_template_id("base-30").unwrap();
    let before = build_cut_list(&cab).unwrap();

    let patch = CabinetPatch {
        shelf_count: Some(2),
        include_back: Some(false),
        ..Default::default()
    };
    let next = apply_patch(&cab, &patch).unwrap();
    let after = build_cut_list(&next).unwrap();

    assert_eq!(total_part_count(&after), next.expected_part_count());
    assert_eq!(total_part_count(&after), total_part_count(&before));
    assert!(after.iter().all(|i| i.name != "Back Panel"));
    assert_eq!(
        after.iter().find(|i| i.name == "Shelf").map(|i| i.quantity),
        Some(2)
    );
}

#[test]
fn test_patch_into_degenerate_door_split() {
    let gen = generator();
    let cab = gen.generate_base(9.0).unwrap();
    let patch = CabinetPatch {
        door_count: Some(40),
        ..Default::default()
    };
    let next = apply_patch(&cab, &patch).unwrap();
    assert!(matches!(
        build_cut_list(&next),
        Err(CabinetError::DegenerateConfiguration(_))
    ));
}

#[test]
fn test_public_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<cabinetkit_designer::Cabinet>();
    assert_send_sync::<cabinetkit_designer::CabinetTemplate>();
    assert_send_sync::<cabinetkit_designer::CutListItem>();
    assert_send_sync::<cabinetkit_designer::CutListReport>();
    assert_send_sync::<CabinetGenerator>();
    assert_send_sync::<CabinetError>();
}
