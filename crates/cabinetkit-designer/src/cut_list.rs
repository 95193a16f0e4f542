//! # Cut-List Builder
//!
//! Decomposes a [`Cabinet`] into its flat panels: two sides, a top, a bottom,
//! the shelves, the doors and the optional back.
//!
//! Panel sizes are `width x height` in the cabinet's unit (inches). For every
//! generated cabinet the quantities add up to
//! `4 + shelf_count + door_count + (include_back as u32)`.
//!
//! Edge-banding convention: a panel's `Top` edge is its front-facing edge.

use crate::cabinet::Cabinet;
use cabinetkit_core::{CabinetError, CabinetResult, MeasurementSystem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Shelf width and depth clearance in inches
pub const SHELF_CLEARANCE: f64 = 0.125;

/// Panel edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of banded edges, serialized as a list of edge names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Edge>", into = "Vec<Edge>")]
pub struct EdgeBanding {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
}

impl EdgeBanding {
    pub const NONE: EdgeBanding = EdgeBanding {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub const ALL: EdgeBanding = EdgeBanding {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    /// Front edge only
    pub const FRONT: EdgeBanding = EdgeBanding {
        top: true,
        bottom: false,
        left: false,
        right: false,
    };

    pub fn with(mut self, edge: Edge) -> Self {
        match edge {
            Edge::Top => self.top = true,
            Edge::Bottom => self.bottom = true,
            Edge::Left => self.left = true,
            Edge::Right => self.right = true,
        }
        self
    }

    pub fn contains(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    /// Banded edges in top, bottom, left, right order
    pub fn edges(&self) -> Vec<Edge> {
        Edge::ALL.into_iter().filter(|e| self.contains(*e)).collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Total banded edge length for one panel of `width x height`
    pub fn length(&self, width: f64, height: f64) -> f64 {
        self.edges()
            .into_iter()
            .map(|e| match e {
                Edge::Top | Edge::Bottom => width,
                Edge::Left | Edge::Right => height,
            })
            .sum()
    }
}

impl From<Vec<Edge>> for EdgeBanding {
    fn from(edges: Vec<Edge>) -> Self {
        edges.into_iter().fold(Self::NONE, |acc, e| acc.with(e))
    }
}

impl From<EdgeBanding> for Vec<Edge> {
    fn from(banding: EdgeBanding) -> Self {
        banding.edges()
    }
}

/// One cut-list line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutListItem {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub quantity: u32,
    pub material: String,
    pub edge_banding: EdgeBanding,
}

impl CutListItem {
    /// Face area of a single panel
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Same item with its sizes converted between measurement systems
    pub fn converted(&self, from: MeasurementSystem, to: MeasurementSystem) -> Self {
        Self {
            width: from.convert(self.width, to),
            height: from.convert(self.height, to),
            thickness: from.convert(self.thickness, to),
            ..self.clone()
        }
    }
}

fn panel(
    cabinet: &Cabinet,
    slug: &str,
    name: &str,
    size: (f64, f64),
    thickness: f64,
    quantity: u32,
    edge_banding: EdgeBanding,
) -> CabinetResult<CutListItem> {
    let (width, height) = size;
    if !(width > 0.0 && height > 0.0 && thickness > 0.0) {
        return Err(CabinetError::degenerate(format!(
            "{} would be {:.3} x {:.3} x {:.3}",
            name, width, height, thickness
        )));
    }
    Ok(CutListItem {
        id: format!("{}-{}", cabinet.id, slug),
        name: name.to_string(),
        width,
        height,
        thickness,
        quantity,
        material: cabinet.material.clone(),
        edge_banding,
    })
}

/// Build the cut list for a cabinet.
///
/// Shelves and doors are omitted when their count is zero. Any panel that
/// would come out zero or negative fails the whole cabinet with
/// `DegenerateConfiguration`.
pub fn build_cut_list(cabinet: &Cabinet) -> CabinetResult<Vec<CutListItem>> {
    cabinet.dimensions.validate()?;

    let d = &cabinet.dimensions;
    let t = d.thickness;
    let inner_width = d.width - 2.0 * t;
    let carcass_banding = if cabinet.style.exposes_carcass_edges() {
        EdgeBanding::FRONT
    } else {
        EdgeBanding::NONE
    };

    let mut items = vec![
        panel(
            cabinet,
            "side",
            "Side Panel",
            (d.height, d.depth),
            t,
            2,
            carcass_banding,
        )?,
        panel(
            cabinet,
            "top",
            "Top Panel",
            (inner_width, d.depth),
            t,
            1,
            carcass_banding,
        )?,
        panel(
            cabinet,
            "bottom",
            "Bottom Panel",
            (inner_width, d.depth),
            t,
            1,
            carcass_banding,
        )?,
    ];

    if cabinet.shelf_count > 0 {
        items.push(panel(
            cabinet,
            "shelf",
            "Shelf",
            (
                inner_width - SHELF_CLEARANCE,
                d.depth - SHELF_CLEARANCE,
            ),
            t,
            cabinet.shelf_count,
            EdgeBanding::FRONT,
        )?);
    }

    if cabinet.door_count > 0 {
        let clearance = cabinet.style.door_clearance();
        items.push(panel(
            cabinet,
            "door",
            "Door",
            (
                d.width / f64::from(cabinet.door_count) - clearance,
                d.height - clearance,
            ),
            t,
            cabinet.door_count,
            EdgeBanding::ALL,
        )?);
    }

    if cabinet.include_back {
        items.push(panel(
            cabinet,
            "back",
            "Back Panel",
            (inner_width, d.height - 2.0 * t),
            t / 2.0,
            1,
            EdgeBanding::NONE,
        )?);
    }

    tracing::debug!(
        id = %cabinet.id,
        line_items = items.len(),
        parts = total_part_count(&items),
        "Built cut list"
    );
    Ok(items)
}

/// Number of physical parts (sum of quantities)
pub fn total_part_count(items: &[CutListItem]) -> u32 {
    items.iter().map(|i| i.quantity).sum()
}

/// Convert a whole cut list between measurement systems
pub fn convert_items(
    items: &[CutListItem],
    from: MeasurementSystem,
    to: MeasurementSystem,
) -> Vec<CutListItem> {
    items.iter().map(|i| i.converted(from, to)).collect()
}

/// Per-material totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialTotals {
    pub part_count: u32,
    /// Face area, square units
    pub area: f64,
    /// Banded edge length, linear units
    pub edge_banding_length: f64,
}

/// Shop summary of a cut list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutListSummary {
    pub line_items: usize,
    pub part_count: u32,
    pub total_area: f64,
    pub edge_banding_length: f64,
    pub by_material: BTreeMap<String, MaterialTotals>,
}

impl CutListSummary {
    pub fn from_items(items: &[CutListItem]) -> Self {
        let mut summary = Self {
            line_items: items.len(),
            ..Default::default()
        };

        for item in items {
            let qty = f64::from(item.quantity);
            let area = item.area() * qty;
            let banding = item.edge_banding.length(item.width, item.height) * qty;

            summary.part_count += item.quantity;
            summary.total_area += area;
            summary.edge_banding_length += banding;

            let totals = summary.by_material.entry(item.material.clone()).or_default();
            totals.part_count += item.quantity;
            totals.area += area;
            totals.edge_banding_length += banding;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::{CabinetStyle, CabinetType, Dimensions, DoorStyle};

    fn cabinet(style: CabinetStyle, doors: u32, shelves: u32, back: bool) -> Cabinet {
        Cabinet {
            id: "c1".to_string(),
            template_id: None,
            cabinet_type: CabinetType::Base,
            dimensions: Dimensions::new(24.0, 34.5, 24.0, 0.75),
            style,
            door_style: DoorStyle::Shaker,
            material: "plywood".to_string(),
            door_count: doors,
            shelf_count: shelves,
            include_back: back,
        }
    }

    fn find<'a>(items: &'a [CutListItem], name: &str) -> Option<&'a CutListItem> {
        items.iter().find(|i| i.name == name)
    }

    #[test]
    fn test_panel_sizes() {
        let items = build_cut_list(&cabinet(CabinetStyle::Euro, 2, 1, true)).unwrap();

        let side = find(&items, "Side Panel").unwrap();
        assert_eq!((side.width, side.height, side.quantity), (34.5, 24.0, 2));

        let top = find(&items, "Top Panel").unwrap();
        assert_eq!((top.width, top.height), (22.5, 24.0));

        let shelf = find(&items, "Shelf").unwrap();
        assert_eq!((shelf.width, shelf.height), (22.375, 23.875));

        let back = find(&items, "Back Panel").unwrap();
        assert_eq!((back.width, back.height, back.thickness), (22.5, 33.0, 0.375));
        assert!(back.edge_banding.is_empty());
    }

    #[test]
    fn test_euro_door_formula() {
        let items = build_cut_list(&cabinet(CabinetStyle::Euro, 2, 1, true)).unwrap();
        let door = find(&items, "Door").unwrap();
        let c = CabinetStyle::Euro.door_clearance();
        assert_eq!(door.width, 24.0 / 2.0 - c);
        assert_eq!(door.height, 34.5 - c);
        assert_eq!(door.quantity, 2);
        assert_eq!(door.edge_banding, EdgeBanding::ALL);

        let total = door.width * f64::from(door.quantity) + c * f64::from(door.quantity);
        assert!(total <= 24.0 + 1e-9);
    }

    #[test]
    fn test_zero_doors_omits_door_item() {
        let items = build_cut_list(&cabinet(CabinetStyle::Euro, 0, 1, true)).unwrap();
        assert!(find(&items, "Door").is_none());
        assert_eq!(total_part_count(&items), 4 + 1 + 1);
    }

    #[test]
    fn test_zero_shelves_and_no_back() {
        let items = build_cut_list(&cabinet(CabinetStyle::Inset, 1, 0, false)).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(total_part_count(&items), 5);
    }

    #[test]
    fn test_carcass_banding_depends_on_style() {
        let euro = build_cut_list(&cabinet(CabinetStyle::Euro, 1, 1, true)).unwrap();
        assert_eq!(find(&euro, "Side Panel").unwrap().edge_banding.edges(), vec![Edge::Top]);

        let framed = build_cut_list(&cabinet(CabinetStyle::FaceFrame, 1, 1, true)).unwrap();
        assert!(find(&framed, "Side Panel").unwrap().edge_banding.is_empty());
        assert_eq!(
            find(&framed, "Shelf").unwrap().edge_banding,
            EdgeBanding::FRONT
        );
    }

    #[test]
    fn test_degenerate_door_count() {
        let result = build_cut_list(&cabinet(CabinetStyle::Euro, 200, 1, true));
        assert!(matches!(
            result,
            Err(CabinetError::DegenerateConfiguration(_))
        ));
    }

    #[test]
    fn test_item_ids_are_deterministic() {
        let cab = cabinet(CabinetStyle::Euro, 2, 2, true);
        let first = build_cut_list(&cab).unwrap();
        let second = build_cut_list(&cab).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].id, "c1-side");
    }

    #[test]
    fn test_edge_banding_serde() {
        let banding = EdgeBanding::NONE.with(Edge::Left).with(Edge::Top);
        let json = serde_json::to_string(&banding).unwrap();
        assert_eq!(json, r#"["top","left"]"#);
        let back: EdgeBanding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, banding);
    }

    #[test]
    fn test_summary_totals() {
        let items = build_cut_list(&cabinet(CabinetStyle::Euro, 2, 1, false)).unwrap();
        let summary = CutListSummary::from_items(&items);
        assert_eq!(summary.part_count, 7);
        assert_eq!(summary.line_items, 5);

        // sides 2*34.5, top+bottom 2*22.5, shelf 22.375, doors 2*(2*11.875 + 2*34.375)
        let expected = 69.0 + 45.0 + 22.375 + 2.0 * (2.0 * 11.875 + 2.0 * 34.375);
        assert!((summary.edge_banding_length - expected).abs() < 1e-9);
        assert_eq!(summary.by_material["plywood"].part_count, 7);
    }

    #[test]
    fn test_converted_to_metric() {
        let items = build_cut_list(&cabinet(CabinetStyle::Euro, 0, 0, false)).unwrap();
        let metric = convert_items(&items, MeasurementSystem::Imperial, MeasurementSystem::Metric);
        assert!((metric[0].width - 876.3).abs() < 1e-9);
        assert!((metric[0].thickness - 19.05).abs() < 1e-9);
    }
}
