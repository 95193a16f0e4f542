//! Hole placement and pattern association.
//!
//! Expands a [`DrillPattern`] layout into hole centres for a given panel and
//! binds a pattern to a cut-list item. Association is always explicit: the
//! caller decides which pattern goes on which part.

use crate::drill_patterns::{DrillPattern, DrillSettings, HoleCount};
use cabinetkit_core::{CabinetError, CabinetResult, MeasurementSystem};
use cabinetkit_designer::CutListItem;
use serde::{Deserialize, Serialize};

/// A single hole centre on a panel face, in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HolePosition {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    pub depth: f64,
}

/// Upper bound on holes a fill row may produce
pub const MAX_HOLES_PER_ROW: u32 = 10_000;

/// X positions along one row
fn row_positions(pattern: &DrillPattern, width: f64) -> CabinetResult<Vec<f64>> {
    let layout = &pattern.layout;
    let start = layout.end_offset;
    let end = width - layout.end_offset;

    let xs = match layout.count {
        HoleCount::Fill => {
            if layout.pitch <= 0.0 {
                return Err(CabinetError::degenerate(format!(
                    "pattern {} has no pitch to fill with",
                    pattern.id
                )));
            }
            if end + 1e-9 < start {
                Vec::new()
            } else {
                let span = (end - start + 1e-9) / layout.pitch;
                if span >= f64::from(MAX_HOLES_PER_ROW) {
                    return Err(CabinetError::degenerate(format!(
                        "panel {:.1}mm needs more than {} holes per row of {}",
                        width, MAX_HOLES_PER_ROW, pattern.id
                    )));
                }
                let count = span.floor() as u32 + 1;
                (0..count)
                    .map(|i| start + f64::from(i) * layout.pitch)
                    .collect()
            }
        }
        HoleCount::Fixed(n) => {
            let span = f64::from(n.saturating_sub(1)) * layout.pitch;
            let first = (width - span) / 2.0;
            (0..n).map(|i| first + f64::from(i) * layout.pitch).collect()
        }
        HoleCount::Spread(1) => vec![width / 2.0],
        HoleCount::Spread(n) => {
            if end < start {
                return Err(CabinetError::degenerate(format!(
                    "panel {:.1}mm is shorter than the end offsets of {}",
                    width, pattern.id
                )));
            }
            let step = (end - start) / f64::from(n.saturating_sub(1).max(1));
            (0..n).map(|i| start + f64::from(i) * step).collect()
        }
    };

    if xs.is_empty() {
        return Err(CabinetError::degenerate(format!(
            "panel {:.1}mm fits no holes of {}",
            width, pattern.id
        )));
    }
    Ok(xs)
}

impl DrillPattern {
    /// Hole centres for a `width_mm` x `height_mm` panel.
    ///
    /// Non-finite or non-positive panel sizes are `InvalidDimension`. Fails
    /// with `DegenerateConfiguration` if any hole would break out of the
    /// panel or a fill row would exceed [`MAX_HOLES_PER_ROW`].
    pub fn hole_positions(&self, width_mm: f64, height_mm: f64) -> CabinetResult<Vec<HolePosition>> {
        for (name, value) in [("panel width", width_mm), ("panel height", height_mm)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CabinetError::invalid_dimension(name, value, "must be positive"));
            }
        }

        let layout = &self.layout;
        let diameter = self.drill_settings.tool_diameter;
        let radius = diameter / 2.0;

        if layout.rows == 0 {
            return Err(CabinetError::degenerate(format!(
                "pattern {} has no rows",
                self.id
            )));
        }

        let xs = row_positions(self, width_mm)?;
        let mut holes = Vec::with_capacity(xs.len() * layout.rows as usize);
        for row in 0..layout.rows {
            let y = layout.edge_offset + f64::from(row) * layout.row_spacing;
            for &x in &xs {
                holes.push(HolePosition {
                    x,
                    y,
                    diameter,
                    depth: layout.depth,
                });
            }
        }

        let eps = 1e-9;
        if let Some(hole) = holes.iter().find(|h| {
            h.x - radius < -eps
                || h.x + radius > width_mm + eps
                || h.y - radius < -eps
                || h.y + radius > height_mm + eps
        }) {
            return Err(CabinetError::degenerate(format!(
                "{} hole at ({:.1}, {:.1}) falls outside a {:.1} x {:.1}mm panel",
                self.id, hole.x, hole.y, width_mm, height_mm
            )));
        }

        Ok(holes)
    }
}

/// A pattern bound to one cut-list item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillOperation {
    pub id: String,
    pub pattern_id: String,
    pub part_id: String,
    pub part_name: String,
    /// Number of identical parts to bore
    pub quantity: u32,
    pub settings: DrillSettings,
    /// Holes for a single part, in millimetres
    pub holes: Vec<HolePosition>,
    /// Minutes for all parts
    pub estimated_time: u32,
}

impl DrillOperation {
    pub fn holes_per_part(&self) -> usize {
        self.holes.len()
    }

    pub fn total_holes(&self) -> usize {
        self.holes.len() * self.quantity as usize
    }

    /// Plunges needed per hole
    pub fn calculate_pecks(&self) -> u32 {
        let depth = self.holes.first().map(|h| h.depth).unwrap_or(0.0);
        match self.settings.peck_depth {
            Some(peck) if peck > 0.0 => (depth.abs() / peck).ceil().max(1.0) as u32,
            _ => 1,
        }
    }
}

/// Associate a pattern with a cut-list item whose sizes are in `unit`.
pub fn attach_pattern(
    pattern: &DrillPattern,
    item: &CutListItem,
    unit: MeasurementSystem,
) -> CabinetResult<DrillOperation> {
    let width_mm = unit.convert(item.width, MeasurementSystem::Metric);
    let height_mm = unit.convert(item.height, MeasurementSystem::Metric);
    let thickness_mm = unit.convert(item.thickness, MeasurementSystem::Metric);

    if pattern.layout.depth > thickness_mm {
        return Err(CabinetError::degenerate(format!(
            "{} bores {:.1}mm deep into a {:.1}mm {}",
            pattern.id, pattern.layout.depth, thickness_mm, item.name
        )));
    }

    let holes = pattern.hole_positions(width_mm, height_mm)?;
    tracing::debug!(
        pattern = %pattern.id,
        part = %item.id,
        holes = holes.len(),
        "Attached drill pattern"
    );

    Ok(DrillOperation {
        id: format!("{}-{}", item.id, pattern.id),
        pattern_id: pattern.id.clone(),
        part_id: item.id.clone(),
        part_name: item.name.clone(),
        quantity: item.quantity,
        settings: pattern.drill_settings.clone(),
        holes,
        estimated_time: pattern.estimated_time * item.quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_patterns::get_pattern;
    use cabinetkit_designer::EdgeBanding;

    fn side_panel_mm() -> CutListItem {
        CutListItem {
            id: "cab-1-side".to_string(),
            name: "Side Panel".to_string(),
            width: 720.0,
            height: 600.0,
            thickness: 18.0,
            quantity: 2,
            material: "plywood".to_string(),
            edge_banding: EdgeBanding::FRONT,
        }
    }

    #[test]
    fn test_shelf_pins_fill_panel() {
        let holes = get_pattern("shelf-pins-32mm")
            .unwrap()
            .hole_positions(720.0, 600.0)
            .unwrap();
        // 64, 96, ... 640
        assert_eq!(holes.len(), 19);
        assert_eq!(holes[0].x, 64.0);
        assert_eq!(holes[18].x, 640.0);
        assert!(holes.iter().all(|h| h.y == 37.0 && h.diameter == 5.0));
    }

    #[test]
    fn test_fixed_count_is_centred() {
        let holes = get_pattern("handle-mount-128mm")
            .unwrap()
            .hole_positions(400.0, 700.0)
            .unwrap();
        assert_eq!(holes.len(), 2);
        assert_eq!(holes[0].x, 136.0);
        assert_eq!(holes[1].x, 264.0);
    }

    #[test]
    fn test_spread_count() {
        let hinge = get_pattern("hinge-cup-35mm").unwrap();
        let holes = hinge.hole_positions(300.0, 700.0).unwrap();
        assert_eq!(holes.len(), 2);
        assert_eq!(holes[0].x, 100.0);
        assert_eq!(holes[1].x, 200.0);

        let knob = get_pattern("knob-single").unwrap();
        let holes = knob.hole_positions(300.0, 400.0).unwrap();
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].x, 150.0);
    }

    #[test]
    fn test_grid_rows() {
        let holes = get_pattern("drawer-slide-32mm")
            .unwrap()
            .hole_positions(500.0, 300.0)
            .unwrap();
        assert_eq!(holes.len(), 8);
        assert_eq!(holes[4].y, 37.0 + 96.0);
    }

    #[test]
    fn test_panel_too_small() {
        let p = get_pattern("shelf-pins-32mm").unwrap();
        assert!(matches!(
            p.hole_positions(100.0, 600.0),
            Err(CabinetError::DegenerateConfiguration(_))
        ));
        let p = get_pattern("hinge-cup-35mm").unwrap();
        assert!(p.hole_positions(150.0, 30.0).is_err());
    }

    #[test]
    fn test_non_finite_panel_rejected() {
        let p = get_pattern("shelf-pins-32mm").unwrap();
        assert!(matches!(
            p.hole_positions(f64::INFINITY, 600.0),
            Err(CabinetError::InvalidDimension { name: "panel width", .. })
        ));
        assert!(matches!(
            p.hole_positions(720.0, f64::NAN),
            Err(CabinetError::InvalidDimension { name: "panel height", .. })
        ));
        assert!(p.hole_positions(-720.0, 600.0).is_err());
    }

    #[test]
    fn test_huge_panel_is_bounded() {
        let p = get_pattern("shelf-pins-32mm").unwrap();
        assert!(matches!(
            p.hole_positions(1e12, 600.0),
            Err(CabinetError::DegenerateConfiguration(_))
        ));

        // 64 + 9999 * 32 = 320032, the last hole a full row allows
        let holes = p.hole_positions(320_096.0, 600.0).unwrap();
        assert_eq!(holes.len(), MAX_HOLES_PER_ROW as usize);
        assert_eq!(holes[holes.len() - 1].x, 320_032.0);
    }

    #[test]
    fn test_attach_pattern() {
        let pattern = get_pattern("shelf-pins-32mm").unwrap();
        let op = attach_pattern(pattern, &side_panel_mm(), MeasurementSystem::Metric).unwrap();
        assert_eq!(op.id, "cab-1-side-shelf-pins-32mm");
        assert_eq!(op.quantity, 2);
        assert_eq!(op.total_holes(), 38);
        assert_eq!(op.estimated_time, 20);
        assert_eq!(op.calculate_pecks(), 1);
    }

    #[test]
    fn test_attach_converts_inches() {
        let mut item = side_panel_mm();
        item.width = 34.5;
        item.height = 24.0;
        item.thickness = 0.75;
        let op = attach_pattern(
            get_pattern("shelf-pins-32mm").unwrap(),
            &item,
            MeasurementSystem::Imperial,
        )
        .unwrap();
        // 876.3mm long, holes from 64 to 800
        assert_eq!(op.holes_per_part(), 24);
        assert_eq!(op.holes[23].x, 800.0);
    }

    #[test]
    fn test_attach_rejects_bore_through_thin_panel() {
        let mut back = side_panel_mm();
        back.thickness = 9.0;
        let err = attach_pattern(
            get_pattern("shelf-pins-32mm").unwrap(),
            &back,
            MeasurementSystem::Metric,
        )
        .unwrap_err();
        assert!(matches!(err, CabinetError::DegenerateConfiguration(_)));
    }

    #[test]
    fn test_dowel_pecks() {
        let op = attach_pattern(
            get_pattern("dowel-8mm").unwrap(),
            &side_panel_mm(),
            MeasurementSystem::Metric,
        )
        .unwrap();
        assert_eq!(op.calculate_pecks(), 2);
        assert_eq!(op.holes_per_part(), 6);
    }
}
