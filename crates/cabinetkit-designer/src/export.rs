//! Cut-list export
//!
//! CSV for the shop floor and JSON reports for the UI.
//!
//! CSV columns: `Part Name,Width,Height,Thickness,Qty,Material,Edge Banding`.
//! Dimensions are written unit-suffixed (`720mm`, `22.5in`) with at most
//! three decimals. The edge-banding column joins the banded edges with commas
//! and is empty when nothing is banded.

use crate::cabinet::Cabinet;
use crate::cut_list::{CutListItem, CutListSummary};
use cabinetkit_core::units::unit_label;
use cabinetkit_core::{Error, MeasurementSystem, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// CSV header row
pub const CSV_HEADER: [&str; 7] = [
    "Part Name",
    "Width",
    "Height",
    "Thickness",
    "Qty",
    "Material",
    "Edge Banding",
];

/// Format a dimension with its unit suffix, trimming trailing zeros
pub fn format_dimension(value: f64, system: MeasurementSystem) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}{}", rounded, unit_label(system))
}

fn record(item: &CutListItem, system: MeasurementSystem) -> [String; 7] {
    let banding = item
        .edge_banding
        .edges()
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(",");

    [
        item.name.clone(),
        format_dimension(item.width, system),
        format_dimension(item.height, system),
        format_dimension(item.thickness, system),
        item.quantity.to_string(),
        item.material.clone(),
        banding,
    ]
}

/// Write a cut list as CSV. Item sizes must already be in `system`.
pub fn write_csv<W: Write>(items: &[CutListItem], system: MeasurementSystem, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for item in items {
        wtr.write_record(record(item, system))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render a cut list as a CSV string. Item sizes must already be in `system`.
pub fn export_csv(items: &[CutListItem], system: MeasurementSystem) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(items, system, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::other(format!("CSV output is not UTF-8: {}", e)))
}

/// JSON manufacturing report for one cabinet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutListReport {
    pub generated_at: DateTime<Utc>,
    pub unit: MeasurementSystem,
    pub cabinet: Cabinet,
    pub items: Vec<CutListItem>,
    pub summary: CutListSummary,
}

impl CutListReport {
    /// Build a report from an inch cut list, converting it to `unit`.
    ///
    /// The timestamp is supplied by the caller.
    pub fn new(
        cabinet: &Cabinet,
        items: &[CutListItem],
        unit: MeasurementSystem,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let items = crate::cut_list::convert_items(items, MeasurementSystem::Imperial, unit);
        let summary = CutListSummary::from_items(&items);
        Self {
            generated_at,
            unit,
            cabinet: cabinet.clone(),
            items,
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_csv(&self) -> Result<String> {
        export_csv(&self.items, self.unit)
    }
}
