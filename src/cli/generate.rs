//! `cabinetkit generate`

use super::format::{table, LengthFormat};
use cabinetkit_camtools::{estimate_sheet_count, NestingSheet};
use cabinetkit_core::units::parse_length;
use cabinetkit_core::{CabinetStyle, CabinetType, DoorStyle, MeasurementSystem, SheetSize};
use cabinetkit_designer::cut_list::{convert_items, total_part_count};
use cabinetkit_designer::{
    build_cut_list, export_csv, Cabinet, CabinetGenerator, CabinetRequest, CutListItem,
    CutListReport, CutListSummary, UuidIdSource,
};
use cabinetkit_settings::Config;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

fn parse_inches(s: &str) -> Result<f64, String> {
    parse_length(s, MeasurementSystem::Imperial)
}

/// Generate a cabinet and print its cut list
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Cabinet type (base, wall, tall)
    #[arg(long = "type", value_name = "TYPE")]
    pub cabinet_type: CabinetType,

    /// Width in inches, e.g. 24 or "22 1/2"
    #[arg(long, value_parser = parse_inches)]
    pub width: f64,

    /// Height in inches; defaults to the type's standard height
    #[arg(long, value_parser = parse_inches)]
    pub height: Option<f64>,

    /// Depth in inches; defaults to the type's standard depth
    #[arg(long, value_parser = parse_inches)]
    pub depth: Option<f64>,

    /// Construction style (euro, inset, faceframe)
    #[arg(long)]
    pub style: Option<CabinetStyle>,

    /// Door profile (slab, shaker, raised-panel, glass)
    #[arg(long)]
    pub door_style: Option<DoorStyle>,

    /// Sheet material name
    #[arg(long)]
    pub material: Option<String>,

    /// Number of doors
    #[arg(long)]
    pub doors: Option<u32>,

    /// Number of adjustable shelves
    #[arg(long)]
    pub shelves: Option<u32>,

    /// Leave out the back panel
    #[arg(long)]
    pub no_back: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Output unit (mm or in); defaults to the configured unit
    #[arg(long)]
    pub unit: Option<MeasurementSystem>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn request(&self) -> CabinetRequest {
        CabinetRequest {
            cabinet_type: self.cabinet_type,
            width: self.width,
            height: self.height,
            depth: self.depth,
            style: self.style,
            door_style: self.door_style,
            material: self.material.clone(),
            door_count: self.doors,
            shelf_count: self.shelves,
            include_back: self.no_back.then_some(false),
        }
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<String> {
        let generator =
            CabinetGenerator::new(UuidIdSource).with_defaults(config.generation.to_defaults());
        let cabinet = generator.generate(&self.request())?;
        let items = build_cut_list(&cabinet)?;
        let unit = self.unit.unwrap_or(config.export.unit);

        let rendered = match self.format {
            OutputFormat::Table => render_table(&cabinet, &items, config, unit),
            OutputFormat::Csv => export_csv(
                &convert_items(&items, MeasurementSystem::Imperial, unit),
                unit,
            )?,
            OutputFormat::Json => {
                let mut json =
                    CutListReport::new(&cabinet, &items, unit, chrono::Utc::now()).to_json()?;
                json.push('\n');
                json
            }
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)?;
                tracing::info!(
                    path = %path.display(),
                    parts = total_part_count(&items),
                    "Wrote cut list"
                );
                Ok(String::new())
            }
            None => Ok(rendered),
        }
    }
}

fn render_table(
    cabinet: &Cabinet,
    items: &[CutListItem],
    config: &Config,
    unit: MeasurementSystem,
) -> String {
    let fmt = LengthFormat {
        unit,
        precision: config.export.precision as usize,
        fractions: config
            .export
            .fractions
            .then_some(config.display.fraction_denominator),
    };

    let d = &cabinet.dimensions;
    let mut out = format!(
        "{} cabinet {} x {} x {} ({}, {} doors, {} shelves)\n\n",
        cabinet.cabinet_type,
        fmt.inches(d.width),
        fmt.inches(d.height),
        fmt.inches(d.depth),
        cabinet.style,
        cabinet.door_count,
        cabinet.shelf_count,
    );

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.name.clone(),
                fmt.inches(item.width),
                fmt.inches(item.height),
                fmt.inches(item.thickness),
                item.quantity.to_string(),
                item.material.clone(),
                item.edge_banding
                    .edges()
                    .iter()
                    .map(|e| e.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            ]
        })
        .collect();
    out.push_str(&table(
        &["Part", "Width", "Height", "Thickness", "Qty", "Material", "Banding"],
        &rows,
    ));

    let summary = CutListSummary::from_items(items);
    out.push_str(&format!(
        "\n{} parts, {:.2} sq ft, {} of edge banding",
        summary.part_count,
        summary.total_area / 144.0,
        fmt.inches(summary.edge_banding_length),
    ));
    if let Ok(sheets) =
        estimate_sheet_count(items, &NestingSheet::from(SheetSize::FOUR_BY_EIGHT))
    {
        out.push_str(&format!(", at least {} 4x8 sheet(s)", sheets));
    }
    out.push('\n');
    out
}
