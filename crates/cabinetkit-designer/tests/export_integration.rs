// Cut-list export integration tests
// CSV output for both unit systems and the JSON report.

use cabinetkit_core::MeasurementSystem;
use cabinetkit_designer::cut_list::convert_items;
use cabinetkit_designer::{
    build_cut_list, export_csv, write_csv, CabinetGenerator, CutListReport, SequentialIdSource,
};
use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::TempDir;

fn base_24() -> cabinetkit_designer::Cabinet {
    CabinetGenerator::new(SequentialIdSource::new("cab"))
        .generate_base(24.0)
        .unwrap()
}

#[test]
fn test_csv_imperial_rows() {
    let cab = base_24();
    let items = build_cut_list(&cab).unwrap();
    let csv = export_csv(&items, MeasurementSystem::Imperial).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), items.len() + 1);
    assert_eq!(lines[1], "Side Panel,34.5in,24in,0.75in,2,plywood,top");
    assert_eq!(lines[2], "Top Panel,22.5in,24in,0.75in,1,plywood,top");
    assert!(lines.iter().any(|l| l.starts_with("Back Panel,22.5in,33in,0.375in,1,plywood,")));
}

#[test]
fn test_csv_metric_rows() {
    let cab = base_24();
    let items = convert_items(
        &build_cut_list(&cab).unwrap(),
        MeasurementSystem::Imperial,
        MeasurementSystem::Metric,
    );
    let csv = export_csv(&items, MeasurementSystem::Metric).unwrap();
    let side = csv.lines().nth(1).unwrap();
    assert_eq!(side, "Side Panel,876.3mm,609.6mm,19.05mm,2,plywood,top");
}

#[test]
fn test_write_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("base-24.csv");

    let items = build_cut_list(&base_24()).unwrap();
    let file = fs::File::create(&path).unwrap();
    write_csv(&items, MeasurementSystem::Imperial, file).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Part Name,Width,Height,Thickness,Qty,Material,Edge Banding\n"));
    assert_eq!(contents, export_csv(&items, MeasurementSystem::Imperial).unwrap());
}

#[test]
fn test_json_report() {
    let cab = base_24();
    let items = build_cut_list(&cab).unwrap();
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let report = CutListReport::new(&cab, &items, MeasurementSystem::Metric, at);
    assert_eq!(report.summary.part_count, cab.expected_part_count());
    assert!((report.items[0].width - 876.3).abs() < 1e-9);

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["generated_at"], "2024-03-01T12:00:00Z");
    assert_eq!(value["cabinet"]["id"], "cab-1");

    let back: CutListReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
