//! `cabinetkit templates`

use super::format::table;
use cabinetkit_core::CabinetType;
use cabinetkit_designer::list_templates;
use clap::Args;

/// List catalog templates
#[derive(Debug, Clone, Args)]
pub struct TemplatesArgs {
    /// Only show one cabinet type (base, wall, tall)
    #[arg(long = "type", value_name = "TYPE")]
    pub cabinet_type: Option<CabinetType>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl TemplatesArgs {
    pub fn execute(&self) -> anyhow::Result<String> {
        let templates = list_templates(self.cabinet_type);

        if self.json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(&templates)?));
        }

        let rows: Vec<Vec<String>> = templates
            .iter()
            .map(|t| {
                let d = &t.dimensions;
                vec![
                    t.id.clone(),
                    t.name.clone(),
                    format!("{} x {} x {}", d.width, d.height, d.depth),
                    t.door_count.to_string(),
                    t.shelf_count.to_string(),
                ]
            })
            .collect();

        let mut out = table(&["Id", "Name", "W x H x D (in)", "Doors", "Shelves"], &rows);
        out.push_str(&format!("\n{} templates\n", templates.len()));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_type() {
        let args = TemplatesArgs {
            cabinet_type: Some(CabinetType::Tall),
            json: false,
        };
        let out = args.execute().unwrap();
        assert!(out.contains("tall-18x84"));
        assert!(!out.contains("base-9"));
        assert!(out.ends_with("8 templates\n"));
    }

    #[test]
    fn test_json_output() {
        let args = TemplatesArgs {
            cabinet_type: Some(CabinetType::Base),
            json: true,
        };
        let value: serde_json::Value = serde_json::from_str(&args.execute().unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 10);
        assert_eq!(value[0]["id"], "base-9");
    }
}
