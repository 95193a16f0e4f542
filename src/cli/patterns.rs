//! `cabinetkit pattern` and `cabinetkit patterns`

use super::format::table;
use cabinetkit_camtools::{
    get_pattern, list_by_category, list_patterns, search_by_tag, DrillPattern, HoleCount,
    PatternCategory,
};
use clap::Args;

/// Show one drill pattern
#[derive(Debug, Clone, Args)]
pub struct PatternArgs {
    /// Pattern id, e.g. shelf-pins-32mm
    pub id: String,

    /// Panel width in mm; with --height, lists the hole positions
    #[arg(long, requires = "height")]
    pub width: Option<f64>,

    /// Panel height in mm
    #[arg(long, requires = "width")]
    pub height: Option<f64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl PatternArgs {
    pub fn execute(&self) -> anyhow::Result<String> {
        let pattern = get_pattern(&self.id)?;
        let holes = match (self.width, self.height) {
            (Some(w), Some(h)) => Some(pattern.hole_positions(w, h)?),
            _ => None,
        };

        if self.json {
            let mut value = serde_json::to_value(pattern)?;
            if let Some(holes) = &holes {
                value["holes"] = serde_json::to_value(holes)?;
            }
            return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
        }

        let mut out = describe(pattern);
        if let Some(holes) = holes {
            let rows: Vec<Vec<String>> = holes
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    vec![
                        (i + 1).to_string(),
                        format!("{:.1}", h.x),
                        format!("{:.1}", h.y),
                        format!("{:.1}", h.depth),
                    ]
                })
                .collect();
            out.push('\n');
            out.push_str(&table(&["#", "X (mm)", "Y (mm)", "Depth (mm)"], &rows));
        }
        Ok(out)
    }
}

fn describe(p: &DrillPattern) -> String {
    let s = &p.drill_settings;
    let l = &p.layout;
    let count = match l.count {
        HoleCount::Fill => format!("fill at {}mm pitch", l.pitch),
        HoleCount::Fixed(n) => format!("{} at {}mm pitch, centred", n, l.pitch),
        HoleCount::Spread(n) => format!("{} spread between {}mm end offsets", n, l.end_offset),
    };

    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", p.name, p.id));
    out.push_str(&format!("  {}\n", p.description));
    out.push_str(&format!("  Category:   {}\n", p.category));
    out.push_str(&format!("  Type:       {}\n", p.pattern_type.name()));
    out.push_str(&format!("  Tool:       {} {}mm\n", s.tool_type, s.tool_diameter));
    out.push_str(&format!(
        "  Spindle:    {} rpm, feed {} mm/min\n",
        s.spindle_speed, s.feed_rate
    ));
    out.push_str(&format!("  Holes:      {} x {} row(s)\n", count, l.rows));
    out.push_str(&format!("  Depth:      {}mm\n", l.depth));
    out.push_str(&format!(
        "  Difficulty: {:?}, about {} min/panel\n",
        p.difficulty, p.estimated_time
    ));
    out.push_str(&format!("  Tags:       {}\n", p.tags.join(", ")));
    out
}

/// List drill patterns
#[derive(Debug, Clone, Args)]
pub struct PatternsArgs {
    /// Only show one category (shelf-holes, hinge-boring, handle-mounts, joinery, hardware)
    #[arg(long)]
    pub category: Option<PatternCategory>,

    /// Only show patterns with this tag
    #[arg(long, conflicts_with = "category")]
    pub tag: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl PatternsArgs {
    pub fn execute(&self) -> anyhow::Result<String> {
        let patterns = match (&self.category, &self.tag) {
            (Some(category), _) => list_by_category(*category),
            (None, Some(tag)) => search_by_tag(tag),
            (None, None) => list_patterns(),
        };

        if self.json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(&patterns)?));
        }

        if patterns.is_empty() {
            return Ok("No matching drill patterns.\n".to_string());
        }

        let rows: Vec<Vec<String>> = patterns
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    p.name.clone(),
                    p.category.to_string(),
                    format!("{}mm", p.drill_settings.tool_diameter),
                ]
            })
            .collect();
        Ok(table(&["Id", "Name", "Category", "Tool"], &rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_pattern() {
        let args = PatternArgs {
            id: "shelf-pins-32mm".to_string(),
            width: None,
            height: None,
            json: false,
        };
        let out = args.execute().unwrap();
        assert!(out.starts_with("32mm System Shelf Pins (shelf-pins-32mm)"));
        assert!(out.contains("Category:   shelf-holes"));
        assert!(out.contains("Brad Point 5mm"));
    }

    #[test]
    fn test_show_pattern_holes_json() {
        let args = PatternArgs {
            id: "handle-mount-96mm".to_string(),
            width: Some(400.0),
            height: Some(700.0),
            json: true,
        };
        let value: serde_json::Value = serde_json::from_str(&args.execute().unwrap()).unwrap();
        assert_eq!(value["holes"].as_array().unwrap().len(), 2);
        assert_eq!(value["holes"][0]["x"], 152.0);
    }

    #[test]
    fn test_unknown_pattern() {
        let args = PatternArgs {
            id: "router-bits".to_string(),
            width: None,
            height: None,
            json: false,
        };
        let err = args.execute().unwrap_err();
        assert_eq!(err.to_string(), "drill pattern not found: router-bits");
    }

    #[test]
    fn test_list_by_category() {
        let args = PatternsArgs {
            category: Some(PatternCategory::Joinery),
            tag: None,
            json: false,
        };
        let out = args.execute().unwrap();
        assert!(out.contains("cam-lock-15mm"));
        assert!(out.contains("dowel-8mm"));
        assert!(!out.contains("hinge-cup-35mm"));
    }

    #[test]
    fn test_list_by_missing_tag() {
        let args = PatternsArgs {
            category: None,
            tag: Some("laser".to_string()),
            json: false,
        };
        assert_eq!(args.execute().unwrap(), "No matching drill patterns.\n");
    }
}
