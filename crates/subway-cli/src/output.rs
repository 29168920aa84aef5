//! Output formatting for path plans and line listings.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use subway_lib::{Line, PathPlan, Station};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Serialize)]
struct LineSummary<'a> {
    id: i64,
    name: &'a str,
    color: &'a str,
    stations: Vec<Station>,
    sections: Vec<SectionSummary<'a>>,
    distance: u64,
}

#[derive(Debug, Serialize)]
struct SectionSummary<'a> {
    up: &'a str,
    down: &'a str,
    distance: u32,
}

/// Render a path plan.
pub fn render_path(plan: &PathPlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(plan).context("failed to encode path as JSON")
        }
        OutputFormat::Text => {
            let mut out = format!("Path: {} -> {}\n", plan.source, plan.target);
            out.push_str(&format!("distance: {}\n", plan.distance));
            out.push_str(&format!("hops: {}\n", plan.hop_count()));
            for station in &plan.stations {
                out.push_str(&format!("- {} ({})\n", station.name, station.id));
            }
            Ok(out)
        }
    }
}

/// Render a line with its stations and sections in travel order.
pub fn render_line(line: &Line, format: OutputFormat) -> Result<String> {
    let sections = line.sections();
    match format {
        OutputFormat::Json => {
            let summary = LineSummary {
                id: line.id,
                name: &line.name,
                color: &line.color,
                stations: line.stations(),
                sections: sections
                    .iter()
                    .map(|section| SectionSummary {
                        up: &section.up_station().name,
                        down: &section.down_station().name,
                        distance: section.distance().value(),
                    })
                    .collect(),
                distance: sections.total_distance(),
            };
            serde_json::to_string_pretty(&summary).context("failed to encode line as JSON")
        }
        OutputFormat::Text => {
            let names: Vec<_> = line
                .stations()
                .into_iter()
                .map(|station| station.name)
                .collect();
            let mut out = format!("Line {} ({})\n", line.name, line.color);
            out.push_str(&format!("stations: {}\n", names.join(" -> ")));
            out.push_str("sections:\n");
            for section in sections {
                out.push_str(&format!("- {section}\n"));
            }
            out.push_str(&format!("total distance: {}\n", sections.total_distance()));
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subway_lib::Distance;

    fn line() -> Line {
        let mut line = Line::with_section(
            1,
            "3호선",
            "orange",
            Station::new(1, "교대역"),
            Station::new(4, "남부터미널역"),
            Distance::new(1).unwrap(),
        )
        .unwrap();
        line.add_section(
            Station::new(4, "남부터미널역"),
            Station::new(3, "양재역"),
            Distance::new(3).unwrap(),
        )
        .unwrap();
        line
    }

    #[test]
    fn text_line_lists_travel_order() {
        let text = render_line(&line(), OutputFormat::Text).unwrap();

        assert!(text.starts_with("Line 3호선 (orange)\n"));
        assert!(text.contains("stations: 교대역 -> 남부터미널역 -> 양재역\n"));
        assert!(text.contains("- 교대역 -> 남부터미널역 (1)\n"));
        assert!(text.ends_with("total distance: 4\n"));
    }

    #[test]
    fn json_line_carries_sections() {
        let json = render_line(&line(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["distance"], 4);
        assert_eq!(value["sections"][1]["up"], "남부터미널역");
        assert_eq!(value["stations"].as_array().map(Vec::len), Some(3));
    }
}
