//! Inspect command: summarize a layout file without converting it.

use crate::cli::common::{parse_delimiter, CliError, CliResult};
use crate::config::Config;
use crate::parser::load_grid;
use crate::services::{inspect, LayoutReport};
use clap::Args;
use std::path::PathBuf;

/// Inspect a layout file: LED count, gaps, monitor area, edge distribution
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Layout file (CSV exported from a spreadsheet)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Measure edges against the boundary markers (`--boundary-aware=false` overrides the config)
    #[arg(
        short,
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub boundary_aware: Option<bool>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Field delimiter (a single character, or 'tab')
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Token marking monitor-area cells
    #[arg(long, value_name = "TOKEN")]
    pub boundary_token: Option<String>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let mut format = config.input.clone();
        if let Some(delimiter) = &self.delimiter {
            format.delimiter = parse_delimiter(delimiter)?;
        }
        if let Some(token) = &self.boundary_token {
            format.boundary_token.clone_from(token);
        }

        let grid = load_grid(&self.input, &format)
            .map_err(|e| CliError::from_load_error("Failed to load layout", &e))?;
        let boundary_aware = self.boundary_aware.unwrap_or(config.mapping.boundary_aware);
        let report = inspect(&grid, boundary_aware)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::io(format!("Failed to serialize report to JSON: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", render_report(&report));
        }

        Ok(())
    }
}

fn render_report(report: &LayoutReport) -> String {
    let mut out = String::new();
    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };

    line(format!(
        "LEDs: {} (indices {}-{})",
        report.led_count, report.first_index, report.last_index
    ));
    if report.missing_indices.is_empty() {
        line("Missing indices: none".to_string());
    } else {
        line(format!("Missing indices: {}", join(&report.missing_indices)));
    }
    line(format!("Boundary markers: {}", report.boundary_count));
    line(format!("LED bounds: {}", report.led_bounds));
    match &report.monitor_area {
        Some(area) => line(format!("Monitor area: {area}")),
        None => line("Monitor area: (no markers)".to_string()),
    }

    let edges = &report.edges;
    line(format!(
        "Nearest edge ({}): top {}, bottom {}, left {}, right {}",
        if report.boundary_aware {
            "monitor area"
        } else {
            "LED bounds"
        },
        edges.top,
        edges.bottom,
        edges.left,
        edges.right
    ));

    if !report.interior_leds.is_empty() {
        line(format!(
            "⚠ LEDs inside the monitor area: {}",
            join(&report.interior_leds)
        ));
    }

    out
}

fn join(indices: &[u32]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
