//! Convert command: layout file to HyperHDR LED configuration.

use crate::cli::common::{parse_delimiter, CliError, CliResult};
use crate::config::Config;
use crate::export::{to_json, write_json, LedRecord, LedRecordBuilder, OutputFormat};
use crate::models::{MappingMode, MappingParams};
use crate::parser::{load_grid, GridFormat};
use crate::services::{convert, Conversion};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Convert a spreadsheet LED layout into HyperHDR sampling coordinates
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Layout file (CSV exported from a spreadsheet)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output JSON file (prints to stdout when omitted)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Mapping mode: perimeter, wall, or ambient
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<MappingMode>,

    /// Use boundary markers to define the monitor area (`--boundary-aware=false` overrides the config)
    #[arg(
        short,
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub boundary_aware: Option<bool>,

    /// LED group written on every record
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub group: Option<i32>,

    /// Perimeter band depth (0.0-1.0)
    #[arg(long, value_name = "DEPTH", allow_negative_numbers = true)]
    pub depth: Option<f64>,

    /// Ambient edge bias (0.0-1.0)
    #[arg(long, value_name = "BIAS", allow_negative_numbers = true)]
    pub edge_bias: Option<f64>,

    /// Widen point samples to this size (0.0-1.0)
    #[arg(long, value_name = "SIZE")]
    pub sample_size: Option<f64>,

    /// Output format: hyperhdr or records
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Field delimiter (a single character, or 'tab')
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Token marking monitor-area cells
    #[arg(long, value_name = "TOKEN")]
    pub boundary_token: Option<String>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let format = self.grid_format(&config)?;
        let params = self.mapping_params(&config);
        let output_format = self.format.unwrap_or(config.output.format);
        let pretty = self.pretty || config.output.pretty;

        let sample_size = self.sample_size.unwrap_or(config.output.sample_size);
        if !(0.0..=1.0).contains(&sample_size) {
            return Err(CliError::validation(format!(
                "--sample-size must be between 0.0 and 1.0, got {sample_size}"
            )));
        }

        let grid = load_grid(&self.input, &format)
            .map_err(|e| CliError::from_load_error("Failed to load layout", &e))?;
        debug!(
            "Loaded {} LEDs and {} boundary markers from {}",
            grid.led_count(),
            grid.boundary_count(),
            self.input.display()
        );

        let conversion = convert(&grid, &params)?;
        let records =
            LedRecordBuilder::for_conversion(&conversion, sample_size).build_all(&conversion.mappings);

        let json = to_json(&records, output_format, pretty)
            .map_err(|e| CliError::io(format!("Failed to serialize output: {e:#}")))?;

        match &self.output {
            None => println!("{json}"),
            Some(path) => {
                write_json(path, &json).map_err(|e| CliError::io(format!("{e:#}")))?;
                print_summary(&conversion, &records, output_format, path);
            }
        }

        Ok(())
    }

    /// Input format: flags first, then the config file.
    fn grid_format(&self, config: &Config) -> CliResult<GridFormat> {
        let mut format = config.input.clone();

        if let Some(delimiter) = &self.delimiter {
            format.delimiter = parse_delimiter(delimiter)?;
        }
        if let Some(token) = &self.boundary_token {
            format.boundary_token.clone_from(token);
        }

        if format.boundary_token.trim().is_empty() {
            return Err(CliError::validation("--boundary-token cannot be empty"));
        }
        if format.boundary_token.contains(format.delimiter) {
            return Err(CliError::validation(format!(
                "Boundary token '{}' contains the delimiter '{}'",
                format.boundary_token, format.delimiter
            )));
        }

        Ok(format)
    }

    /// Mapping parameters: flags first, then the config file.
    ///
    /// Range problems are left to the engine, which clamps and warns.
    fn mapping_params(&self, config: &Config) -> MappingParams {
        let defaults = config.mapping;

        MappingParams {
            mode: self.mode.unwrap_or(defaults.mode),
            boundary_aware: self.boundary_aware.unwrap_or(defaults.boundary_aware),
            edge_bias: self.edge_bias.unwrap_or(defaults.edge_bias),
            depth: self.depth.unwrap_or(defaults.depth),
            group: self.group.unwrap_or(defaults.group),
        }
    }
}

fn print_summary(
    conversion: &Conversion,
    records: &[LedRecord],
    format: OutputFormat,
    path: &std::path::Path,
) {
    let boundary = &conversion.boundary;
    if conversion.is_boundary_aware() {
        println!("Monitor area: {boundary}");
    } else {
        println!("Screen area (LED bounds): {boundary}");
    }
    println!("Mode: {}", conversion.params.mode);
    println!(
        "✓ Converted {} LEDs to {} ({format})",
        records.len(),
        path.display()
    );

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        println!("First LED: {}", describe(first, format));
        println!("Last LED:  {}", describe(last, format));
    }

    if !conversion.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &conversion.warnings {
            println!("  ⚠ {warning}");
        }
    }
}

fn describe(record: &LedRecord, format: OutputFormat) -> String {
    to_json(std::slice::from_ref(record), format, false)
        .map(|json| {
            json.trim_start_matches('[')
                .trim_end_matches(']')
                .to_string()
        })
        .unwrap_or_else(|_| format!("LED {}", record.index))
}
