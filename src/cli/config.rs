//! Configuration management CLI commands.

use crate::cli::common::{parse_delimiter, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::OutputFormat;
use crate::models::MappingMode;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Default mapping mode (perimeter, wall, or ambient)
    #[arg(long, value_name = "MODE")]
    mode: Option<MappingMode>,

    /// Use boundary markers by default
    #[arg(long, value_name = "BOOL")]
    boundary_aware: Option<bool>,

    /// Default LED group
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    group: Option<i32>,

    /// Default perimeter depth (0.0-1.0)
    #[arg(long, value_name = "DEPTH", allow_negative_numbers = true)]
    depth: Option<f64>,

    /// Default ambient edge bias (0.0-1.0)
    #[arg(long, value_name = "BIAS", allow_negative_numbers = true)]
    edge_bias: Option<f64>,

    /// Field delimiter (a single character, or 'tab')
    #[arg(long, value_name = "CHAR")]
    delimiter: Option<String>,

    /// Boundary marker token
    #[arg(long, value_name = "TOKEN")]
    boundary_token: Option<String>,

    /// Default output format (hyperhdr or records)
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Pretty-print output by default
    #[arg(long, value_name = "BOOL")]
    pretty: Option<bool>,

    /// Default point sample size (0.0-1.0)
    #[arg(long, value_name = "SIZE")]
    sample_size: Option<f64>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.boundary_aware.is_none()
            && self.group.is_none()
            && self.depth.is_none()
            && self.edge_bias.is_none()
            && self.delimiter.is_none()
            && self.boundary_token.is_none()
            && self.format.is_none()
            && self.pretty.is_none()
            && self.sample_size.is_none()
    }

    /// Applies the given values onto `config` and validates the result.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(mode) = self.mode {
            config.mapping.mode = mode;
        }
        if let Some(boundary_aware) = self.boundary_aware {
            config.mapping.boundary_aware = boundary_aware;
        }
        if let Some(group) = self.group {
            config.mapping.group = group;
        }
        if let Some(depth) = self.depth {
            config.mapping.depth = depth;
        }
        if let Some(edge_bias) = self.edge_bias {
            config.mapping.edge_bias = edge_bias;
        }
        if let Some(delimiter) = &self.delimiter {
            config.input.delimiter = parse_delimiter(delimiter)?;
        }
        if let Some(token) = &self.boundary_token {
            config.input.boundary_token = token.trim().to_string();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(pretty) = self.pretty {
            config.output.pretty = pretty;
        }
        if let Some(sample_size) = self.sample_size {
            config.output.sample_size = sample_size;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified (see 'config set --help')",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("========================");
    println!();

    println!("Mapping:");
    println!("  Mode: {}", config.mapping.mode);
    println!("  Boundary Aware: {}", config.mapping.boundary_aware);
    println!("  Group: {}", config.mapping.group);
    println!("  Depth: {}", config.mapping.depth);
    println!("  Edge Bias: {}", config.mapping.edge_bias);
    println!();

    println!("Input:");
    let delimiter = match config.input.delimiter {
        '\t' => "tab".to_string(),
        c => c.to_string(),
    };
    println!("  Delimiter: {delimiter}");
    println!("  Boundary Token: {}", config.input.boundary_token);
    println!();

    println!("Output:");
    println!("  Format: {}", config.output.format);
    println!("  Pretty: {}", config.output.pretty);
    println!("  Sample Size: {}", config.output.sample_size);
    println!();
}
