//! LED Mapper - spreadsheet LED layouts to HyperHDR configuration
//!
//! Reads a grid of LED indices and boundary markers and writes the
//! normalized screen region each LED should sample.

use clap::{Parser, Subcommand};
use ledmapper::cli::{CliResult, ConfigArgs, ConvertArgs, InspectArgs};
use ledmapper::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// LED Mapper - convert LED grid layouts into HyperHDR sampling regions
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a layout file into LED sampling coordinates
    Convert(ConvertArgs),
    /// Summarize a layout file
    Inspect(InspectArgs),
    /// Manage default settings
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Convert(args) => args.execute(),
            Self::Inspect(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
