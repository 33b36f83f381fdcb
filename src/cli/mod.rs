//! CLI command handlers for LED Mapper.
//!
//! Each subcommand is an `Args` struct with an `execute` method returning
//! [`CliResult`], so `main.rs` only has to map errors to exit codes.

pub mod common;
pub mod config;
pub mod convert;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use inspect::InspectArgs;
