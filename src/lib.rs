//! LED Mapper Library
//!
//! Converts spreadsheet-style LED strip layouts into normalized screen
//! sampling regions for HyperHDR, using one of three mapping strategies
//! (perimeter, wall, ambient).

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use error::{MappingError, MappingErrorKind, MappingWarning, MappingWarningKind};
pub use models::{GridModel, LedMapping, MappingMode, MappingParams, ScanRange};
pub use services::{convert, Conversion};
