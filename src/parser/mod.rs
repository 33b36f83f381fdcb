//! Parsing of layout files.
//!
//! This module turns delimited text exported from a spreadsheet into the
//! sparse grid model consumed by the mapping engine.

pub mod grid_text;

// Re-export commonly used functions
pub use grid_text::{load_grid, parse_grid, parse_rows, GridFormat};
