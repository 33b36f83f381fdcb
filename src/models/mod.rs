//! Data models for LED layouts and their sampling regions.
//!
//! Models are plain data, independent of parsing, mapping, and output.

pub mod boundary;
pub mod grid;
pub mod led_mapping;
pub mod params;

// Re-export all model types
pub use boundary::BoundaryRectangle;
pub use grid::{Cell, CellValue, GridModel, LedIndex};
pub use led_mapping::{LedMapping, ScanRange};
pub use params::{MappingMode, MappingParams};
