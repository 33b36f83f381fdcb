//! Service layer for the mapping engine.
//!
//! This module derives the monitor rectangle, maps LEDs to sampling regions,
//! and runs the full conversion and inspection pipelines.

pub mod boundary;
pub mod conversion;
pub mod inspect;
pub mod mapper;

// Re-export commonly used types and functions
pub use conversion::{convert, Conversion};
pub use inspect::{inspect, LayoutReport};
pub use mapper::Edge;
