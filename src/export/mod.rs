//! Export of mapping results.
//!
//! This module assembles per-LED records from engine mappings and serializes
//! them for HyperHDR.

pub mod hyperhdr;
pub mod records;

pub use hyperhdr::{to_json, write_json, OutputFormat};
pub use records::{LedRecord, LedRecordBuilder, RecordOptions};
