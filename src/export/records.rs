//! Output records assembled from engine mappings.

use crate::models::{LedIndex, LedMapping, ScanRange};
use crate::services::Conversion;
use serde::{Deserialize, Serialize};

/// How engine mappings are turned into records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecordOptions {
    /// Width given to point samples, centred on the point (0 keeps points)
    pub sample_size: f64,
    /// Clamp every bound into [0, 1]
    pub clamp: bool,
}

/// Per-LED output record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedRecord {
    /// LED index
    pub index: LedIndex,
    /// Output group
    pub group: i32,
    /// Horizontal scan range
    pub hscan: ScanRange,
    /// Vertical scan range
    pub vscan: ScanRange,
}

/// Assembles [`LedRecord`]s from [`LedMapping`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedRecordBuilder {
    options: RecordOptions,
}

impl LedRecordBuilder {
    /// Creates a builder with explicit options.
    #[must_use]
    pub const fn new(options: RecordOptions) -> Self {
        Self { options }
    }

    /// Creates a builder matching a conversion: coordinates are clamped when
    /// the conversion was boundary-aware.
    #[must_use]
    pub fn for_conversion(conversion: &Conversion, sample_size: f64) -> Self {
        Self::new(RecordOptions {
            sample_size: sample_size.max(0.0),
            clamp: conversion.is_boundary_aware(),
        })
    }

    /// Builds the record for one mapping.
    #[must_use]
    pub fn build(&self, mapping: &LedMapping) -> LedRecord {
        LedRecord {
            index: mapping.led_index,
            group: mapping.group,
            hscan: self.finish(mapping.hscan),
            vscan: self.finish(mapping.vscan),
        }
    }

    /// Builds records for a batch, preserving order.
    #[must_use]
    pub fn build_all(&self, mappings: &[LedMapping]) -> Vec<LedRecord> {
        mappings.iter().map(|mapping| self.build(mapping)).collect()
    }

    fn finish(&self, range: ScanRange) -> ScanRange {
        let range = if range.is_point() && self.options.sample_size > 0.0 {
            let half = self.options.sample_size / 2.0;
            ScanRange::new(range.minimum - half, range.maximum + half)
        } else {
            range
        };

        if self.options.clamp {
            ScanRange::new(range.minimum.clamp(0.0, 1.0), range.maximum.clamp(0.0, 1.0))
        } else {
            range
        }
    }
}
