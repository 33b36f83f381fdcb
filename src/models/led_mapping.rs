//! Per-LED sampling regions.

use crate::models::grid::LedIndex;
use serde::{Deserialize, Serialize};

/// Closed interval of normalized screen coordinates.
///
/// A point sample has `minimum == maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanRange {
    /// Lower bound
    pub minimum: f64,
    /// Upper bound
    pub maximum: f64,
}

impl ScanRange {
    /// Creates a range from two bounds, ordering them if necessary.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            minimum: a.min(b),
            maximum: a.max(b),
        }
    }

    /// Creates a degenerate range at a single coordinate.
    #[must_use]
    pub const fn point(value: f64) -> Self {
        Self {
            minimum: value,
            maximum: value,
        }
    }

    /// Whether the range is a single point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.minimum == self.maximum
    }

    /// Whether both bounds lie in [0, 1].
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.minimum) && (0.0..=1.0).contains(&self.maximum)
    }
}

/// Sampling region computed for one LED.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedMapping {
    /// LED index from the layout
    pub led_index: LedIndex,
    /// Output group, constant across one conversion
    pub group: i32,
    /// Horizontal scan range
    pub hscan: ScanRange,
    /// Vertical scan range
    pub vscan: ScanRange,
}
