//! Coordinate mapping engine.
//!
//! Turns each LED's grid cell into a normalized sampling region of the screen.
//! Positions are first normalized against the boundary rectangle:
//!
//! ```text
//! nx = (col - min_col) / max(1, width - 1)    0.0 = left edge, 1.0 = right edge
//! ny = (row - min_row) / max(1, height - 1)   0.0 = top edge,  1.0 = bottom edge
//! ```
//!
//! LEDs outside the rectangle get values outside [0, 1]; nothing is clamped
//! here. Each LED is mapped independently, so the batch is computed in
//! parallel and collected back in ascending LED order.

use crate::models::{
    BoundaryRectangle, Cell, GridModel, LedIndex, LedMapping, MappingMode, MappingParams,
    ScanRange,
};
use rayon::prelude::*;
use serde::Serialize;

/// Screen edge an LED is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Top edge (ny = 0)
    Top,
    /// Bottom edge (ny = 1)
    Bottom,
    /// Left edge (nx = 0)
    Left,
    /// Right edge (nx = 1)
    Right,
}

impl Edge {
    /// Tie-break order: the first edge at minimal distance wins.
    pub const PRECEDENCE: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Lowercase edge name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Signed distance from a normalized point to this edge.
    ///
    /// Negative when the point lies beyond the edge, outside the rectangle.
    #[must_use]
    pub fn distance(&self, nx: f64, ny: f64) -> f64 {
        match self {
            Self::Top => ny,
            Self::Bottom => 1.0 - ny,
            Self::Left => nx,
            Self::Right => 1.0 - nx,
        }
    }

    /// The point on this edge closest to `(nx, ny)`, keeping the position
    /// along the edge.
    #[must_use]
    pub const fn anchor(&self, nx: f64, ny: f64) -> (f64, f64) {
        match self {
            Self::Top => (nx, 0.0),
            Self::Bottom => (nx, 1.0),
            Self::Left => (0.0, ny),
            Self::Right => (1.0, ny),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a cell against the boundary rectangle.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn normalize(cell: Cell, boundary: &BoundaryRectangle) -> (f64, f64) {
    let x_span = boundary.width().saturating_sub(1).max(1) as f64;
    let y_span = boundary.height().saturating_sub(1).max(1) as f64;

    // Offsets of cells outside the rectangle can exceed i64
    let nx = (i128::from(cell.col) - i128::from(boundary.min_col())) as f64 / x_span;
    let ny = (i128::from(cell.row) - i128::from(boundary.min_row())) as f64 / y_span;

    (nx, ny)
}

/// Nearest edge to a normalized point and its signed distance.
///
/// Ties resolve by [`Edge::PRECEDENCE`].
#[must_use]
pub fn nearest_edge(nx: f64, ny: f64) -> (Edge, f64) {
    let mut best = (Edge::Top, Edge::Top.distance(nx, ny));

    for edge in &Edge::PRECEDENCE[1..] {
        let distance = edge.distance(nx, ny);
        // Strict comparison keeps the earlier edge on ties
        if distance < best.1 {
            best = (*edge, distance);
        }
    }

    best
}

/// Maps every LED in the grid, ascending by LED index.
pub fn map(grid: &GridModel, boundary: &BoundaryRectangle, params: &MappingParams) -> Vec<LedMapping> {
    let leds: Vec<(LedIndex, Cell)> = grid.leds().collect();

    leds.par_iter()
        .map(|&(index, cell)| map_led(index, cell, boundary, params))
        .collect()
}

/// Maps a single LED.
#[must_use]
pub fn map_led(
    led_index: LedIndex,
    cell: Cell,
    boundary: &BoundaryRectangle,
    params: &MappingParams,
) -> LedMapping {
    let (nx, ny) = normalize(cell, boundary);

    let (hscan, vscan) = match params.mode {
        MappingMode::Wall => wall(nx, ny),
        MappingMode::Perimeter => perimeter(nx, ny, params.depth),
        MappingMode::Ambient => ambient(nx, ny, params.edge_bias),
    };

    LedMapping {
        led_index,
        group: params.group,
        hscan,
        vscan,
    }
}

fn wall(nx: f64, ny: f64) -> (ScanRange, ScanRange) {
    (ScanRange::point(nx), ScanRange::point(ny))
}

fn perimeter(nx: f64, ny: f64, depth: f64) -> (ScanRange, ScanRange) {
    let depth = depth.clamp(0.0, 1.0);
    let (edge, _) = nearest_edge(nx, ny);

    match edge {
        Edge::Top => (ScanRange::point(nx), ScanRange::new(0.0, depth)),
        Edge::Bottom => (ScanRange::point(nx), ScanRange::new(1.0 - depth, 1.0)),
        Edge::Left => (ScanRange::new(0.0, depth), ScanRange::point(ny)),
        Edge::Right => (ScanRange::new(1.0 - depth, 1.0), ScanRange::point(ny)),
    }
}

/// Blend weight toward the edge anchor for an ambient LED.
///
/// `edge_bias * proximity`, where proximity is 1 at (or beyond) an edge and
/// falls to 0 at distance 1.
#[must_use]
pub fn ambient_weight(nx: f64, ny: f64, edge_bias: f64) -> f64 {
    let (_, distance) = nearest_edge(nx, ny);
    let proximity = 1.0 - distance.clamp(0.0, 1.0);
    (edge_bias * proximity).clamp(0.0, 1.0)
}

fn ambient(nx: f64, ny: f64, edge_bias: f64) -> (ScanRange, ScanRange) {
    let (edge, _) = nearest_edge(nx, ny);
    let weight = ambient_weight(nx, ny, edge_bias);
    let (ex, ey) = edge.anchor(nx, ny);

    // Written as a two-sided blend so weight 0 and 1 reproduce the
    // endpoints bit-for-bit
    let fx = weight * ex + (1.0 - weight) * nx;
    let fy = weight * ey + (1.0 - weight) * ny;

    (ScanRange::point(fx), ScanRange::point(fy))
}
