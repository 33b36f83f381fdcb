//! Layout statistics for the `inspect` command.

use crate::error::MappingError;
use crate::models::{BoundaryRectangle, GridModel, LedIndex};
use crate::services::{boundary, mapper};
use serde::Serialize;

/// How many LEDs are anchored to each edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EdgeDistribution {
    /// LEDs nearest the top edge
    pub top: usize,
    /// LEDs nearest the bottom edge
    pub bottom: usize,
    /// LEDs nearest the left edge
    pub left: usize,
    /// LEDs nearest the right edge
    pub right: usize,
}

impl EdgeDistribution {
    fn record(&mut self, edge: mapper::Edge) {
        match edge {
            mapper::Edge::Top => self.top += 1,
            mapper::Edge::Bottom => self.bottom += 1,
            mapper::Edge::Left => self.left += 1,
            mapper::Edge::Right => self.right += 1,
        }
    }
}

/// Summary of a parsed layout.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    /// Number of LED cells
    pub led_count: usize,
    /// Number of boundary marker cells
    pub boundary_count: usize,
    /// Lowest LED index
    pub first_index: LedIndex,
    /// Highest LED index
    pub last_index: LedIndex,
    /// Indices between first and last that are not placed
    pub missing_indices: Vec<LedIndex>,
    /// Bounding box of the LED cells
    pub led_bounds: BoundaryRectangle,
    /// Bounding box of the boundary markers, if any
    pub monitor_area: Option<BoundaryRectangle>,
    /// Whether edges were classified against the monitor area
    pub boundary_aware: bool,
    /// Nearest-edge counts
    pub edges: EdgeDistribution,
    /// LEDs inside the reference rectangle
    pub interior_leds: Vec<LedIndex>,
}

/// Builds a report for a grid.
///
/// # Errors
///
/// Returns `NoBoundaryMarkers` if `boundary_aware` is set and the grid has
/// no markers.
pub fn inspect(grid: &GridModel, boundary_aware: bool) -> Result<LayoutReport, MappingError> {
    let led_bounds = boundary::led_bounds(grid)?;
    let monitor_area = BoundaryRectangle::enclosing(grid.boundary_cells());
    let reference = boundary::analyze(grid, boundary_aware)?;

    let mut edges = EdgeDistribution::default();
    let mut interior_leds = Vec::new();
    for (index, cell) in grid.leds() {
        let (nx, ny) = mapper::normalize(cell, &reference);
        edges.record(mapper::nearest_edge(nx, ny).0);

        // Every LED is inside its own bounding box, so only count against markers
        if boundary_aware && reference.contains(cell) {
            interior_leds.push(index);
        }
    }

    let indices: Vec<LedIndex> = grid.leds().map(|(index, _)| index).collect();
    let first_index = indices.first().copied().unwrap_or_default();
    let last_index = indices.last().copied().unwrap_or_default();
    let missing_indices = (first_index..=last_index)
        .filter(|index| indices.binary_search(index).is_err())
        .collect();

    Ok(LayoutReport {
        led_count: grid.led_count(),
        boundary_count: grid.boundary_count(),
        first_index,
        last_index,
        missing_indices,
        led_bounds,
        monitor_area,
        boundary_aware,
        edges,
        interior_leds,
    })
}
