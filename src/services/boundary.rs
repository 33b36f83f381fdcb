//! Monitor rectangle derivation.

use crate::error::{MappingError, MappingErrorKind};
use crate::models::{BoundaryRectangle, GridModel};

/// Derives the rectangle the mapper normalizes against.
///
/// - boundary-aware: tight bounding box of the boundary marker cells
/// - otherwise: tight bounding box of the LED cells, markers ignored
///
/// The non-boundary-aware rectangle only provides a consistent coordinate
/// frame; it says nothing about where the screen really is.
///
/// # Errors
///
/// Returns `NoBoundaryMarkers` if boundary-aware mode is requested and the
/// grid has no marker cells.
pub fn analyze(grid: &GridModel, boundary_aware: bool) -> Result<BoundaryRectangle, MappingError> {
    if boundary_aware {
        BoundaryRectangle::enclosing(grid.boundary_cells()).ok_or_else(|| {
            MappingError::new(
                MappingErrorKind::NoBoundaryMarkers,
                "boundary-aware mode requested but the layout has no boundary markers",
            )
        })
    } else {
        led_bounds(grid)
    }
}

/// Tight bounding box of all LED cells.
pub fn led_bounds(grid: &GridModel) -> Result<BoundaryRectangle, MappingError> {
    BoundaryRectangle::enclosing(grid.leds().map(|(_, cell)| cell)).ok_or_else(|| {
        MappingError::new(MappingErrorKind::EmptyLayout, "layout contains no LED cells")
    })
}
