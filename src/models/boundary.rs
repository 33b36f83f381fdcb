//! Monitor rectangle in grid space.

use crate::error::{MappingError, MappingErrorKind};
use crate::models::grid::Cell;
use serde::Serialize;

/// Grid-space bounds delineating the monitor area.
///
/// Bounds are inclusive. A single-cell rectangle is legal; inverted bounds
/// are rejected by [`BoundaryRectangle::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundaryRectangle {
    min_row: i64,
    max_row: i64,
    min_col: i64,
    max_col: i64,
}

impl BoundaryRectangle {
    /// Creates a rectangle from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBoundary` if `min_row > max_row` or `min_col > max_col`.
    pub fn new(min_row: i64, max_row: i64, min_col: i64, max_col: i64) -> Result<Self, MappingError> {
        if min_row > max_row || min_col > max_col {
            return Err(MappingError::new(
                MappingErrorKind::InvalidBoundary,
                format!(
                    "inverted bounds: rows {min_row}-{max_row}, cols {min_col}-{max_col}"
                ),
            ));
        }

        Ok(Self {
            min_row,
            max_row,
            min_col,
            max_col,
        })
    }

    /// Tight bounding box around a set of cells, `None` when the set is empty.
    pub fn enclosing<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut cells = cells.into_iter();
        let first = cells.next()?;

        let mut rect = Self {
            min_row: first.row,
            max_row: first.row,
            min_col: first.col,
            max_col: first.col,
        };

        for cell in cells {
            rect.min_row = rect.min_row.min(cell.row);
            rect.max_row = rect.max_row.max(cell.row);
            rect.min_col = rect.min_col.min(cell.col);
            rect.max_col = rect.max_col.max(cell.col);
        }

        Some(rect)
    }

    /// Topmost row.
    #[must_use]
    pub const fn min_row(&self) -> i64 {
        self.min_row
    }

    /// Bottommost row.
    #[must_use]
    pub const fn max_row(&self) -> i64 {
        self.max_row
    }

    /// Leftmost column.
    #[must_use]
    pub const fn min_col(&self) -> i64 {
        self.min_col
    }

    /// Rightmost column.
    #[must_use]
    pub const fn max_col(&self) -> i64 {
        self.max_col
    }

    /// Number of columns covered.
    #[must_use]
    pub const fn width(&self) -> u64 {
        self.max_col.abs_diff(self.min_col).saturating_add(1)
    }

    /// Number of rows covered.
    #[must_use]
    pub const fn height(&self) -> u64 {
        self.max_row.abs_diff(self.min_row).saturating_add(1)
    }

    /// Whether a cell lies inside the rectangle (bounds inclusive).
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row >= self.min_row
            && cell.row <= self.max_row
            && cell.col >= self.min_col
            && cell.col <= self.max_col
    }
}

impl std::fmt::Display for BoundaryRectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows {}-{}, cols {}-{}",
            self.min_row, self.max_row, self.min_col, self.max_col
        )
    }
}
