//! Sparse LED grid layout.

use crate::error::{MappingError, MappingErrorKind};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Sequential LED index as written in the layout.
pub type LedIndex = u32;

/// A (row, col) location in the layout grid.
///
/// Rows and columns may be negative; the grid makes no assumption about
/// being a dense rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    /// Row index (top = smallest)
    pub row: i64,
    /// Column index (left = smallest)
    pub col: i64,
}

impl Cell {
    /// Creates a new cell location.
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, col {}", self.row, self.col)
    }
}

/// Content of a non-empty grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue {
    /// An LED with its sequential index
    Led(LedIndex),
    /// Part of the monitor area
    Boundary,
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Led(index) => write!(f, "LED {index}"),
            Self::Boundary => write!(f, "boundary marker"),
        }
    }
}

/// Parsed layout: a sparse mapping from cell to LED index or boundary marker.
///
/// # Invariants
///
/// - every LED index appears in exactly one cell
/// - every cell holds at most one value
/// - at least one LED is present
///
/// Built once via [`GridModel::from_cells`] and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridModel {
    cells: HashMap<Cell, CellValue>,
    /// LED index → cell, kept sorted for ascending iteration
    leds: BTreeMap<LedIndex, Cell>,
}

impl GridModel {
    /// Builds a grid from `(cell, value)` pairs.
    ///
    /// # Errors
    ///
    /// - `DuplicateLed` if an LED index is placed in two cells
    /// - `Format` if a cell is assigned twice
    /// - `EmptyLayout` if no LED cell is present
    pub fn from_cells<I>(cells: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (Cell, CellValue)>,
    {
        let mut grid = Self::default();
        for (cell, value) in cells {
            grid.insert(cell, value)?;
        }

        if grid.leds.is_empty() {
            return Err(MappingError::new(
                MappingErrorKind::EmptyLayout,
                "layout contains no LED cells",
            ));
        }

        Ok(grid)
    }

    fn insert(&mut self, cell: Cell, value: CellValue) -> Result<(), MappingError> {
        if let Some(existing) = self.cells.get(&cell) {
            return Err(MappingError::new(
                MappingErrorKind::Format,
                format!("cell already holds {existing}, cannot also hold {value}"),
            )
            .at(cell));
        }

        if let CellValue::Led(index) = value {
            if let Some(first) = self.leds.get(&index) {
                return Err(MappingError::new(
                    MappingErrorKind::DuplicateLed,
                    format!("LED {index} is already placed at {first}"),
                )
                .at(cell));
            }
            self.leds.insert(index, cell);
        }

        self.cells.insert(cell, value);
        Ok(())
    }

    /// Looks up the value stored at a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<CellValue> {
        self.cells.get(&cell).copied()
    }

    /// Iterates LEDs in ascending index order.
    pub fn leds(&self) -> impl Iterator<Item = (LedIndex, Cell)> + '_ {
        self.leds.iter().map(|(&index, &cell)| (index, cell))
    }

    /// Iterates boundary marker cells (unordered).
    pub fn boundary_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .filter(|(_, value)| matches!(value, CellValue::Boundary))
            .map(|(&cell, _)| cell)
    }

    /// Gets the cell holding an LED.
    #[must_use]
    pub fn led_position(&self, index: LedIndex) -> Option<Cell> {
        self.leds.get(&index).copied()
    }

    /// Number of LED cells.
    #[must_use]
    pub fn led_count(&self) -> usize {
        self.leds.len()
    }

    /// Number of boundary marker cells.
    #[must_use]
    pub fn boundary_count(&self) -> usize {
        self.cells.len() - self.leds.len()
    }
}
