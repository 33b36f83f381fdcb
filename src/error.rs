//! Error and warning types raised while building a grid or mapping it.
//!
//! Every fatal condition is detected before any LED is mapped, so a conversion
//! either yields a mapping for every LED or fails with one of these errors.

use crate::models::grid::Cell;

/// Fatal error raised by grid construction or boundary analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingError {
    /// Type of error
    pub kind: MappingErrorKind,
    /// Grid cell the error refers to, if any
    pub cell: Option<Cell>,
    /// Human-readable error message
    pub message: String,
}

impl MappingError {
    /// Creates a new mapping error.
    pub fn new(kind: MappingErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            cell: None,
            message: message.into(),
        }
    }

    /// Sets the cell context.
    #[must_use]
    pub const fn at(mut self, cell: Cell) -> Self {
        self.cell = Some(cell);
        self
    }
}

impl std::fmt::Display for MappingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(cell) = self.cell {
            write!(f, "[{}] {}: {}", cell, self.kind, self.message)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for MappingError {}

/// Types of fatal mapping errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingErrorKind {
    /// Cell token is neither empty, a boundary marker, nor a non-negative integer
    Format,
    /// Same LED index appears in two cells
    DuplicateLed,
    /// Layout contains no LED cells
    EmptyLayout,
    /// Boundary-aware mode requested but no marker cells exist
    NoBoundaryMarkers,
    /// Rectangle bounds are inverted
    InvalidBoundary,
}

impl std::fmt::Display for MappingErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format => write!(f, "Format Error"),
            Self::DuplicateLed => write!(f, "Duplicate LED"),
            Self::EmptyLayout => write!(f, "Empty Layout"),
            Self::NoBoundaryMarkers => write!(f, "No Boundary Markers"),
            Self::InvalidBoundary => write!(f, "Invalid Boundary"),
        }
    }
}

/// Non-fatal condition surfaced alongside a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingWarning {
    /// Type of warning
    pub kind: MappingWarningKind,
    /// Warning message
    pub message: String,
}

impl MappingWarning {
    /// Creates a new mapping warning.
    pub fn new(kind: MappingWarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for MappingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Types of mapping warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingWarningKind {
    /// `edge_bias` or `depth` was outside [0, 1] and got clamped
    ParameterRange,
    /// Perimeter/ambient mode ran without boundary markers
    InferredBoundary,
    /// Perimeter mode found LEDs inside the monitor rectangle
    InteriorLeds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_with_cell() {
        let err = MappingError::new(MappingErrorKind::Format, "unrecognized token 'abc'")
            .at(Cell::new(2, 5));
        assert_eq!(
            err.to_string(),
            "[row 2, col 5] Format Error: unrecognized token 'abc'"
        );
    }

    #[test]
    fn test_error_display_without_cell() {
        let err = MappingError::new(MappingErrorKind::EmptyLayout, "no LED cells found");
        assert_eq!(err.to_string(), "Empty Layout: no LED cells found");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let err = MappingError::new(MappingErrorKind::NoBoundaryMarkers, "none");
        let any: anyhow::Error = err.clone().into();
        assert_eq!(any.downcast_ref::<MappingError>(), Some(&err));
    }
}
