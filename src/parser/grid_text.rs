//! Delimited-text grid parsing.
//!
//! A layout is a spreadsheet export (usually CSV from Google Sheets) where each
//! non-empty cell holds either an LED index or a boundary marker:
//!
//! ```text
//!  0, 1, 2, 3, 4, 5
//! 30, x, x, x, x, 6
//! 29, x, x, x, x, 7
//! 28,27,26,25,24, 8
//! ```
//!
//! Row and column indices come from the position of the field, so empty
//! fields must be kept to preserve column alignment.

// Row/column positions are far below i64::MAX
#![allow(clippy::cast_possible_wrap)]

use crate::error::{MappingError, MappingErrorKind};
use crate::models::{Cell, CellValue, GridModel, LedIndex};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Default boundary marker token (matched case-insensitively).
pub const DEFAULT_BOUNDARY_TOKEN: &str = "x";

/// How fields are separated and which token marks the monitor area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridFormat {
    /// Field separator
    pub delimiter: char,
    /// Boundary marker token (case-insensitive)
    pub boundary_token: String,
}

impl Default for GridFormat {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            boundary_token: DEFAULT_BOUNDARY_TOKEN.to_string(),
        }
    }
}

/// Reads and parses a layout file.
pub fn load_grid(path: &Path, format: &GridFormat) -> Result<GridModel> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    let grid = parse_grid(&content, format)?;
    Ok(grid)
}

/// Parses delimited text into a grid.
pub fn parse_grid(text: &str, format: &GridFormat) -> Result<GridModel, MappingError> {
    let rows = split_rows(text, format.delimiter)?;
    parse_rows(&rows, format)
}

/// Splits CSV text into rows of fields.
///
/// Blank lines are kept as empty rows so row indices match spreadsheet rows.
/// A quoted field may span several lines and still counts as one row.
///
/// # Errors
///
/// Returns `Format` if the delimiter is not ASCII or the text is not valid CSV.
pub fn split_rows(text: &str, delimiter: char) -> Result<Vec<Vec<String>>, MappingError> {
    let delimiter = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            MappingError::new(
                MappingErrorKind::Format,
                format!("delimiter '{delimiter}' must be a single ASCII character"),
            )
        })?;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    // Line breaks inside quoted fields seen so far
    let mut embedded_breaks = 0;

    for record in reader.records() {
        let record = record.map_err(|e| {
            MappingError::new(MappingErrorKind::Format, format!("invalid CSV: {e}"))
        })?;

        let row = record
            .position()
            .map_or(rows.len(), |pos| line_index(text, pos.byte()).saturating_sub(embedded_breaks));
        if row > rows.len() {
            rows.resize_with(row, Vec::new);
        }

        embedded_breaks += record.iter().map(|field| field.matches('\n').count()).sum::<usize>();
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Zero-based line of the first record byte at or after `offset`.
///
/// The reader skips blank lines, so `offset` may point at line breaks that
/// precede the record.
fn line_index(text: &str, offset: u64) -> usize {
    let bytes = text.as_bytes();
    let mut start = usize::try_from(offset).map_or(bytes.len(), |o| o.min(bytes.len()));
    while matches!(bytes.get(start), Some(b'\r' | b'\n')) {
        start += 1;
    }
    bytes[..start].iter().filter(|&&b| b == b'\n').count()
}

/// Builds a grid from rows of fields; the field position gives (row, col).
pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>], format: &GridFormat) -> Result<GridModel, MappingError> {
    let mut cells = Vec::new();

    for (row, fields) in rows.iter().enumerate() {
        for (col, field) in fields.iter().enumerate() {
            let cell = Cell::new(row as i64, col as i64);
            if let Some(value) = classify_field(field.as_ref(), format).map_err(|e| e.at(cell))? {
                cells.push((cell, value));
            }
        }
    }

    GridModel::from_cells(cells)
}

fn classify_field(field: &str, format: &GridFormat) -> Result<Option<CellValue>, MappingError> {
    let token = unquote(field.trim()).trim();

    if token.is_empty() {
        return Ok(None);
    }

    if token.eq_ignore_ascii_case(format.boundary_token.trim()) {
        return Ok(Some(CellValue::Boundary));
    }

    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(MappingError::new(
            MappingErrorKind::Format,
            format!(
                "unrecognized token '{token}' (expected an LED index or '{}')",
                format.boundary_token
            ),
        ));
    }

    let index: LedIndex = token.parse().map_err(|_| {
        MappingError::new(
            MappingErrorKind::Format,
            format!("LED index '{token}' is out of range"),
        )
    })?;

    Ok(Some(CellValue::Led(index)))
}

/// Strips a pair of quotes left around a field that had whitespace
/// before its opening quote.
fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(token)
}
