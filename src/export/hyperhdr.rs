//! JSON serialization of LED records.
//!
//! The default format is the HyperHDR `leds` array, one object per LED in
//! index order:
//!
//! ```json
//! [{"hmax": 0.2, "hmin": 0.2, "vmax": 0.05, "vmin": 0.0, "group": 0}]
//! ```
//!
//! HyperHDR identifies LEDs by array position, so the index itself is not
//! written. The `records` format keeps the index and nested scan ranges.

use crate::export::records::LedRecord;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Decimal places kept in HyperHDR output.
pub const HYPERHDR_PRECISION: i32 = 4;

/// Output document layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Flat HyperHDR LED objects
    #[default]
    HyperHdr,
    /// Records with index and nested scan ranges
    Records,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HyperHdr => write!(f, "hyperhdr"),
            Self::Records => write!(f, "records"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hyperhdr" => Ok(Self::HyperHdr),
            "records" => Ok(Self::Records),
            other => Err(format!(
                "invalid output format '{other}'. Must be 'hyperhdr' or 'records'"
            )),
        }
    }
}

/// One entry of the HyperHDR `leds` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperHdrLed {
    /// Right edge of the sampled area
    pub hmax: f64,
    /// Left edge of the sampled area
    pub hmin: f64,
    /// Bottom edge of the sampled area
    pub vmax: f64,
    /// Top edge of the sampled area
    pub vmin: f64,
    /// LED group
    pub group: i32,
}

impl From<&LedRecord> for HyperHdrLed {
    fn from(record: &LedRecord) -> Self {
        Self {
            hmax: round_coordinate(record.hscan.maximum),
            hmin: round_coordinate(record.hscan.minimum),
            vmax: round_coordinate(record.vscan.maximum),
            vmin: round_coordinate(record.vscan.minimum),
            group: record.group,
        }
    }
}

/// Rounds to [`HYPERHDR_PRECISION`] decimals, normalizing `-0.0` to `0.0`.
#[must_use]
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(HYPERHDR_PRECISION);
    (value * scale).round() / scale + 0.0
}

/// Serializes records in the requested format.
pub fn to_json(records: &[LedRecord], format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::HyperHdr => {
            let leds: Vec<HyperHdrLed> = records.iter().map(HyperHdrLed::from).collect();
            serialize(&leds, pretty)
        }
        OutputFormat::Records => serialize(&records, pretty),
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize LED configuration")
}

/// Writes a JSON document to disk using a temp file + rename.
pub fn write_json(path: &Path, json: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write temp output file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp output file to: {}", path.display()))?;

    Ok(())
}
