//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// 6x5 monitor: LEDs 0-17 run clockwise around a 4x3 block of markers.
///
/// Row 0 holds LEDs 0-5, the right column 6-8, the bottom row 9-14 and the
/// left column 15-17.
pub const MONITOR_CSV: &str = "\
0,1,2,3,4,5
17,x,x,x,x,6
16,x,x,x,x,7
15,x,x,x,x,8
14,13,12,11,10,9
";

/// 3x3 marker block at rows/cols 1-3 with LED 0 in the top-left corner and
/// LED 1 directly above the block's top-left marker.
pub const CORNER_CSV: &str = "\
0,1,,,
,x,x,x,
,x,x,x,
,x,x,x,2
";

/// Layout without any boundary markers.
pub const STRIP_CSV: &str = "\
0,1,2,3
9,,,4
8,7,6,5
";

/// Builds a layout where LEDs run clockwise around a `width` x `height`
/// marker block, one ring of LEDs thick.
pub fn ring_layout(width: usize, height: usize) -> String {
    let cols = width + 2;
    let rows = height + 2;
    let mut grid = vec![vec![String::new(); cols]; rows];

    for row in grid.iter_mut().take(rows - 1).skip(1) {
        for cell in row.iter_mut().take(cols - 1).skip(1) {
            *cell = "x".to_string();
        }
    }

    let mut index = 0;
    let mut place = |grid: &mut Vec<Vec<String>>, row: usize, col: usize| {
        grid[row][col] = index.to_string();
        index += 1;
    };
    for col in 0..cols {
        place(&mut grid, 0, col);
    }
    for row in 1..rows {
        place(&mut grid, row, cols - 1);
    }
    for col in (0..cols - 1).rev() {
        place(&mut grid, rows - 1, col);
    }
    for row in (1..rows - 1).rev() {
        place(&mut grid, row, 0);
    }

    grid.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `content` to `name` inside a fresh temp dir.
pub fn create_temp_layout_file(content: &str, name: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write layout file");
    (path, temp_dir)
}

/// Path to the ledmapper binary
pub fn ledmapper_bin() -> &'static str {
    env!("CARGO_BIN_EXE_ledmapper")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(ledmapper_bin());
    cmd.env("LEDMAPPER_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a throwaway config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, failing with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}). stdout: {stdout} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Reads one numeric field of one LED from a HyperHDR array.
pub fn led_value(leds: &serde_json::Value, index: usize, field: &str) -> f64 {
    leds[index][field]
        .as_f64()
        .unwrap_or_else(|| panic!("LED {index} has no numeric '{field}'"))
}
