//! End-to-end tests for `ledmapper convert`.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Output Shape Tests
// ============================================================================

#[test]
fn test_convert_to_stdout_hyperhdr() {
    let (layout, _temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");
    let output = run(&["convert", layout.to_str().unwrap(), "--boundary-aware"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let leds = stdout_json(&output);
    let leds = leds.as_array().expect("Output should be an array");
    assert_eq!(leds.len(), 18);

    for led in leds {
        let keys: Vec<&str> = led.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        for key in ["hmax", "hmin", "vmax", "vmin", "group"] {
            assert!(led.get(key).is_some(), "Missing '{key}' in {led}");
        }
    }
}

#[test]
fn test_convert_records_format() {
    let (layout, _temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");
    let output = run(&[
        "convert",
        layout.to_str().unwrap(),
        "--boundary-aware",
        "--format",
        "records",
    ]);

    assert_eq!(output.status.code(), Some(0));

    let records = stdout_json(&output);
    let records = records.as_array().unwrap();
    let indices: Vec<u64> = records.iter().map(|r| r["index"].as_u64().unwrap()).collect();
    assert_eq!(indices, (0..18).collect::<Vec<u64>>());
    assert!(records[0]["hscan"]["minimum"].is_number());
    assert!(records[0]["vscan"]["maximum"].is_number());
}

#[test]
fn test_convert_pretty_output() {
    let (layout, _temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");
    let compact = run(&["convert", layout.to_str().unwrap(), "-b"]);
    let pretty = run(&["convert", layout.to_str().unwrap(), "-b", "--pretty"]);

    assert_eq!(compact.status.code(), Some(0));
    assert_eq!(pretty.status.code(), Some(0));

    let compact_text = String::from_utf8_lossy(&compact.stdout);
    let pretty_text = String::from_utf8_lossy(&pretty.stdout);
    assert_eq!(compact_text.trim().lines().count(), 1);
    assert!(pretty_text.lines().count() > 18);
    assert_eq!(stdout_json(&compact), stdout_json(&pretty));
}

#[test]
fn test_convert_is_deterministic() {
    let (layout, _temp) = create_temp_layout_file(&ring_layout(16, 9), "ring.csv");
    let path = layout.to_str().unwrap();

    let first = run(&["convert", path, "-b", "--mode", "ambient"]);
    let second = run(&["convert", path, "-b", "--mode", "ambient"]);

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}

// ============================================================================
// Mapping Mode Tests
// ============================================================================

#[test]
fn test_convert_perimeter_bands() {
    let (layout, _temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");
    let output = run(&[
        "convert",
        layout.to_str().unwrap(),
        "--mode",
        "perimeter",
        "--boundary-aware",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let leds = stdout_json(&output);

    // LED 3 sits above the monitor: top band
    assert_eq!(led_value(&leds, 3, "hmin"), 0.6667);
    assert_eq!(led_value(&leds, 3, "hmax"), 0.6667);
    assert_eq!(led_value(&leds, 3, "vmin"), 0.0);
    assert_eq!(led_value(&leds, 3, "vmax"), 0.05);

    // LED 7 is right of the monitor: right band
    assert_eq!(led_value(&leds, 7, "hmin"), 0.95);
    assert_eq!(led_value(&leds, 7, "hmax"), 1.0);
    assert_eq!(led_value(&leds, 7, "vmin"), 0.5);

    // LED 12 is below: bottom band
    assert_eq!(led_value(&leds, 12, "vmin"), 0.95);
    assert_eq!(led_value(&leds, 12, "vmax"), 1.0);
    assert_eq!(led_value(&leds, 12, "hmin"), 0.3333);

    // LED 16 is left: left band
    assert_eq!(led_value(&leds, 16, "hmin"), 0.0);
    assert_eq!(led_value(&leds, 16, "hmax"), 0.05);
    assert_eq!(led_value(&leds, 16, "vmax"), 0.5);
}

#[test]
fn test_convert_perimeter_corner_prefers_top() {
    let (layout, _temp) = create_temp_layout_file(CORNER_CSV, "corner.csv");
    let output = run(&[
        "convert",
        layout.to_str().unwrap(),
        "--mode",
        "perimeter",
        "--depth",
        "0.1",
        "--boundary-aware",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let leds = stdout_json(&output);

    // Equidistant from top and left: top band, horizontal position clamped
    assert_eq!(led_value(&leds, 0, "vmin"), 0.0);
    assert_eq!(led_value(&leds, 0, "vmax"), 0.1);
    assert_eq!(led_value(&leds, 0, "hmin"), 0.0);
    assert_eq!(led_value(&leds, 0, "hmax"), 0.0);
}

#[test]
fn test_convert_wall_without_markers_stays_in_range() {
    let (layout, _temp) = create_temp_layout_file(STRIP_CSV, "strip.csv");
    let output = run(&["convert", layout.to_str().unwrap(), "--mode", "wall"]);

    assert_eq!(output.status.code(), Some(0));
    let leds = stdout_json(&output);

    for led in leds.as_array().unwrap() {
        for key in ["hmax", "hmin", "vmax", "vmin"] {
            let value = led[key].as_f64().unwrap();
            assert!((0.0..=1.0).contains(&value), "{key} = {value} out of range");
        }
        assert_eq!(led["hmin"], led["hmax"]);
        assert_eq!(led["vmin"], led["vmax"]);
    }

    // LED 4 is at the right edge, halfway down
    assert_eq!(led_value(&leds, 4, "hmin"), 1.0);
    assert_eq!(led_value(&leds, 4, "vmin"), 0.5);
}

#[test]
fn test_convert_ambient_bias_zero_matches_wall() {
    let (layout, _temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");
    let path = layout.to_str().unwrap();

    let wall = run(&["convert", path, "-b", "--mode", "wall"]);
    let ambient = run(&["convert", path, "-b", "--mode", "ambient", "--edge-bias", "0"]);

    assert_eq!(wall.status.code(), Some(0));
    assert_eq!(ambient.status.code(), Some(0));
    assert_eq!(stdout_json(&wall), stdout_json(&ambient));
}

#[test]
fn test_convert_group_flag() {
    let (layout, _temp) = create_temp_layout_file(STRIP_CSV, "strip.csv");
    let output = run(&["convert", layout.to_str().unwrap(), "--group", "3"]);

    assert_eq!(output.status.code(), Some(0));
    let leds = stdout_json(&output);
    assert!(leds.as_array().unwrap().iter().all(|led| led["group"] == 3));
}

#[test]
fn test_convert_sample_size_widens_wall_points() {
    let (layout, _temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");
    let output = run(&[
        "convert",
        layout.to_str().unwrap(),
        "-b",
        "--mode",
        "wall",
        "--sample-size",
        "0.1",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let leds = stdout_json(&output);

    // LED 7 is at ny = 0.5
    assert_eq!(led_value(&leds, 7, "vmin"), 0.45);
    assert_eq!(led_value(&leds, 7, "vmax"), 0.55);
}

#[test]
fn test_convert_custom_delimiter_and_token() {
    let csv = MONITOR_CSV.replace(',', ";").replace('x', "M");
    let (layout, _temp) = create_temp_layout_file(&csv, "monitor.txt");
    let output = run(&[
        "convert",
        layout.to_str().unwrap(),
        "-b",
        "--delimiter",
        ";",
        "--boundary-token",
        "m",
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 18);
}

// ============================================================================
// Output File Tests
// ============================================================================

#[test]
fn test_convert_to_file_prints_summary() {
    let (layout, temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");
    let out_path = temp.path().join("hyperhdr.json");

    let output = run(&[
        "convert",
        layout.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "--boundary-aware",
    ]);

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Converted 18 LEDs"), "stdout: {stdout}");
    assert!(stdout.contains("First LED"));
    assert!(stdout.contains("Last LED"));
    assert!(stdout.contains("Monitor area: rows 1-3, cols 1-4"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(written.as_array().unwrap().len(), 18);
    assert!(!out_path.with_extension("json.tmp").exists());
}

#[test]
fn test_convert_without_markers_warns() {
    let (layout, temp) = create_temp_layout_file(STRIP_CSV, "strip.csv");
    let out_path = temp.path().join("out.json");

    let output = run(&[
        "convert",
        layout.to_str().unwrap(),
        out_path.to_str().unwrap(),
        "--mode",
        "perimeter",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warnings:"), "stdout: {stdout}");
    assert!(stdout.contains("bounding box"));
}

#[test]
fn test_convert_out_of_range_bias_is_clamped() {
    let (layout, _temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");
    let path = layout.to_str().unwrap();

    let clamped = run(&["convert", path, "-b", "--edge-bias", "1.7"]);
    let one = run(&["convert", path, "-b", "--edge-bias", "1.0"]);

    assert_eq!(clamped.status.code(), Some(0));
    assert_eq!(stdout_json(&clamped), stdout_json(&one));

    let stderr = String::from_utf8_lossy(&clamped.stderr);
    assert!(stderr.contains("edge_bias"), "stderr: {stderr}");
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_convert_missing_file_is_io_error() {
    let output = run(&["convert", "/nonexistent/layout.csv"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load layout"));
}

#[test]
fn test_convert_duplicate_index_fails() {
    let (layout, temp) = create_temp_layout_file("0,1,2\n3,x,1", "dup.csv");
    let out_path = temp.path().join("out.json");

    let output = run(&[
        "convert",
        layout.to_str().unwrap(),
        out_path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate LED"));
    assert!(!out_path.exists(), "No partial output on error");
}

#[test]
fn test_convert_bad_token_fails() {
    let (layout, _temp) = create_temp_layout_file("0,1,abc", "bad.csv");
    let output = run(&["convert", layout.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Format Error"));
    assert!(stderr.contains("row 0, col 2"));
}

#[test]
fn test_convert_boundary_aware_without_markers_fails() {
    let (layout, _temp) = create_temp_layout_file(STRIP_CSV, "strip.csv");
    let output = run(&["convert", layout.to_str().unwrap(), "--boundary-aware"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No Boundary Markers"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_convert_empty_layout_fails() {
    let (layout, _temp) = create_temp_layout_file("x,x\n,,\n", "empty.csv");
    let output = run(&["convert", layout.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Empty Layout"));
}

#[test]
fn test_convert_invalid_mode_rejected() {
    let (layout, _temp) = create_temp_layout_file(STRIP_CSV, "strip.csv");
    let output = run(&["convert", layout.to_str().unwrap(), "--mode", "diagonal"]);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("diagonal"));
}

#[test]
fn test_convert_uses_config_defaults() {
    let config_dir = tempfile::TempDir::new().unwrap();
    let (layout, _temp) = create_temp_layout_file(MONITOR_CSV, "monitor.csv");

    let set = isolated_command(
        &["config", "set", "--mode", "wall", "--boundary-aware", "true", "--group", "4"],
        config_dir.path(),
    )
    .output()
    .unwrap();
    assert_eq!(set.status.code(), Some(0));

    let output = isolated_command(&["convert", layout.to_str().unwrap()], config_dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let leds = stdout_json(&output);
    // Wall mode against the marker block: LED 7 at nx = 4/3 before clamping
    assert_eq!(led_value(&leds, 7, "hmin"), 1.0);
    assert_eq!(led_value(&leds, 7, "vmin"), 0.5);
    assert_eq!(leds[0]["group"], 4);
}
