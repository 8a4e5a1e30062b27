//! End-to-end tests for `huescale generate`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_generate_json_succeeds() {
    let (palette_path, temp) = write_palette_file(basic_palette_toml());
    let out_path = temp.path().join("tokens.json");

    let output = Command::new(huescale_bin())
        .args([
            "generate",
            "--input",
            palette_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generate should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(out_path.exists(), "Token file should exist");

    let content = fs::read_to_string(&out_path).expect("Failed to read token file");
    let value: serde_json::Value =
        serde_json::from_str(&content).expect("Output should be valid JSON");

    assert_eq!(value["name"], "palette");
    let groups = value["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["name"], "Brand");
    assert_eq!(groups[1]["name"], "Semantic");

    // Default width => 9 steps, narrow width => 5 steps
    assert_eq!(
        groups[0]["colors"][0]["light"].as_array().unwrap().len(),
        9
    );
    assert_eq!(
        groups[0]["colors"][1]["light"].as_array().unwrap().len(),
        5
    );
}

#[test]
fn test_generate_markdown_succeeds() {
    let (palette_path, temp) = write_palette_file(basic_palette_toml());
    let out_path = temp.path().join("swatches.md");

    let output = Command::new(huescale_bin())
        .args([
            "generate",
            "--input",
            palette_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--format",
            "markdown",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).expect("Failed to read swatch sheet");
    assert!(content.contains("## Brand"));
    assert!(content.contains("### Primary"));
    assert!(content.contains("| Step | Light | Dark |"));
    assert!(content.contains("`#"));
}

#[test]
fn test_generate_reports_bad_entry_but_continues() {
    let (palette_path, temp) = write_palette_file(palette_toml_with_bad_entry());
    let out_path = temp.path().join("tokens.json");

    let output = Command::new(huescale_bin())
        .args([
            "generate",
            "--input",
            palette_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    // Best-effort by default: bad entry is reported, build still succeeds
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown Enum Value"), "stderr: {stderr}");
    assert!(stderr.contains("Broken"));

    let content = fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let colors = value["groups"][0]["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0]["name"], "Fine");
}

#[test]
fn test_generate_strict_fails_on_bad_entry() {
    let (palette_path, temp) = write_palette_file(palette_toml_with_bad_entry());
    let out_path = temp.path().join("tokens.json");

    let output = Command::new(huescale_bin())
        .args([
            "generate",
            "--input",
            palette_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
            "--strict",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1), "strict mode should fail");
    // Output is still written before the strict check
    assert!(out_path.exists());
}

#[test]
fn test_generate_missing_input_fails() {
    let output = Command::new(huescale_bin())
        .args(["generate", "--input", "/nonexistent/palette.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "I/O failure exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load palette definition"));
}

#[test]
fn test_generate_empty_name_reported() {
    let (palette_path, temp) = write_palette_file(
        r##"
[[colors]]
name = ""
group = "Brand"
hex = "#112233"
"##,
    );
    let out_path = temp.path().join("tokens.json");

    let output = Command::new(huescale_bin())
        .args([
            "generate",
            "--input",
            palette_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Empty Name"), "stderr: {stderr}");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(value["groups"].as_array().unwrap().len(), 0);
}
