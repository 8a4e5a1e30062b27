//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the huescale binary
pub fn huescale_bin() -> &'static str {
    env!("CARGO_BIN_EXE_huescale")
}

/// Writes a palette definition file into a fresh temp dir.
///
/// Returns the file path and the temp dir guard (keep it alive for the
/// duration of the test).
pub fn write_palette_file(content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("palette.toml");
    fs::write(&path, content).expect("Failed to write palette file");
    (path, dir)
}

/// A small two-group palette definition used by most generate tests.
pub fn basic_palette_toml() -> &'static str {
    r##"
[[colors]]
name = "Primary"
group = "Brand"
hex = "#3B82F6"

[[colors]]
name = "Secondary"
group = "Brand"
hex = "#8B5CF6"
width = "narrow"

[[colors]]
name = "Success"
group = "Semantic"
hex = "#22C55E"
light-scale = "lightening"
dark-scale = "darkening"
"##
}

/// A palette definition containing one malformed entry.
pub fn palette_toml_with_bad_entry() -> &'static str {
    r##"
[[colors]]
name = "Broken"
group = "Brand"
hex = "#FF0000"
width = "gigantic"

[[colors]]
name = "Fine"
group = "Brand"
hex = "#00FF00"
"##
}
