//! Design-token JSON export.
//!
//! Serializes a built palette into a self-describing JSON document that any
//! downstream token pipeline (CSS custom properties, platform color assets)
//! can project from without loss: group, name, per-mode ramp, and both the
//! HSB components and the hex rendering of every step.

use crate::models::RgbColor;
use crate::palette::Palette;
use crate::ramp::Ramp;
use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

/// Top-level token document.
#[derive(Debug, Serialize)]
struct TokenDocument<'a> {
    /// Palette name, taken from the definition file stem or CLI argument
    name: &'a str,
    /// RFC 3339 timestamp of the export
    generated_at: String,
    /// Groups in palette order
    groups: Vec<TokenGroup>,
}

#[derive(Debug, Serialize)]
struct TokenGroup {
    name: String,
    colors: Vec<TokenColor>,
}

#[derive(Debug, Serialize)]
struct TokenColor {
    name: String,
    light: Vec<TokenStep>,
    dark: Vec<TokenStep>,
}

#[derive(Debug, Serialize)]
struct TokenStep {
    step: usize,
    hex: String,
    hue: f32,
    saturation: f32,
    brightness: f32,
    alpha: f32,
}

/// Serializes a palette into pretty-printed design-token JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn export_tokens(palette: &Palette, name: &str) -> Result<String> {
    let document = TokenDocument {
        name,
        generated_at: Utc::now().to_rfc3339(),
        groups: palette
            .groups
            .iter()
            .map(|group| TokenGroup {
                name: group.name.clone(),
                colors: group
                    .colors
                    .iter()
                    .map(|entry| TokenColor {
                        name: entry.name.clone(),
                        light: ramp_steps(&entry.light),
                        dark: ramp_steps(&entry.dark),
                    })
                    .collect(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

fn ramp_steps(ramp: &Ramp) -> Vec<TokenStep> {
    ramp.iter()
        .map(|(step, color)| TokenStep {
            step,
            hex: RgbColor::from_hsb(color).to_hex(),
            hue: color.hue,
            saturation: color.saturation,
            brightness: color.brightness,
            alpha: color.alpha,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_palette, ColorConfig, HsbColor};
    use crate::palette::build_palette;

    #[test]
    fn test_export_structure() {
        let build = build_palette(&sample_palette());
        let json = export_tokens(&build.palette, "sample").unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "sample");
        assert!(value["generated_at"].is_string());

        let groups = value["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0]["name"], "Brand");

        let primary = &groups[0]["colors"][0];
        assert_eq!(primary["name"], "Primary");
        assert_eq!(primary["light"].as_array().unwrap().len(), 9);
        assert_eq!(primary["dark"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_steps_carry_hex_and_components() {
        let base = HsbColor::opaque(0.0, 1.0, 1.0).unwrap();
        let build = build_palette(&[ColorConfig::new(base, "Red").with_group("Test")]);
        let json = export_tokens(&build.palette, "reds").unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let anchor = &value["groups"][0]["colors"][0]["light"][0];

        assert_eq!(anchor["step"], 0);
        assert_eq!(anchor["hex"], "#FF0000");
        assert_eq!(anchor["hue"], 0.0);
        assert_eq!(anchor["saturation"], 1.0);
        assert_eq!(anchor["brightness"], 1.0);
        assert_eq!(anchor["alpha"], 1.0);
    }

    #[test]
    fn test_empty_palette_exports() {
        let build = build_palette(&[]);
        let json = export_tokens(&build.palette, "empty").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["groups"].as_array().unwrap().len(), 0);
    }
}
