//! Palette definition file I/O.
//!
//! A palette definition is a TOML file listing the colors to generate:
//!
//! ```toml
//! [[colors]]
//! name = "Primary"
//! group = "Brand"
//! hex = "#3F6FD8"
//! light-scale = "lightening"
//! dark-scale = "darkening"
//! width = "normal"
//! ```
//!
//! Curve and width values are open strings at this boundary. A malformed
//! entry is skipped and reported as a per-entry diagnostic; the rest of the
//! file still loads. Only an unreadable or unparseable file is a hard error.

use crate::models::{ColorConfig, RangeWidth, RgbColor, ScaleCurve};
use crate::palette::{GenerationError, GenerationErrorKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk palette definition document.
#[derive(Debug, Serialize, Deserialize)]
struct PaletteFile {
    #[serde(default)]
    colors: Vec<PaletteFileEntry>,
}

/// One `[[colors]]` table in a definition file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PaletteFileEntry {
    name: String,
    #[serde(default)]
    group: String,
    hex: String,
    #[serde(default)]
    light_scale: Option<String>,
    #[serde(default)]
    dark_scale: Option<String>,
    #[serde(default)]
    width: Option<String>,
}

/// Result of loading a definition file: the configs that parsed, plus a
/// diagnostic for every entry that did not.
#[derive(Debug)]
pub struct LoadedPalette {
    /// Successfully parsed color configs, in file order.
    pub configs: Vec<ColorConfig>,
    /// Per-entry failures; each skipped exactly one `[[colors]]` table.
    pub errors: Vec<GenerationError>,
}

/// Service for palette definition file I/O.
pub struct PaletteFileService;

impl PaletteFileService {
    /// Loads a palette definition from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    /// Malformed individual entries are not errors; they are reported in
    /// [`LoadedPalette::errors`].
    pub fn load(path: &Path) -> Result<LoadedPalette> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file {}", path.display()))?;

        let file: PaletteFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse palette file {}", path.display()))?;

        let mut configs = Vec::with_capacity(file.colors.len());
        let mut errors = Vec::new();

        for entry in file.colors {
            match parse_entry(&entry) {
                Ok(config) => configs.push(config),
                Err(error) => errors.push(error),
            }
        }

        Ok(LoadedPalette { configs, errors })
    }

    /// Saves color configs as a palette definition file.
    ///
    /// Base colors are written as hex; alpha is not representable in the
    /// file format and is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn save(configs: &[ColorConfig], path: &Path) -> Result<()> {
        let file = PaletteFile {
            colors: configs
                .iter()
                .map(|config| PaletteFileEntry {
                    name: config.color_name.clone(),
                    group: config.group_name.clone(),
                    hex: RgbColor::from_hsb(&config.color).to_hex(),
                    light_scale: Some(config.light_color_scale.to_string()),
                    dark_scale: Some(config.dark_color_scale.to_string()),
                    width: Some(config.range_width.to_string()),
                })
                .collect(),
        };

        let content = toml::to_string_pretty(&file)
            .context("Failed to serialize palette definition")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write palette file {}", path.display()))
    }
}

fn parse_entry(entry: &PaletteFileEntry) -> Result<ColorConfig, GenerationError> {
    let in_context = |error: GenerationError| {
        let error = if entry.group.is_empty() {
            error
        } else {
            error.with_group(&entry.group)
        };
        if entry.name.is_empty() {
            error
        } else {
            error.with_color_name(&entry.name)
        }
    };

    let rgb = RgbColor::from_hex(&entry.hex).map_err(|e| {
        in_context(GenerationError::new(
            GenerationErrorKind::InvalidComponent,
            e.to_string(),
        ))
    })?;

    let light_scale = parse_enum::<ScaleCurve>(entry.light_scale.as_deref(), &in_context)?;
    let dark_scale = parse_enum::<ScaleCurve>(entry.dark_scale.as_deref(), &in_context)?;
    let width = parse_enum::<RangeWidth>(entry.width.as_deref(), &in_context)?;

    let mut config = ColorConfig::new(rgb.to_hsb(), &entry.name).with_group(&entry.group);
    if let Some(curve) = light_scale {
        config = config.with_light_scale(curve);
    }
    if let Some(curve) = dark_scale {
        config = config.with_dark_scale(curve);
    }
    if let Some(width) = width {
        config = config.with_width(width);
    }

    Ok(config)
}

fn parse_enum<T: std::str::FromStr<Err = anyhow::Error>>(
    value: Option<&str>,
    in_context: &impl Fn(GenerationError) -> GenerationError,
) -> Result<Option<T>, GenerationError> {
    match value {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|e| {
            in_context(GenerationError::new(
                GenerationErrorKind::UnknownEnumValue,
                e.to_string(),
            ))
        }),
    }
}
