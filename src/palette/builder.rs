//! Palette assembly from an ordered list of color configs.
//!
//! Building is the only way a palette comes into existence and the only way
//! edits are reflected: there is no incremental update path. Each config is
//! expanded into one light-mode and one dark-mode ramp from the same base
//! color; failures are scoped to the offending config and reported, never
//! escalated to the whole build.

use crate::models::{ColorConfig, HsbColor};
use crate::palette::report::{
    GenerationError, GenerationErrorKind, GenerationReport, GenerationWarning,
    GenerationWarningKind,
};
use crate::ramp::{generate, Ramp};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Group name used for configs with an empty or absent group.
pub const DEFAULT_GROUP: &str = "Ungrouped";

/// The complete, grouped collection of ramps for every color config, across
/// both appearance modes. Immutable once built; consumed only for export and
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Groups in order of first appearance in the input.
    pub groups: Vec<PaletteGroup>,
}

impl Palette {
    /// Looks up a group by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&PaletteGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Total number of color entries across all groups.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.groups.iter().map(|g| g.colors.len()).sum()
    }

    /// Returns true if no config produced an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// One named group of palette entries, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteGroup {
    /// Group name (e.g. "Brand"), or [`DEFAULT_GROUP`] for ungrouped colors.
    pub name: String,
    /// Entries in the order their configs appeared in the input.
    pub colors: Vec<PaletteEntry>,
}

/// One named color with its ramp for each appearance mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Export key within the group.
    pub name: String,
    /// Ramp for the light appearance mode.
    pub light: Ramp,
    /// Ramp for the dark appearance mode.
    pub dark: Ramp,
}

/// Result of one palette build: the best-effort palette plus per-config
/// diagnostics.
#[derive(Debug, Clone)]
pub struct PaletteBuild {
    /// Palette containing every config that generated successfully.
    pub palette: Palette,
    /// Errors and warnings collected along the way.
    pub report: GenerationReport,
}

/// Builds a palette from an ordered sequence of color configs.
///
/// For each config this generates the light-mode and dark-mode ramps from
/// the same base color and files the entry under its group. Group order is
/// the order of first appearance; entry order within a group matches the
/// input. Configs with an empty name or an out-of-range color component are
/// excluded and reported; duplicate `(group, name)` pairs are kept and
/// reported as warnings.
///
/// # Examples
///
/// ```
/// use huescale::models::{ColorConfig, HsbColor};
/// use huescale::palette::build_palette;
///
/// let base = HsbColor::opaque(211.0, 0.65, 0.95).unwrap();
/// let configs = vec![ColorConfig::new(base, "Primary").with_group("Brand")];
///
/// let build = build_palette(&configs);
/// assert!(build.report.is_clean());
/// assert_eq!(build.palette.group("Brand").unwrap().colors.len(), 1);
/// ```
#[must_use]
pub fn build_palette(configs: &[ColorConfig]) -> PaletteBuild {
    let mut report = GenerationReport::new();
    let mut groups: Vec<PaletteGroup> = Vec::new();
    let mut seen_names: HashSet<(String, String)> = HashSet::new();

    for config in configs {
        let group_name = effective_group(config);

        if config.color_name.is_empty() {
            report.add_error(
                GenerationError::new(
                    GenerationErrorKind::EmptyName,
                    "color has no name; a name is required at generation time",
                )
                .with_group(group_name),
            );
            continue;
        }

        if let Err(e) = config.color.validate() {
            report.add_error(
                GenerationError::new(GenerationErrorKind::InvalidComponent, e.to_string())
                    .with_group(group_name.clone())
                    .with_color_name(&config.color_name),
            );
            continue;
        }

        if !seen_names.insert((group_name.clone(), config.color_name.clone())) {
            report.add_warning(GenerationWarning::new(
                GenerationWarningKind::DuplicateName,
                format!(
                    "color name '{}' appears more than once in group '{}'",
                    config.color_name, group_name
                ),
            ));
        }

        let entry = PaletteEntry {
            name: config.color_name.clone(),
            light: generate_mode(config.color, config, Mode::Light),
            dark: generate_mode(config.color, config, Mode::Dark),
        };

        match groups.iter_mut().find(|g| g.name == group_name) {
            Some(group) => group.colors.push(entry),
            None => groups.push(PaletteGroup {
                name: group_name,
                colors: vec![entry],
            }),
        }
    }

    PaletteBuild {
        palette: Palette { groups },
        report,
    }
}

/// Appearance mode selector for ramp generation.
#[derive(Debug, Clone, Copy)]
enum Mode {
    Light,
    Dark,
}

fn generate_mode(base: HsbColor, config: &ColorConfig, mode: Mode) -> Ramp {
    let curve = match mode {
        Mode::Light => config.light_color_scale,
        Mode::Dark => config.dark_color_scale,
    };
    generate(base, curve, config.range_width)
}

fn effective_group(config: &ColorConfig) -> String {
    if config.group_name.is_empty() {
        DEFAULT_GROUP.to_string()
    } else {
        config.group_name.clone()
    }
}
