//! Color configuration: the user-authored description of one named base
//! color plus its ramp-generation parameters.

use crate::models::HsbColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Direction and shaping policy used when walking away from the base color
/// toward a ramp's extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleCurve {
    /// Brightness walks from the base toward 1.0.
    #[default]
    Lightening,
    /// Brightness walks from the base toward 0.0.
    Darkening,
    /// Degenerate ramp: every step is an identical copy of the base.
    None,
}

impl ScaleCurve {
    /// All curve names accepted in palette definition files.
    pub const NAMES: [&'static str; 3] = ["lightening", "darkening", "none"];
}

impl fmt::Display for ScaleCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lightening => write!(f, "lightening"),
            Self::Darkening => write!(f, "darkening"),
            Self::None => write!(f, "none"),
        }
    }
}

impl FromStr for ScaleCurve {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lightening" => Ok(Self::Lightening),
            "darkening" => Ok(Self::Darkening),
            "none" => Ok(Self::None),
            other => anyhow::bail!(
                "Unknown scale curve '{}'. Expected one of: {}",
                other,
                Self::NAMES.join(", ")
            ),
        }
    }
}

/// How far a ramp's extreme steps deviate from the base color's brightness,
/// and how many steps the ramp has.
///
/// The step-count and extent values are a fixed policy table, pinned by
/// tests so they can be retuned deliberately rather than drifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RangeWidth {
    /// 5 steps, brightness excursion up to 0.25.
    Narrow,
    /// 9 steps, brightness excursion up to 0.40.
    #[default]
    Normal,
    /// 13 steps, brightness excursion up to 0.50.
    Wide,
}

impl RangeWidth {
    /// All width names accepted in palette definition files.
    pub const NAMES: [&'static str; 3] = ["narrow", "normal", "wide"];

    /// Number of steps in a ramp generated at this width.
    #[must_use]
    pub const fn step_count(self) -> usize {
        match self {
            Self::Narrow => 5,
            Self::Normal => 9,
            Self::Wide => 13,
        }
    }

    /// Maximum absolute brightness excursion from the base color, reached at
    /// the ramp's final step (before clamping to `[0, 1]`).
    #[must_use]
    pub const fn extent(self) -> f32 {
        match self {
            Self::Narrow => 0.25,
            Self::Normal => 0.40,
            Self::Wide => 0.50,
        }
    }
}

impl fmt::Display for RangeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Narrow => write!(f, "narrow"),
            Self::Normal => write!(f, "normal"),
            Self::Wide => write!(f, "wide"),
        }
    }
}

impl FromStr for RangeWidth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "narrow" => Ok(Self::Narrow),
            "normal" => Ok(Self::Normal),
            "wide" => Ok(Self::Wide),
            other => anyhow::bail!(
                "Unknown range width '{}'. Expected one of: {}",
                other,
                Self::NAMES.join(", ")
            ),
        }
    }
}

/// One named base color plus its ramp-generation parameters.
///
/// The `id` is the config's identity and stays stable across edits: renaming
/// a color or picking a new base value never changes it. `color_name` is the
/// export key; it may be empty while a config is being edited, but the
/// palette builder rejects empty names at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Stable identity, assigned at creation.
    pub id: Uuid,
    /// Base color every ramp step is derived from.
    pub color: HsbColor,
    /// Group this color belongs to (e.g. "Brand"); empty means ungrouped.
    #[serde(default)]
    pub group_name: String,
    /// Export key within the group (e.g. "Primary").
    pub color_name: String,
    /// Curve used for the light appearance mode.
    #[serde(default)]
    pub light_color_scale: ScaleCurve,
    /// Curve used for the dark appearance mode.
    #[serde(default = "default_dark_scale")]
    pub dark_color_scale: ScaleCurve,
    /// Ramp width shared by both modes.
    #[serde(default)]
    pub range_width: RangeWidth,
}

fn default_dark_scale() -> ScaleCurve {
    ScaleCurve::Darkening
}

impl ColorConfig {
    /// Creates a config with a fresh identity and default generation
    /// parameters (light: lightening, dark: darkening, width: normal).
    #[must_use]
    pub fn new(color: HsbColor, color_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            group_name: String::new(),
            color_name: color_name.into(),
            light_color_scale: ScaleCurve::default(),
            dark_color_scale: default_dark_scale(),
            range_width: RangeWidth::default(),
        }
    }

    /// Sets the group name.
    #[must_use]
    pub fn with_group(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self
    }

    /// Sets the light-mode curve.
    #[must_use]
    pub const fn with_light_scale(mut self, curve: ScaleCurve) -> Self {
        self.light_color_scale = curve;
        self
    }

    /// Sets the dark-mode curve.
    #[must_use]
    pub const fn with_dark_scale(mut self, curve: ScaleCurve) -> Self {
        self.dark_color_scale = curve;
        self
    }

    /// Sets the ramp width.
    #[must_use]
    pub const fn with_width(mut self, width: RangeWidth) -> Self {
        self.range_width = width;
        self
    }
}

/// Returns the default sample palette: brand, semantic, and neutral colors
/// with muted bases, the starting set offered when no palette exists yet.
#[must_use]
pub fn sample_palette() -> Vec<ColorConfig> {
    let blue = HsbColor {
        hue: 211.0,
        saturation: 1.0,
        brightness: 1.0,
        alpha: 1.0,
    };
    let purple = HsbColor {
        hue: 268.0,
        saturation: 0.63,
        brightness: 0.87,
        alpha: 1.0,
    };
    let orange = HsbColor {
        hue: 35.0,
        saturation: 1.0,
        brightness: 1.0,
        alpha: 1.0,
    };
    let mint = HsbColor {
        hue: 177.0,
        saturation: 1.0,
        brightness: 0.78,
        alpha: 1.0,
    };
    let yellow = HsbColor {
        hue: 48.0,
        saturation: 1.0,
        brightness: 1.0,
        alpha: 1.0,
    };
    let red = HsbColor {
        hue: 3.0,
        saturation: 0.81,
        brightness: 1.0,
        alpha: 1.0,
    };
    let light_gray = HsbColor {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.9,
        alpha: 1.0,
    };
    let near_black = HsbColor {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.25,
        alpha: 1.0,
    };

    vec![
        ColorConfig::new(blue.muted(), "Primary").with_group("Brand"),
        ColorConfig::new(purple.muted(), "Secondary").with_group("Brand"),
        ColorConfig::new(orange.muted(), "Tertiary").with_group("Brand"),
        ColorConfig::new(mint.muted(), "Success").with_group("Semantic"),
        ColorConfig::new(yellow.muted(), "Warning").with_group("Semantic"),
        ColorConfig::new(red.muted(), "Error").with_group("Semantic"),
        ColorConfig::new(light_gray, "Background")
            .with_group("Neutral")
            .with_light_scale(ScaleCurve::Lightening)
            .with_width(RangeWidth::Wide),
        ColorConfig::new(near_black, "Foreground")
            .with_group("Neutral")
            .with_light_scale(ScaleCurve::Lightening)
            .with_dark_scale(ScaleCurve::Darkening),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_curve_round_trip_names() {
        for name in ScaleCurve::NAMES {
            let curve: ScaleCurve = name.parse().unwrap();
            assert_eq!(curve.to_string(), name);
        }
    }

    #[test]
    fn test_scale_curve_rejects_unknown() {
        assert!("brightening".parse::<ScaleCurve>().is_err());
        assert!("Lightening".parse::<ScaleCurve>().is_err()); // case-sensitive
        assert!("".parse::<ScaleCurve>().is_err());
    }

    #[test]
    fn test_range_width_round_trip_names() {
        for name in RangeWidth::NAMES {
            let width: RangeWidth = name.parse().unwrap();
            assert_eq!(width.to_string(), name);
        }
    }

    #[test]
    fn test_range_width_rejects_unknown() {
        assert!("extra-wide".parse::<RangeWidth>().is_err());
    }

    #[test]
    fn test_width_policy_table() {
        // Pinned policy constants; retune deliberately, with these tests
        assert_eq!(RangeWidth::Narrow.step_count(), 5);
        assert_eq!(RangeWidth::Normal.step_count(), 9);
        assert_eq!(RangeWidth::Wide.step_count(), 13);

        assert_eq!(RangeWidth::Narrow.extent(), 0.25);
        assert_eq!(RangeWidth::Normal.extent(), 0.40);
        assert_eq!(RangeWidth::Wide.extent(), 0.50);
    }

    #[test]
    fn test_config_defaults() {
        let color = HsbColor::opaque(210.0, 0.6, 0.5).unwrap();
        let config = ColorConfig::new(color, "Primary");

        assert_eq!(config.color_name, "Primary");
        assert_eq!(config.group_name, "");
        assert_eq!(config.light_color_scale, ScaleCurve::Lightening);
        assert_eq!(config.dark_color_scale, ScaleCurve::Darkening);
        assert_eq!(config.range_width, RangeWidth::Normal);
    }

    #[test]
    fn test_config_id_stable_across_edits() {
        let color = HsbColor::opaque(210.0, 0.6, 0.5).unwrap();
        let config = ColorConfig::new(color, "Primary");
        let id = config.id;

        let mut edited = config;
        edited.color_name = "Renamed".to_string();
        edited.color = HsbColor::opaque(30.0, 0.4, 0.8).unwrap();

        assert_eq!(edited.id, id);
    }

    #[test]
    fn test_config_ids_are_unique() {
        let color = HsbColor::opaque(210.0, 0.6, 0.5).unwrap();
        let a = ColorConfig::new(color, "A");
        let b = ColorConfig::new(color, "B");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_config_serde_defaults() {
        // Minimal JSON: only identity, color, and name
        let json = r#"{
            "id": "7f7b8c2a-4c1d-4d9e-8a2b-1f2e3d4c5b6a",
            "color": {"hue": 210.0, "saturation": 0.6, "brightness": 0.5, "alpha": 1.0},
            "color_name": "Primary"
        }"#;
        let config: ColorConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.group_name, "");
        assert_eq!(config.light_color_scale, ScaleCurve::Lightening);
        assert_eq!(config.dark_color_scale, ScaleCurve::Darkening);
        assert_eq!(config.range_width, RangeWidth::Normal);
    }

    #[test]
    fn test_sample_palette_shape() {
        let sample = sample_palette();
        assert_eq!(sample.len(), 8);

        // Every sample color is valid and named
        for config in &sample {
            assert!(config.color.validate().is_ok());
            assert!(!config.color_name.is_empty());
            assert!(!config.group_name.is_empty());
        }

        // Background keeps its wide ramp from the original defaults
        let background = sample
            .iter()
            .find(|c| c.color_name == "Background")
            .unwrap();
        assert_eq!(background.range_width, RangeWidth::Wide);
        assert_eq!(background.light_color_scale, ScaleCurve::Lightening);
    }
}
