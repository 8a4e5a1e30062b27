//! Device-independent HSB color value.
//!
//! `HsbColor` is the base representation every ramp is derived from. Hue is
//! stored in degrees and wraps modulo 360; saturation, brightness, and alpha
//! are unit-interval fractions and are validated, never silently wrapped.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Saturation factor applied by [`HsbColor::muted`].
pub const MUTED_SATURATION_SCALE: f32 = 0.65;

/// Brightness factor applied by [`HsbColor::muted`].
pub const MUTED_BRIGHTNESS_SCALE: f32 = 0.95;

/// Immutable color value in hue/saturation/brightness space.
///
/// Components:
/// - `hue`: degrees in `[0, 360)`, wrapped on construction
/// - `saturation`, `brightness`, `alpha`: fractions in `[0, 1]`
///
/// Equality is component-wise. All derivations return a new value; nothing
/// mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsbColor {
    /// Hue in degrees (0-360, exclusive upper bound)
    pub hue: f32,
    /// Saturation fraction (0-1)
    pub saturation: f32,
    /// Brightness fraction (0-1)
    pub brightness: f32,
    /// Alpha fraction (0-1)
    pub alpha: f32,
}

impl HsbColor {
    /// Creates a new `HsbColor` with validation.
    ///
    /// Hue is wrapped into `[0, 360)`. The remaining components must already
    /// be finite values in `[0, 1]`; anything else is a programmer error at
    /// the call site (interactive inputs are expected to pre-clamp).
    ///
    /// # Examples
    ///
    /// ```
    /// use huescale::models::HsbColor;
    ///
    /// let teal = HsbColor::new(180.0, 0.8, 0.6, 1.0).unwrap();
    /// assert_eq!(teal.hue, 180.0);
    ///
    /// // Hue wraps instead of failing
    /// let wrapped = HsbColor::new(540.0, 0.5, 0.5, 1.0).unwrap();
    /// assert_eq!(wrapped.hue, 180.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if saturation, brightness, or alpha is NaN or
    /// outside `[0, 1]`, or if hue is not finite.
    pub fn new(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Result<Self> {
        if !hue.is_finite() {
            anyhow::bail!("Invalid color component: hue must be finite, got {hue}");
        }

        validate_fraction("saturation", saturation)?;
        validate_fraction("brightness", brightness)?;
        validate_fraction("alpha", alpha)?;

        Ok(Self {
            hue: wrap_hue(hue),
            saturation,
            brightness,
            alpha,
        })
    }

    /// Creates a fully opaque color.
    ///
    /// # Errors
    ///
    /// Same contract as [`HsbColor::new`].
    pub fn opaque(hue: f32, saturation: f32, brightness: f32) -> Result<Self> {
        Self::new(hue, saturation, brightness, 1.0)
    }

    /// Returns a copy with the given brightness; hue, saturation, and alpha
    /// are unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `brightness` is NaN or outside `[0, 1]`.
    pub fn with_brightness(&self, brightness: f32) -> Result<Self> {
        validate_fraction("brightness", brightness)?;
        Ok(Self {
            brightness,
            ..*self
        })
    }

    /// Returns a copy with the given saturation; hue, brightness, and alpha
    /// are unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `saturation` is NaN or outside `[0, 1]`.
    pub fn with_saturation(&self, saturation: f32) -> Result<Self> {
        validate_fraction("saturation", saturation)?;
        Ok(Self {
            saturation,
            ..*self
        })
    }

    /// Returns a copy with brightness clamped into `[0, 1]`.
    ///
    /// Ramp generation computes raw brightness targets that may overshoot at
    /// the extremes; this is the clamping derivation it uses.
    #[must_use]
    pub fn clamped_brightness(&self, brightness: f32) -> Self {
        Self {
            brightness: brightness.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Returns the muted variant of this color.
    ///
    /// A fixed, deterministic reduction (saturation ×
    /// [`MUTED_SATURATION_SCALE`], brightness × [`MUTED_BRIGHTNESS_SCALE`])
    /// used to build default sample colors. Not part of the ramp generation
    /// contract.
    #[must_use]
    pub fn muted(&self) -> Self {
        Self {
            saturation: (self.saturation * MUTED_SATURATION_SCALE).clamp(0.0, 1.0),
            brightness: (self.brightness * MUTED_BRIGHTNESS_SCALE).clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Re-validates every component.
    ///
    /// Values built through [`HsbColor::new`] are always valid, but values
    /// deserialized from a palette definition file can carry arbitrary
    /// floats. The palette builder calls this before generating ramps.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first out-of-range component.
    pub fn validate(&self) -> Result<()> {
        if !self.hue.is_finite() || self.hue < 0.0 || self.hue >= 360.0 {
            anyhow::bail!(
                "Invalid color component: hue must be in [0, 360), got {}",
                self.hue
            );
        }

        validate_fraction("saturation", self.saturation)?;
        validate_fraction("brightness", self.brightness)?;
        validate_fraction("alpha", self.alpha)?;

        Ok(())
    }
}

/// Wraps a finite hue into `[0, 360)`.
fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can land exactly on 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Validates that a unit-interval component is finite and in `[0, 1]`.
fn validate_fraction(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        anyhow::bail!("Invalid color component: {name} must be in [0, 1], got {value}");
    }
    Ok(())
}

impl fmt::Display for HsbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsb({:.1}, {:.3}, {:.3}, {:.3})",
            self.hue, self.saturation, self.brightness, self.alpha
        )
    }
}
