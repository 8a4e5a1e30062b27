//! Tonal ramp generation.
//!
//! A ramp is the ordered sequence of colors derived from one base color for
//! one appearance mode. Generation is a pure function of the base color, the
//! scale curve, and the range width; calling it twice with equal inputs
//! yields equal ramps.
//!
//! Policy, fixed and pinned by tests:
//! - Ramps are one-directional. The anchor is step 0 and holds the base
//!   color bit-for-bit unchanged; later steps walk toward the curve's
//!   extreme (1.0 for lightening, 0.0 for darkening).
//! - The shaping function is linear: `t = i / (step_count - 1)`.
//! - Step brightness is `base.brightness ± t × width.extent()`, clamped to
//!   `[0, 1]`. Hue, saturation, and alpha are unchanged.
//! - Clamping may collapse adjacent steps into identical colors; the ramp
//!   stays weakly monotonic in the curve's direction.

use crate::models::{HsbColor, RangeWidth, ScaleCurve};
use serde::{Deserialize, Serialize};

/// Ordered sequence of colors derived from one base color for one
/// appearance mode.
///
/// The step index is the position in `steps`; length always equals
/// `width.step_count()` for the width the ramp was generated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    /// Derived colors, anchor first.
    pub steps: Vec<HsbColor>,
}

impl Ramp {
    /// Number of steps in the ramp.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the ramp has no steps. Never the case for generated
    /// ramps; present for container-API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The anchor step: the position required to equal the original base
    /// color unmodified.
    #[must_use]
    pub fn anchor(&self) -> Option<&HsbColor> {
        self.steps.first()
    }

    /// Step color at the given index.
    #[must_use]
    pub fn step(&self, index: usize) -> Option<&HsbColor> {
        self.steps.get(index)
    }

    /// Iterates over `(step index, color)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &HsbColor)> {
        self.steps.iter().enumerate()
    }
}

/// Generates the tonal ramp for one base color and one appearance mode.
///
/// # Examples
///
/// ```
/// use huescale::models::{HsbColor, RangeWidth, ScaleCurve};
/// use huescale::ramp::generate;
///
/// let base = HsbColor::opaque(210.0, 0.6, 0.5).unwrap();
/// let ramp = generate(base, ScaleCurve::Lightening, RangeWidth::Normal);
///
/// assert_eq!(ramp.len(), 9);
/// assert_eq!(ramp.anchor(), Some(&base));
/// ```
#[must_use]
pub fn generate(base: HsbColor, curve: ScaleCurve, width: RangeWidth) -> Ramp {
    let step_count = width.step_count();
    let extent = width.extent();

    let mut steps = Vec::with_capacity(step_count);

    // Anchor holds the base exactly, not a recomputed copy
    steps.push(base);

    for i in 1..step_count {
        let t = i as f32 / (step_count - 1) as f32;
        let color = match curve {
            ScaleCurve::Lightening => base.clamped_brightness(base.brightness + t * extent),
            ScaleCurve::Darkening => base.clamped_brightness(base.brightness - t * extent),
            ScaleCurve::None => base,
        };
        steps.push(color);
    }

    Ramp { steps }
}
