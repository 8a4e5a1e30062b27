//! Data models for colors and ramp-generation configuration.
//!
//! This module contains the core value types used throughout the
//! application. Models are designed to be independent of CLI and export
//! logic.

pub mod color;
pub mod config;
pub mod rgb;

// Re-export all model types
pub use color::HsbColor;
pub use config::{sample_palette, ColorConfig, RangeWidth, ScaleCurve};
pub use rgb::RgbColor;
