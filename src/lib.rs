//! Huescale Library
//!
//! This library provides the core functionality for the Huescale palette
//! generator: HSB color modeling, tonal ramp generation, palette assembly
//! with per-config diagnostics, and export to design-token JSON or markdown
//! swatch sheets.

// Module declarations
pub mod cli;
pub mod constants;
pub mod export;
pub mod models;
pub mod palette;
pub mod ramp;
pub mod services;
