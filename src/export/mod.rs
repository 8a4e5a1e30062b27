//! Export functionality for built palettes.
//!
//! This module serializes a [`crate::palette::Palette`] into consumable
//! formats: design-token JSON for tooling and a markdown swatch sheet for
//! people.

pub mod markdown;
pub mod tokens;

pub use markdown::generate_swatch_sheet;
pub use tokens::export_tokens;
