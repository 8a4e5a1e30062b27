//! Palette assembly and per-config diagnostics.

pub mod builder;
pub mod report;

pub use builder::{build_palette, Palette, PaletteBuild, PaletteEntry, PaletteGroup, DEFAULT_GROUP};
pub use report::{
    GenerationError, GenerationErrorKind, GenerationReport, GenerationWarning,
    GenerationWarningKind,
};
