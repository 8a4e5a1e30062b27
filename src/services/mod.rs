//! File I/O services built on top of the core models.

pub mod palette_file;

pub use palette_file::{LoadedPalette, PaletteFileService};
