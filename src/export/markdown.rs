//! Markdown swatch-sheet export.
//!
//! Generates a human-readable markdown document for a built palette: one
//! section per group, one table per color listing the hex value of every
//! ramp step in both appearance modes.

use crate::models::RgbColor;
use crate::palette::{Palette, PaletteEntry};
use std::fmt::Write as _;

/// Generates a markdown swatch sheet for a palette.
///
/// # Examples
///
/// ```
/// use huescale::models::sample_palette;
/// use huescale::palette::build_palette;
/// use huescale::export::generate_swatch_sheet;
///
/// let build = build_palette(&sample_palette());
/// let sheet = generate_swatch_sheet(&build.palette, "Sample");
/// assert!(sheet.contains("## Brand"));
/// ```
#[must_use]
pub fn generate_swatch_sheet(palette: &Palette, name: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {name}\n");

    if palette.is_empty() {
        output.push_str("_No colors generated._\n");
        return output;
    }

    for group in &palette.groups {
        let _ = writeln!(output, "## {}\n", group.name);

        for entry in &group.colors {
            write_color_table(&mut output, entry);
        }
    }

    output
}

fn write_color_table(output: &mut String, entry: &PaletteEntry) {
    let _ = writeln!(output, "### {}\n", entry.name);
    output.push_str("| Step | Light | Dark |\n");
    output.push_str("|-----:|-------|------|\n");

    // Both ramps share a width, so one row per step index
    for (index, light) in entry.light.iter() {
        let light_hex = RgbColor::from_hsb(light).to_hex();
        let dark_hex = entry
            .dark
            .step(index)
            .map_or_else(String::new, |c| RgbColor::from_hsb(c).to_hex());
        let _ = writeln!(output, "| {index} | `{light_hex}` | `{dark_hex}` |");
    }

    output.push('\n');
}
