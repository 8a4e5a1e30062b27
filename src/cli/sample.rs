//! Sample command: write the default sample palette definition file.

use crate::cli::common::{CliError, CliResult};
use crate::models::sample_palette;
use crate::services::PaletteFileService;
use clap::Args;
use std::path::PathBuf;

/// Write the default sample palette definition (brand, semantic, and
/// neutral colors) as a starting point
#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    /// Output path for the definition file
    #[arg(short, long, value_name = "FILE", default_value = "palette.toml")]
    pub output: PathBuf,

    /// Overwrite the output file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl SampleArgs {
    /// Execute the sample command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::validation(format!(
                "{} already exists. Use --force to overwrite it.",
                self.output.display()
            )));
        }

        let configs = sample_palette();
        PaletteFileService::save(&configs, &self.output)
            .map_err(|e| CliError::io(format!("Failed to write sample palette: {e}")))?;

        println!(
            "Wrote sample palette with {} color(s) to: {}",
            configs.len(),
            self.output.display()
        );

        Ok(())
    }
}
