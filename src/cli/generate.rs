//! Generate command: build a palette from a definition file and export it.

use crate::cli::common::{CliError, CliResult};
use crate::export;
use crate::palette::{build_palette, GenerationReport};
use crate::services::PaletteFileService;
use clap::{Args, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

/// Export format for the generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Design-token JSON document
    Json,
    /// Markdown swatch sheet
    Markdown,
}

impl OutputFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Generate tonal ramps from a palette definition file
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to palette definition TOML file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output path (defaults to [input_stem]_tokens_[date].[ext])
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Fail (exit non-zero) if any color was excluded from the palette
    #[arg(long)]
    pub strict: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let loaded = PaletteFileService::load(&self.input)
            .map_err(|e| CliError::io(format!("Failed to load palette definition: {e}")))?;

        let build = build_palette(&loaded.configs);

        // File-level entry failures and build failures go into one report
        let mut report = GenerationReport::new();
        for error in loaded.errors {
            report.add_error(error);
        }
        for error in build.report.errors {
            report.add_error(error);
        }
        for warning in build.report.warnings {
            report.add_warning(warning);
        }

        let message = report.format_message();
        if !message.is_empty() {
            eprint!("{message}");
        }

        let name = palette_name(&self.input);
        let content = match self.format {
            OutputFormat::Json => export::export_tokens(&build.palette, &name)
                .map_err(|e| CliError::io(format!("Failed to serialize tokens: {e}")))?,
            OutputFormat::Markdown => export::generate_swatch_sheet(&build.palette, &name),
        };

        let output_path = self.output_path(&name);
        fs::write(&output_path, content)
            .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

        println!(
            "Generated {} color(s) in {} group(s)",
            build.palette.color_count(),
            build.palette.groups.len()
        );
        println!("Exported palette to: {}", output_path.display());

        if self.strict && !report.is_clean() {
            return Err(CliError::validation(format!(
                "{} color(s) failed to generate (strict mode)",
                report.errors.len()
            )));
        }

        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn output_path(&self, name: &str) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        // Auto-generate filename: [input_stem]_tokens_[date].[ext]
        let date = chrono::Local::now().format("%Y-%m-%d");
        let stem = name.replace(' ', "_").to_lowercase();

        PathBuf::from(format!(
            "{}_tokens_{}.{}",
            stem,
            date,
            self.format.extension()
        ))
    }
}

fn palette_name(input: &Path) -> String {
    input
        .file_stem()
        .map_or_else(|| "palette".to_string(), |s| s.to_string_lossy().into_owned())
}
