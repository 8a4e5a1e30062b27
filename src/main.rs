//! Huescale - tonal color ramp and design-token palette generator
//!
//! Turns a small definition file of named base colors into full tonal ramps
//! for light and dark appearance modes, exported as design tokens.

use clap::{Parser, Subcommand};
use huescale::cli::{GenerateArgs, SampleArgs};
use huescale::constants::APP_NAME;

/// Tonal color ramp and design-token palette generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate tonal ramps from a palette definition file
    Generate(GenerateArgs),
    /// Write the default sample palette definition file
    Sample(SampleArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Sample(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("{APP_NAME} error: {e}");
        std::process::exit(e.exit_code());
    }
}
