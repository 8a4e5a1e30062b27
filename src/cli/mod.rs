//! CLI command handlers for Huescale.
//!
//! This module provides scriptable access to palette generation for
//! automation, design pipelines, and CI integration.

pub mod common;
pub mod generate;
pub mod sample;

pub use common::ExitCode;
pub use generate::GenerateArgs;
pub use sample::SampleArgs;
