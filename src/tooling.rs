//! Tooling
//!
//! Command-line entry point for mirror runs.

pub mod cli;

pub use cli::{Cli, CliContext, OutputFormat};
