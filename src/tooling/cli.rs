//! CLI Tooling
//!
//! Argument parsing and the single mirror command. Config is loaded once into a
//! [`CliContext`]; logging flags are folded over the `[logging]` section before
//! the subscriber is installed.

use crate::config::{ConfigLoader, MirrorConfig};
use crate::error::MirrorError;
use crate::logging::LoggingConfig;
use crate::mirror::LocalFs;
use crate::records::metadata::MetadataDirectory;
use crate::render::CommandRenderer;
use crate::sync::{MirrorSync, RunMode};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

/// rm-mirror - Mirror notebook metadata onto a folder of PDFs
#[derive(Parser, Debug)]
#[command(name = "rm-mirror")]
#[command(version)]
#[command(about = "Mirror a notebook metadata directory as folders and rendered PDFs")]
pub struct Cli {
    /// Directory holding the `<id>.metadata` records
    pub source: PathBuf,

    /// Existing directory that receives the mirror
    pub destination: PathBuf,

    /// Report removals and creations without touching the mirror
    #[arg(long)]
    pub dry_run: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Logging config with CLI flags applied over `base`
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }

    pub fn run_mode(&self) -> RunMode {
        if self.dry_run {
            RunMode::DryRun
        } else {
            RunMode::Apply
        }
    }
}

/// Loaded configuration for one invocation
pub struct CliContext {
    config: MirrorConfig,
    config_path: Option<PathBuf>,
}

impl CliContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, MirrorError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self {
            config,
            config_path,
        })
    }

    /// Context over an already loaded config
    pub fn with_config(config: MirrorConfig) -> Self {
        Self {
            config,
            config_path: None,
        }
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Run the mirror command and return the formatted report
    pub fn execute(&self, cli: &Cli) -> Result<String, MirrorError> {
        if let Some(path) = &self.config_path {
            debug!("Using config file {}", path.display());
        }

        let source_dir = dunce::canonicalize(&cli.source)
            .map_err(|e| MirrorError::SourceUnavailable {
                path: cli.source.clone(),
                source: e,
            })?;
        let mirror_root =
            dunce::canonicalize(&cli.destination).map_err(|e| MirrorError::io(&cli.destination, e))?;

        info!(
            "Mirroring {} into {}",
            source_dir.display(),
            mirror_root.display()
        );

        let records = MetadataDirectory::new(&source_dir);
        let renderer = CommandRenderer::from_config(&self.config.render);
        let fs = LocalFs::new();
        let sync = MirrorSync::new(&fs, &renderer, &source_dir);
        let report = sync.run_from_source(&records, &mirror_root, cli.run_mode())?;

        match cli.format {
            OutputFormat::Text => Ok(report.format_text()),
            OutputFormat::Json => report.to_json(),
        }
    }
}
