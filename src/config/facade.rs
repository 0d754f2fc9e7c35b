//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::MirrorConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<MirrorConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration with a specific file on top.
    pub fn load_from_file(path: &Path) -> Result<MirrorConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> MirrorConfig {
        MirrorConfig::default()
    }
}
