//! Configuration
//!
//! Layered configuration for mirror runs: built-in defaults, the global config file,
//! an explicit `--config` file and `RM_MIRROR__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod render;
pub mod sources;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use render::RenderConfig;

/// Application name used for config and state directories
pub const APP_NAME: &str = "rm-mirror";

/// Environment prefix for config overrides (`RM_MIRROR__RENDER__PROGRAM`)
pub const ENV_PREFIX: &str = "RM_MIRROR";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MirrorConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub render: RenderConfig,
}
