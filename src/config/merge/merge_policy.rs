//! Built-in defaults every config build starts from.

use crate::config::render::{DEFAULT_RENDER_ARGS, DEFAULT_RENDER_PROGRAM};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder pre-seeded with defaults; later sources override them key by key.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("render.program", DEFAULT_RENDER_PROGRAM)?
        .set_default("render.args", DEFAULT_RENDER_ARGS.to_vec())
}
