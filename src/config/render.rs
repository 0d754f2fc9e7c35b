//! RenderConfig: external renderer invocation.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RENDER_PROGRAM: &str = "rmrl";
pub const DEFAULT_RENDER_ARGS: [&str; 1] = ["{metadata}"];

fn default_program() -> String {
    DEFAULT_RENDER_PROGRAM.to_string()
}

fn default_args() -> Vec<String> {
    DEFAULT_RENDER_ARGS.iter().map(|s| s.to_string()).collect()
}

/// Renderer configuration
///
/// The program must write the rendered PDF to stdout. Arguments may contain
/// `{metadata}`, `{id}` and `{source}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}
