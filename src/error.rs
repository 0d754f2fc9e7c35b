//! Error types for mirror runs.

use crate::types::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a single document
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to start renderer `{program}` for document {document_id}: {source}")]
    Spawn {
        program: String,
        document_id: NodeId,
        #[source]
        source: std::io::Error,
    },

    #[error("Renderer exited with {status} for document {document_id}: {stderr}")]
    Failed {
        document_id: NodeId,
        status: String,
        stderr: String,
    },

    #[error("Renderer produced no output for document {0}")]
    EmptyOutput(NodeId),
}

/// Top-level error for loading, scanning, pruning and materializing
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Record {id} references parent {parent} which is not a loaded record")]
    MissingRecord { id: NodeId, parent: NodeId },

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Malformed metadata in {}: {source}", path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Source directory {} is not readable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite existing entry {}", path.display())]
    CreateConflict { path: PathBuf },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl MirrorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MirrorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for MirrorError {
    fn from(err: config::ConfigError) -> Self {
        MirrorError::ConfigError(err.to_string())
    }
}
