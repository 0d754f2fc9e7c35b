//! Renderer backed by an external program that writes the PDF to stdout.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::records::metadata::METADATA_EXTENSION;
use crate::render::Renderer;
use std::path::Path;
use std::process::{Command, Stdio};

pub struct CommandRenderer {
    program: String,
    args: Vec<String>,
}

impl CommandRenderer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Substitute per-document placeholders:
    /// - {metadata} - path of `<source>/<id>.metadata`
    /// - {id} - document identifier
    /// - {source} - source directory
    fn expand_args(&self, source_dir: &Path, document_id: &str) -> Vec<String> {
        let metadata = source_dir.join(format!("{}.{}", document_id, METADATA_EXTENSION));
        let metadata = metadata.to_string_lossy();
        let source = source_dir.to_string_lossy();

        self.args
            .iter()
            .map(|arg| {
                arg.replace("{metadata}", &metadata)
                    .replace("{id}", document_id)
                    .replace("{source}", &source)
            })
            .collect()
    }
}

impl Renderer for CommandRenderer {
    fn render(&self, source_dir: &Path, document_id: &str) -> Result<Vec<u8>, RenderError> {
        let args = self.expand_args(source_dir, document_id);
        tracing::debug!("Rendering {} via {} {:?}", document_id, self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RenderError::Spawn {
                program: self.program.clone(),
                document_id: document_id.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                document_id: document_id.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if output.stdout.is_empty() {
            return Err(RenderError::EmptyOutput(document_id.to_string()));
        }

        Ok(output.stdout)
    }
}
