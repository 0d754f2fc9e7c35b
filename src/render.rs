//! Render collaborator
//!
//! Turns a document identifier into the bytes of its rendered file. The mirror
//! only ever asks for whole documents.

pub mod command;

use crate::error::RenderError;
use std::path::Path;

pub use command::CommandRenderer;

pub trait Renderer {
    /// Render `document_id`, whose source files live in `source_dir`.
    fn render(&self, source_dir: &Path, document_id: &str) -> Result<Vec<u8>, RenderError>;
}
