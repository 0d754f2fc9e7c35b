//! Materializer
//!
//! Creates the mirror entries the scanner could not confirm. The work is laid out
//! as a pre-order plan first, so a container directory always precedes anything
//! created inside it, and the same plan doubles as the dry-run preview.

use crate::error::MirrorError;
use crate::mirror::fs::{EntryKind, MirrorFs};
use crate::render::Renderer;
use crate::tree::{Node, SourceTree};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Mirror entry created (or to be created) for a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEntry {
    pub id: NodeId,
    pub path: PathBuf,
    pub kind: EntryKind,
}

pub struct Materializer<'a> {
    fs: &'a dyn MirrorFs,
    renderer: &'a dyn Renderer,
    source_dir: &'a Path,
}

impl<'a> Materializer<'a> {
    pub fn new(fs: &'a dyn MirrorFs, renderer: &'a dyn Renderer, source_dir: &'a Path) -> Self {
        Self {
            fs,
            renderer,
            source_dir,
        }
    }

    /// Entries missing from the mirror, parents before children.
    ///
    /// Nodes with a resolved path are kept as they are; confirmed containers are
    /// still descended so their missing children get planned under the existing path.
    pub fn plan(tree: &SourceTree) -> Vec<CreatedEntry> {
        let mut planned = Vec::new();
        Self::plan_children(tree, tree.root(), tree.mirror_root(), &mut planned);
        planned
    }

    fn plan_children(tree: &SourceTree, node: &Node, node_path: &Path, planned: &mut Vec<CreatedEntry>) {
        for child in tree.children(&node.id) {
            let child_path = match &child.resolved_path {
                Some(existing) => existing.clone(),
                None => {
                    let target = child.entry_path(node_path);
                    planned.push(CreatedEntry {
                        id: child.id.clone(),
                        path: target.clone(),
                        kind: if child.is_document {
                            EntryKind::File
                        } else {
                            EntryKind::Directory
                        },
                    });
                    target
                }
            };
            if !child.is_document {
                Self::plan_children(tree, child, &child_path, planned);
            }
        }
    }

    /// Create every missing entry and stamp its timestamps. A render failure
    /// aborts before the document's file is created.
    pub fn materialize(&self, tree: &SourceTree) -> Result<Vec<CreatedEntry>, MirrorError> {
        let planned = Self::plan(tree);
        let now = chrono::Utc::now().timestamp();

        for entry in &planned {
            let Some(node) = tree.get(&entry.id) else {
                continue;
            };
            let modified = node.last_modified_secs().unwrap_or(now);

            match entry.kind {
                EntryKind::File => {
                    let bytes = self.renderer.render(self.source_dir, &node.id)?;
                    self.fs.write_new_file(&entry.path, &bytes)?;
                    self.fs.set_times(&entry.path, modified)?;
                    info!("Rendered {} -> {}", node.name, entry.path.display());
                }
                EntryKind::Directory => {
                    self.fs.create_dir(&entry.path)?;
                    self.fs.set_times(&entry.path, modified)?;
                    info!("Created {}", entry.path.display());
                }
            }
        }

        Ok(planned)
    }
}
