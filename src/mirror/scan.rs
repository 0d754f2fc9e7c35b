//! Mirror Scanner
//!
//! Walks the existing mirror in lockstep with the source tree. Every recognized
//! entry is either confirmed (its path is recorded on the node) or classified as
//! stale. Confirmation is all-or-nothing: a renamed, moved or outdated entry is
//! never patched in place, it is removed and later recreated.

use crate::error::MirrorError;
use crate::mirror::fs::{DirEntryInfo, EntryKind, MirrorFs};
use crate::mirror::naming::{parse_entry_name, EntryName};
use crate::tree::SourceTree;
use crate::types::ROOT_ID;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Why an entry has to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleReason {
    /// Directory named like a document, file named like a container, or an entry
    /// whose pattern disagrees with its record type
    KindMismatch,
    /// No live record carries the embedded identifier
    Orphan,
    /// The record lives under a different parent now
    Misplaced,
    /// The record's sanitized name changed
    Renamed,
    /// Document modification time differs from the record
    Outdated,
}

impl std::fmt::Display for StaleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StaleReason::KindMismatch => "kind mismatch",
            StaleReason::Orphan => "orphan",
            StaleReason::Misplaced => "moved",
            StaleReason::Renamed => "renamed",
            StaleReason::Outdated => "outdated",
        };
        f.write_str(label)
    }
}

/// Mirror entry scheduled for removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaleEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub reason: StaleReason,
}

/// Diff engine between the mirror and the source tree
pub struct Scanner<'a> {
    fs: &'a dyn MirrorFs,
}

impl<'a> Scanner<'a> {
    pub fn new(fs: &'a dyn MirrorFs) -> Self {
        Self { fs }
    }

    /// Scan the whole mirror below the tree root.
    ///
    /// Confirmed entries get `resolved_path` set on their node. Returns the stale
    /// entries in discovery order; nothing is removed here.
    pub fn reconcile(&self, tree: &mut SourceTree) -> Result<Vec<StaleEntry>, MirrorError> {
        let mirror_root = tree.mirror_root().to_path_buf();
        let mut stale = Vec::new();
        self.reconcile_dir(&mirror_root, ROOT_ID, tree, &mut stale)?;
        debug!(
            "Scan complete: {} confirmed, {} stale",
            tree.resolved_count(),
            stale.len()
        );
        Ok(stale)
    }

    fn reconcile_dir(
        &self,
        current_path: &Path,
        current_id: &str,
        tree: &mut SourceTree,
        stale: &mut Vec<StaleEntry>,
    ) -> Result<(), MirrorError> {
        for entry in self.fs.list_dir(current_path)? {
            let parsed = parse_entry_name(&entry.name);
            let Some(id) = parsed.id() else {
                debug!("Leaving unmanaged entry {}", entry.path.display());
                continue;
            };

            match self.classify(&entry, &parsed, current_id, tree)? {
                Some(reason) => {
                    debug!("Stale entry {} ({})", entry.path.display(), reason);
                    stale.push(StaleEntry {
                        path: entry.path,
                        kind: entry.kind,
                        reason,
                    });
                }
                None => {
                    let id = id.to_string();
                    if let Some(node) = tree.get_mut(&id) {
                        node.resolved_path = Some(entry.path.clone());
                    }
                    if entry.kind == EntryKind::Directory {
                        self.reconcile_dir(&entry.path, &id, tree, stale)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// `None` when the entry is a valid, current copy of its node.
    fn classify(
        &self,
        entry: &DirEntryInfo,
        parsed: &EntryName<'_>,
        current_id: &str,
        tree: &SourceTree,
    ) -> Result<Option<StaleReason>, MirrorError> {
        let pattern_is_document = parsed.is_document();
        if pattern_is_document != (entry.kind == EntryKind::File) {
            return Ok(Some(StaleReason::KindMismatch));
        }

        let (Some(id), Some(sanitized)) = (parsed.id(), parsed.sanitized()) else {
            return Ok(None);
        };

        let Some(node) = tree.get(id) else {
            return Ok(Some(StaleReason::Orphan));
        };

        if node.is_document != pattern_is_document {
            return Ok(Some(StaleReason::KindMismatch));
        }

        let is_child = tree
            .get(current_id)
            .map(|current| current.children.contains(id))
            .unwrap_or(false);
        if !is_child || node.parent_id.as_deref() != Some(current_id) {
            return Ok(Some(StaleReason::Misplaced));
        }

        if sanitized != node.sanitized_name {
            return Ok(Some(StaleReason::Renamed));
        }

        if node.is_document {
            if let Some(expected) = node.last_modified_secs() {
                let actual = self.fs.modified_secs(&entry.path)?;
                if actual != expected {
                    return Ok(Some(StaleReason::Outdated));
                }
            }
        }

        Ok(None)
    }
}
