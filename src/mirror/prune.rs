//! Removal of stale mirror entries

use crate::error::MirrorError;
use crate::mirror::fs::{EntryKind, MirrorFs};
use crate::mirror::scan::StaleEntry;
use tracing::info;

pub struct Pruner<'a> {
    fs: &'a dyn MirrorFs,
}

impl<'a> Pruner<'a> {
    pub fn new(fs: &'a dyn MirrorFs) -> Self {
        Self { fs }
    }

    /// Remove every entry in `stale`, in order. Entries already gone are skipped
    /// silently, so pruning the same list twice is a no-op.
    pub fn prune(&self, stale: &[StaleEntry]) -> Result<(), MirrorError> {
        for entry in stale {
            match entry.kind {
                EntryKind::File => self.fs.remove_file(&entry.path)?,
                EntryKind::Directory => self.fs.remove_dir_all(&entry.path)?,
            }
            info!("Removed {} ({})", entry.path.display(), entry.reason);
        }
        Ok(())
    }
}
