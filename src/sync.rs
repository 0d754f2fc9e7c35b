//! Mirror Sync
//!
//! One run: build the source tree, diff it against the mirror, remove what is
//! stale and create what is missing. There is no state between runs besides the
//! mirror itself, so an aborted run is repaired by simply running again.

use crate::error::MirrorError;
use crate::mirror::{Materializer, MirrorFs, Pruner, Scanner};
use crate::records::{MetadataRecord, RecordSource};
use crate::render::Renderer;
use crate::report::SyncReport;
use crate::tree::TreeBuilder;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Whether a run mutates the mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Apply,
    /// Compute removals and creations without touching the mirror
    DryRun,
}

pub struct MirrorSync<'a> {
    fs: &'a dyn MirrorFs,
    renderer: &'a dyn Renderer,
    source_dir: &'a Path,
}

impl<'a> MirrorSync<'a> {
    pub fn new(fs: &'a dyn MirrorFs, renderer: &'a dyn Renderer, source_dir: &'a Path) -> Self {
        Self {
            fs,
            renderer,
            source_dir,
        }
    }

    /// Load records from `source` and run against `mirror_root`.
    pub fn run_from_source(
        &self,
        source: &dyn RecordSource,
        mirror_root: &Path,
        mode: RunMode,
    ) -> Result<SyncReport, MirrorError> {
        let records = source.load()?;
        self.run(&records, mirror_root, mode)
    }

    pub fn run(
        &self,
        records: &[MetadataRecord],
        mirror_root: &Path,
        mode: RunMode,
    ) -> Result<SyncReport, MirrorError> {
        let started = Instant::now();

        if !self.fs.is_dir(mirror_root) {
            return Err(MirrorError::io(
                mirror_root,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "mirror root is not an existing directory",
                ),
            ));
        }

        let mut tree = TreeBuilder::build(records, mirror_root)?;
        info!(
            "Source tree: {} live nodes from {} records",
            tree.len(),
            records.len()
        );

        let stale = Scanner::new(self.fs).reconcile(&mut tree)?;
        let kept = tree.resolved_count();

        let created = match mode {
            RunMode::Apply => {
                Pruner::new(self.fs).prune(&stale)?;
                Materializer::new(self.fs, self.renderer, self.source_dir).materialize(&tree)?
            }
            RunMode::DryRun => Materializer::plan(&tree),
        };

        let report = SyncReport {
            dry_run: mode == RunMode::DryRun,
            records_loaded: records.len(),
            nodes: tree.len(),
            kept,
            removed: stale,
            created,
            duration_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            "Sync finished: {} kept, {} removed, {} created",
            report.kept,
            report.removed.len(),
            report.created.len()
        );
        Ok(report)
    }
}
