//! Sync report and its text/JSON rendering.

use crate::error::MirrorError;
use crate::mirror::{CreatedEntry, StaleEntry};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Outcome of one run, mutations listed in execution order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub dry_run: bool,
    pub records_loaded: usize,
    pub nodes: usize,
    /// Nodes whose mirror entry was confirmed and left alone
    pub kept: usize,
    pub removed: Vec<StaleEntry>,
    pub created: Vec<CreatedEntry>,
    pub duration_ms: u64,
}

impl SyncReport {
    /// True when the run left the mirror untouched
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty() && self.created.is_empty()
    }

    pub fn to_json(&self) -> Result<String, MirrorError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MirrorError::ConfigError(format!("Failed to serialize report: {}", e)))
    }

    pub fn format_text(&self) -> String {
        let mut out = String::new();
        let title = if self.dry_run {
            "Mirror sync (dry run)"
        } else {
            "Mirror sync"
        };
        out.push_str(&format!("{}\n\n", title.bold().underline()));
        out.push_str(&format!("  Records loaded: {}\n", self.records_loaded));
        out.push_str(&format!("  Live nodes: {}\n", self.nodes));
        out.push_str(&format!("  Kept: {}\n", self.kept));
        out.push_str(&format!("  Removed: {}\n", self.removed.len()));
        out.push_str(&format!("  Created: {}\n", self.created.len()));
        out.push_str(&format!("  Duration: {} ms\n\n", self.duration_ms));

        if self.is_noop() {
            out.push_str("Mirror is up to date.\n");
            return out;
        }

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Action", "Kind", "Path", "Reason"]);
        let (remove_label, create_label) = if self.dry_run {
            ("would remove", "would create")
        } else {
            ("removed", "created")
        };
        for entry in &self.removed {
            table.add_row(vec![
                remove_label.to_string(),
                entry.kind.to_string(),
                entry.path.display().to_string(),
                entry.reason.to_string(),
            ]);
        }
        for entry in &self.created {
            table.add_row(vec![
                create_label.to_string(),
                entry.kind.to_string(),
                entry.path.display().to_string(),
                "missing".to_string(),
            ]);
        }
        out.push_str(&format!("{}\n", table));
        out
    }
}
