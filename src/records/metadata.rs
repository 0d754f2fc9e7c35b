use crate::error::MirrorError;
use crate::records::{MetadataRecord, RecordSource};
use std::path::{Path, PathBuf};

/// File suffix of a metadata record
pub const METADATA_EXTENSION: &str = "metadata";

/// Directory of `<id>.metadata` JSON files, as synced from the device
pub struct MetadataDirectory {
    root: PathBuf,
}

impl MetadataDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the metadata file for `id`
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{}", id, METADATA_EXTENSION))
    }

    fn read_record(&self, id: &str, path: &Path) -> Result<MetadataRecord, MirrorError> {
        let content = std::fs::read_to_string(path).map_err(|e| MirrorError::io(path, e))?;
        let mut record: MetadataRecord =
            serde_json::from_str(&content).map_err(|e| MirrorError::MetadataParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        record.id = id.to_string();
        Ok(record)
    }
}

impl RecordSource for MetadataDirectory {
    fn load(&self) -> Result<Vec<MetadataRecord>, MirrorError> {
        let entries =
            std::fs::read_dir(&self.root).map_err(|e| MirrorError::SourceUnavailable {
                path: self.root.clone(),
                source: e,
            })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| MirrorError::SourceUnavailable {
                path: self.root.clone(),
                source: e,
            })?;

            let path = entry.path();
            if path.extension() != Some(std::ffi::OsStr::new(METADATA_EXTENSION)) {
                continue;
            }

            let id = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if !stem.is_empty() => stem.to_string(),
                _ => {
                    tracing::warn!("Skipping metadata file with unusable name: {:?}", path);
                    continue;
                }
            };

            let is_file = entry
                .file_type()
                .map_err(|e| MirrorError::io(&path, e))?
                .is_file();
            if !is_file {
                tracing::warn!("Skipping non-file metadata entry {}", path.display());
                continue;
            }

            ids.push((id, path));
        }
        ids.sort();

        let mut records = Vec::with_capacity(ids.len());
        for (id, path) in ids {
            records.push(self.read_record(&id, &path)?);
        }

        tracing::info!(
            "Loaded {} metadata records from {}",
            records.len(),
            self.root.display()
        );
        Ok(records)
    }
}
