//! Filesystem collaborator
//!
//! Every filesystem touch made by a run goes through [`MirrorFs`], so scanning
//! and pruning semantics (missing-path tolerance, create-new conflicts) live in
//! one place.

use crate::error::MirrorError;
use filetime::FileTime;
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// On-disk kind of a mirror entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "dir"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

pub trait MirrorFs {
    /// Entries directly under `path`, sorted by name. Names that are not valid
    /// UTF-8 are skipped; they can never be mirror entries.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>, MirrorError>;

    /// Whether `path` exists and is a directory (symlinks followed)
    fn is_dir(&self, path: &Path) -> bool;

    /// Modification time in whole seconds since the epoch
    fn modified_secs(&self, path: &Path) -> Result<i64, MirrorError>;

    /// Create a single directory; an existing entry is a [`MirrorError::CreateConflict`]
    fn create_dir(&self, path: &Path) -> Result<(), MirrorError>;

    /// Create a new file with `contents`; an existing entry is a [`MirrorError::CreateConflict`]
    fn write_new_file(&self, path: &Path, contents: &[u8]) -> Result<(), MirrorError>;

    /// Remove a file; a missing file is not an error
    fn remove_file(&self, path: &Path) -> Result<(), MirrorError>;

    /// Remove a directory tree; a missing directory is not an error
    fn remove_dir_all(&self, path: &Path) -> Result<(), MirrorError>;

    /// Set access time to now and modification time to `modified_secs`
    fn set_times(&self, path: &Path, modified_secs: i64) -> Result<(), MirrorError>;
}

/// [`MirrorFs`] over the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl MirrorFs for LocalFs {
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntryInfo>, MirrorError> {
        let mut entries = Vec::new();
        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::new(ErrorKind::Other, "walk failed"));
                    return Err(MirrorError::io(path, source));
                }
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", path.display(), err);
                    continue;
                }
            };

            let name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => {
                    tracing::debug!("Skipping non UTF8 entry name: {:?}", entry.path());
                    continue;
                }
            };

            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            entries.push(DirEntryInfo {
                name,
                path: entry.into_path(),
                kind,
            });
        }

        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn modified_secs(&self, path: &Path) -> Result<i64, MirrorError> {
        let metadata = std::fs::metadata(path).map_err(|e| MirrorError::io(path, e))?;
        Ok(FileTime::from_last_modification_time(&metadata).unix_seconds())
    }

    fn create_dir(&self, path: &Path) -> Result<(), MirrorError> {
        std::fs::create_dir(path).map_err(|e| create_error(path, e))
    }

    fn write_new_file(&self, path: &Path, contents: &[u8]) -> Result<(), MirrorError> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| create_error(path, e))?;
        file.write_all(contents)
            .and_then(|_| file.flush())
            .map_err(|e| MirrorError::io(path, e))
    }

    fn remove_file(&self, path: &Path) -> Result<(), MirrorError> {
        match std::fs::remove_file(path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(MirrorError::io(path, e)),
            _ => Ok(()),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), MirrorError> {
        match std::fs::remove_dir_all(path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(MirrorError::io(path, e)),
            _ => Ok(()),
        }
    }

    fn set_times(&self, path: &Path, modified_secs: i64) -> Result<(), MirrorError> {
        filetime::set_file_times(
            path,
            FileTime::now(),
            FileTime::from_unix_time(modified_secs, 0),
        )
        .map_err(|e| MirrorError::io(path, e))
    }
}

fn create_error(path: &Path, err: std::io::Error) -> MirrorError {
    if err.kind() == ErrorKind::AlreadyExists {
        MirrorError::CreateConflict {
            path: path.to_path_buf(),
        }
    } else {
        MirrorError::io(path, err)
    }
}
