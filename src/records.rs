//! Metadata Records
//!
//! Source items as read from the metadata store, and the contract for loading them.

pub mod metadata;

use crate::error::MirrorError;
use crate::types::{EpochMillis, NodeId, TRASH_ID};
use serde::{Deserialize, Deserializer, Serialize};

pub use metadata::MetadataDirectory;

/// Record type value that marks a document leaf
pub const DOCUMENT_TYPE: &str = "DocumentType";

/// One source item: a document or a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// Identifier; not part of the JSON body, filled in from the file name
    #[serde(skip)]
    pub id: NodeId,
    pub visible_name: String,
    #[serde(default, deserialize_with = "deserialize_epoch_millis")]
    pub last_modified: Option<EpochMillis>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub deleted: bool,
}

impl MetadataRecord {
    pub fn is_document(&self) -> bool {
        self.record_type == DOCUMENT_TYPE
    }

    /// Deleted, or parked in the trash
    pub fn is_trashed(&self) -> bool {
        self.deleted || self.parent.as_deref() == Some(TRASH_ID)
    }

    /// Parent identifier, or `None` when the record hangs off the root
    pub fn parent_id(&self) -> Option<&str> {
        match self.parent.as_deref() {
            None | Some("") => None,
            Some(parent) => Some(parent),
        }
    }
}

/// Source of metadata records
pub trait RecordSource {
    fn load(&self) -> Result<Vec<MetadataRecord>, MirrorError>;
}

impl RecordSource for Vec<MetadataRecord> {
    fn load(&self) -> Result<Vec<MetadataRecord>, MirrorError> {
        Ok(self.clone())
    }
}

/// `lastModified` is written as a decimal string by the device but as a number
/// by some exporters; accept both.
fn deserialize_epoch_millis<'de, D>(deserializer: D) -> Result<Option<EpochMillis>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(v)) => Ok(Some(v)),
        Some(Raw::Float(v)) => Ok(Some(v as i64)),
        Some(Raw::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid lastModified {:?}: {}", s, e)))
        }
    }
}
