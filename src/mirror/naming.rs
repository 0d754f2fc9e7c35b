//! Mirror entry names
//!
//! Identity of a mirror entry is carried by the UUID embedded in its name:
//! `<sanitized>_<uuid>` for containers and `<sanitized>_<uuid>.pdf` for documents.

use crate::sanitize::is_sanitized;
use crate::types::DOCUMENT_EXTENSION;

/// Length of the canonical 8-4-4-4-12 form
pub const UUID_LEN: usize = 36;

/// Classification of a directory entry name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryName<'a> {
    Container { sanitized: &'a str, id: &'a str },
    Document { sanitized: &'a str, id: &'a str },
    Unrecognized,
}

impl<'a> EntryName<'a> {
    pub fn id(&self) -> Option<&'a str> {
        match self {
            EntryName::Container { id, .. } | EntryName::Document { id, .. } => Some(id),
            EntryName::Unrecognized => None,
        }
    }

    pub fn sanitized(&self) -> Option<&'a str> {
        match self {
            EntryName::Container { sanitized, .. } | EntryName::Document { sanitized, .. } => {
                Some(sanitized)
            }
            EntryName::Unrecognized => None,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, EntryName::Document { .. })
    }
}

/// Whether `s` is a UUID in canonical lowercase hyphenated form.
pub fn is_canonical_uuid(s: &str) -> bool {
    if s.len() != UUID_LEN || s.bytes().any(|b| b.is_ascii_uppercase()) {
        return false;
    }
    match uuid::Uuid::try_parse(s) {
        Ok(parsed) => parsed.hyphenated().to_string() == s,
        Err(_) => false,
    }
}

/// Classify a mirror entry name.
///
/// A name ending in `.pdf` can only match the document pattern; any other name
/// can only match the container pattern.
pub fn parse_entry_name(name: &str) -> EntryName<'_> {
    let document_suffix = format!(".{}", DOCUMENT_EXTENSION);
    let (stem, is_document) = match name.strip_suffix(document_suffix.as_str()) {
        Some(stem) => (stem, true),
        None => (name, false),
    };

    let Some((sanitized, id)) = split_stem(stem) else {
        return EntryName::Unrecognized;
    };

    if is_document {
        EntryName::Document { sanitized, id }
    } else {
        EntryName::Container { sanitized, id }
    }
}

fn split_stem(stem: &str) -> Option<(&str, &str)> {
    if stem.len() < UUID_LEN + 1 || !stem.is_char_boundary(stem.len() - UUID_LEN) {
        return None;
    }
    let (head, id) = stem.split_at(stem.len() - UUID_LEN);
    let sanitized = head.strip_suffix('_')?;
    if !is_canonical_uuid(id) || !is_sanitized(sanitized) {
        return None;
    }
    Some((sanitized, id))
}
