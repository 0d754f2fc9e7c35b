//! Core types shared by the tree, the mirror scanner and the materializer.

/// NodeId: Stable identifier assigned upstream (canonical lowercase UUID for records)
pub type NodeId = String;

/// Epoch milliseconds as written in metadata records
pub type EpochMillis = i64;

/// Identifier of the synthetic root node
pub const ROOT_ID: &str = "root";

/// Parent value marking a record as trashed
pub const TRASH_ID: &str = "trash";

/// Suffix of every rendered document in the mirror
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Convert record milliseconds to the whole-second resolution used on disk.
pub fn millis_to_secs(millis: EpochMillis) -> i64 {
    millis.div_euclid(1000)
}
