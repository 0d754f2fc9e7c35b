//! Mirror
//!
//! The on-disk side of a run: recognizing mirror entries by name, diffing them
//! against the source tree, removing stale entries and creating missing ones.

pub mod fs;
pub mod materialize;
pub mod naming;
pub mod prune;
pub mod scan;

pub use fs::{DirEntryInfo, EntryKind, LocalFs, MirrorFs};
pub use materialize::{CreatedEntry, Materializer};
pub use naming::{parse_entry_name, EntryName};
pub use prune::Pruner;
pub use scan::{Scanner, StaleEntry, StaleReason};
