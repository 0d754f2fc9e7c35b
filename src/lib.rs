//! rm-mirror: Notebook Metadata Mirroring
//!
//! Mirrors a reMarkable-style metadata tree of folders and documents onto a plain
//! filesystem of directories and rendered PDF files. Each run diffs the mirror
//! against the source records, removes stale entries and creates missing ones.

pub mod config;
pub mod error;
pub mod logging;
pub mod mirror;
pub mod records;
pub mod render;
pub mod report;
pub mod sanitize;
pub mod sync;
pub mod tooling;
pub mod tree;
pub mod types;
