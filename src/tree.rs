//! Source Tree
//!
//! In-memory tree of notebooks, folders and documents built from metadata records.
//! Nodes live in an arena keyed by identifier: parents own the set of child ids,
//! children refer back to their parent by id.

pub mod builder;
pub mod node;

pub use builder::TreeBuilder;
pub use node::{Node, SourceTree};
