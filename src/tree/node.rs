//! Source node types and the node table

use crate::sanitize::sanitize;
use crate::types::{millis_to_secs, EpochMillis, NodeId, DOCUMENT_EXTENSION, ROOT_ID};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Source tree element: a document leaf or a container
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub sanitized_name: String,
    pub last_modified: Option<EpochMillis>,
    pub is_document: bool,
    /// `None` only for the synthetic root; root-level records point at `ROOT_ID`
    pub parent_id: Option<NodeId>,
    pub children: BTreeSet<NodeId>,
    /// Mirror path confirmed by the scanner; never set by the materializer
    pub resolved_path: Option<PathBuf>,
}

impl Node {
    pub fn new(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        last_modified: Option<EpochMillis>,
        is_document: bool,
        parent_id: Option<NodeId>,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            sanitized_name: sanitize(&name),
            name,
            last_modified,
            is_document,
            parent_id,
            children: BTreeSet::new(),
            resolved_path: None,
        }
    }

    /// Synthetic root anchored at the mirror directory
    pub fn root(mirror_root: impl Into<PathBuf>) -> Self {
        let mut root = Self::new(ROOT_ID, ROOT_ID, None, false, None);
        root.resolved_path = Some(mirror_root.into());
        root
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Last-modified time at on-disk (whole second) resolution
    pub fn last_modified_secs(&self) -> Option<i64> {
        self.last_modified.map(millis_to_secs)
    }

    /// Name of this node's entry inside its parent's mirror directory
    pub fn entry_name(&self) -> String {
        if self.is_document {
            format!("{}_{}.{}", self.sanitized_name, self.id, DOCUMENT_EXTENSION)
        } else {
            format!("{}_{}", self.sanitized_name, self.id)
        }
    }

    /// Target path of this node's entry below `parent_path`
    pub fn entry_path(&self, parent_path: &Path) -> PathBuf {
        parent_path.join(self.entry_name())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Node table: every live record plus the synthetic root
#[derive(Debug, Clone)]
pub struct SourceTree {
    nodes: HashMap<NodeId, Node>,
}

impl SourceTree {
    pub(crate) fn from_nodes(nodes: HashMap<NodeId, Node>) -> Self {
        Self { nodes }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT_ID]
    }

    pub fn mirror_root(&self) -> &Path {
        self.root()
            .resolved_path
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Children of `id` in identifier order
    pub fn children<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(move |child| self.nodes.get(child))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of record nodes, excluding the root
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record nodes already matched to a mirror entry
    pub fn resolved_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|n| !n.is_root() && n.resolved_path.is_some())
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|n| !n.is_root())
    }
}
