//! Tree construction from metadata records

use crate::error::MirrorError;
use crate::mirror::naming::is_canonical_uuid;
use crate::records::MetadataRecord;
use crate::tree::node::{Node, SourceTree};
use crate::types::{NodeId, ROOT_ID};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Builds a [`SourceTree`] rooted at the mirror directory
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build the tree from `records`.
    ///
    /// Deleted and trashed records are dropped before anything else sees them.
    /// Records without a parent hang off the synthetic root. A parent reference to
    /// a record that was not loaded aborts the build, as does a parent chain that
    /// never reaches the root.
    pub fn build(records: &[MetadataRecord], mirror_root: &Path) -> Result<SourceTree, MirrorError> {
        let mut nodes: HashMap<NodeId, Node> = HashMap::with_capacity(records.len() + 1);

        for record in records {
            if record.is_trashed() {
                debug!("Skipping trashed record {} ({})", record.id, record.visible_name);
                continue;
            }
            if !is_canonical_uuid(&record.id) {
                return Err(MirrorError::InvalidRecord {
                    id: record.id.clone(),
                    reason: "identifier is not a canonical lowercase UUID".to_string(),
                });
            }
            let parent_id = record.parent_id().unwrap_or(ROOT_ID).to_string();
            let node = Node::new(
                record.id.clone(),
                record.visible_name.clone(),
                record.last_modified,
                record.is_document(),
                Some(parent_id),
            );
            if nodes.insert(record.id.clone(), node).is_some() {
                return Err(MirrorError::InvalidRecord {
                    id: record.id.clone(),
                    reason: "duplicate identifier".to_string(),
                });
            }
        }

        nodes.insert(ROOT_ID.to_string(), Node::root(mirror_root));

        let links: Vec<(NodeId, NodeId)> = nodes
            .values()
            .filter_map(|node| node.parent_id.clone().map(|parent| (node.id.clone(), parent)))
            .collect();

        for (child, parent) in links {
            match nodes.get_mut(&parent) {
                Some(parent_node) => {
                    parent_node.children.insert(child);
                }
                None => {
                    return Err(MirrorError::MissingRecord { id: child, parent });
                }
            }
        }

        let tree = SourceTree::from_nodes(nodes);
        Self::check_reachable(&tree)?;
        Ok(tree)
    }

    /// Every node must be reachable from the root; otherwise the parent links form a cycle.
    fn check_reachable(tree: &SourceTree) -> Result<(), MirrorError> {
        let mut reachable = std::collections::HashSet::new();
        let mut stack = vec![ROOT_ID];
        while let Some(id) = stack.pop() {
            reachable.insert(id);
            stack.extend(tree.children(id).map(|c| c.id.as_str()));
        }

        if reachable.len() == tree.len() + 1 {
            return Ok(());
        }

        let mut unreachable: Vec<&str> = tree
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| !reachable.contains(id))
            .collect();
        unreachable.sort_unstable();

        Err(MirrorError::InvalidRecord {
            id: unreachable.first().map(|s| s.to_string()).unwrap_or_default(),
            reason: "parent chain forms a cycle".to_string(),
        })
    }
}
