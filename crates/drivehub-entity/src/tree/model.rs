//! The reconstructed file tree.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::node::TreeNode;
use crate::remote::RemoteFileId;

/// A deduplicated, parent-linked set of remote files.
///
/// Nodes are keyed by remote id. Parent links always point at nodes of
/// the same tree and never form a cycle, so every walk up the tree ends
/// at a root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTree {
    /// All nodes keyed by id.
    nodes: BTreeMap<RemoteFileId, TreeNode>,
    /// Nodes whose parent link was dropped to break a cycle.
    broken_cycles: Vec<RemoteFileId>,
}

impl FileTree {
    /// Create an empty tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a tree from already-linked nodes.
    ///
    /// Callers must uphold the linking invariants; `TreeBuilder` is the
    /// intended producer.
    pub fn from_parts(
        nodes: BTreeMap<RemoteFileId, TreeNode>,
        broken_cycles: Vec<RemoteFileId>,
    ) -> Self {
        Self {
            nodes,
            broken_cycles,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.
    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.values()
    }

    /// Iterate ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &RemoteFileId> {
        self.nodes.keys()
    }

    /// Ids at which a parent cycle was cut.
    pub fn broken_cycles(&self) -> &[RemoteFileId] {
        &self.broken_cycles
    }

    /// Root nodes in display order.
    pub fn roots(&self) -> Vec<&TreeNode> {
        let mut roots: Vec<&TreeNode> = self.nodes.values().filter(|n| n.is_root()).collect();
        roots.sort_by(|a, b| display_order(a, b));
        roots
    }

    /// Direct children of `id` in display order.
    pub fn children_of(&self, id: &str) -> Vec<&TreeNode> {
        let mut children: Vec<&TreeNode> = self
            .nodes
            .values()
            .filter(|n| n.parent.as_ref().map(|p| p.as_str()) == Some(id))
            .collect();
        children.sort_by(|a, b| display_order(a, b));
        children
    }

    /// Ancestors of `id`, nearest first. Empty for roots and unknown ids.
    pub fn ancestors(&self, id: &str) -> Vec<&TreeNode> {
        let mut chain = Vec::new();
        let mut cursor = self.nodes.get(id).and_then(|n| n.parent.as_ref());
        while let Some(parent_id) = cursor {
            // Links form a forest, the bound only guards a hand-built tree.
            if chain.len() >= self.nodes.len() {
                break;
            }
            match self.nodes.get(parent_id) {
                Some(parent) => {
                    chain.push(parent);
                    cursor = parent.parent.as_ref();
                }
                None => break,
            }
        }
        chain
    }

    /// Distance from the root, `0` for roots.
    pub fn depth(&self, id: &str) -> Option<usize> {
        self.nodes.get(id).map(|_| self.ancestors(id).len())
    }

    /// Depth-first display order: `(depth, node)` pairs, folders before
    /// files, then by name.
    pub fn walk(&self) -> Vec<(usize, &TreeNode)> {
        let mut children: HashMap<&str, Vec<&TreeNode>> = HashMap::new();
        for node in self.nodes.values() {
            if let Some(parent) = &node.parent {
                children.entry(parent.as_str()).or_default().push(node);
            }
        }
        for list in children.values_mut() {
            list.sort_by(|a, b| display_order(a, b));
        }

        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, &TreeNode)> =
            self.roots().into_iter().rev().map(|n| (0, n)).collect();
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            if let Some(list) = children.get(node.id.as_str()) {
                stack.extend(list.iter().rev().map(|child| (depth + 1, *child)));
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a FileTree {
    type Item = &'a TreeNode;
    type IntoIter = std::collections::btree_map::Values<'a, RemoteFileId, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.values()
    }
}

fn display_order(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}
