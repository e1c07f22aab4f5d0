//! Reconstructs a parent-linked tree from a flat remote listing.
//!
//! The listing arrives in arbitrary order: a record may name a parent that
//! comes later, a parent that is not in the listing at all, or (on bad
//! data) a parent chain that loops back on itself. The builder walks each
//! unseen record's primary-parent chain iteratively, materializing every
//! ancestor that exists in the listing, so each id is represented exactly
//! once and every parent link points at a node of the same tree.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use drivehub_core::config::CyclePolicy;
use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;
use drivehub_entity::remote::{RemoteFileId, RemoteFileRecord};
use drivehub_entity::tree::{FileTree, TreeNode};

/// How an ancestor walk stopped.
enum ChainEnd<'a> {
    /// The last record has no parent, or its parent is not in the listing.
    Root,
    /// The last record's parent was materialized by an earlier walk.
    Anchored(&'a RemoteFileId),
    /// The last record's parent is already on the chain at this position.
    Cycle(usize),
}

/// Builds a [`FileTree`] from remote file records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    policy: CyclePolicy,
}

impl TreeBuilder {
    /// Create a builder with the given cycle policy.
    pub fn new(policy: CyclePolicy) -> Self {
        Self { policy }
    }

    /// Build with the configured policy.
    ///
    /// Only [`CyclePolicy::Reject`] can fail.
    pub fn run(&self, records: &[RemoteFileRecord]) -> AppResult<FileTree> {
        let resolved = resolve(records);
        match (self.policy, resolved.first_cycle) {
            (CyclePolicy::Reject, Some(members)) => Err(AppError::cycle_detected(members)),
            _ => Ok(resolved.tree),
        }
    }

    /// Build a tree, cutting any parent cycle at the first node the walk
    /// reaches twice. Never fails.
    pub fn build(records: &[RemoteFileRecord]) -> FileTree {
        resolve(records).tree
    }

    /// Build a tree, failing with `CycleDetected` if parent references
    /// loop.
    pub fn build_strict(records: &[RemoteFileRecord]) -> AppResult<FileTree> {
        Self::new(CyclePolicy::Reject).run(records)
    }
}

/// Outcome of a single resolution pass.
struct Resolved {
    /// The tree with every cycle cut.
    tree: FileTree,
    /// Members of the first cycle met, in walk order, with the first
    /// member repeated at the end.
    first_cycle: Option<Vec<RemoteFileId>>,
}

fn resolve(records: &[RemoteFileRecord]) -> Resolved {
    // First occurrence wins.
    let mut index: HashMap<&str, &RemoteFileRecord> = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(record.id.as_str()).or_insert(record);
    }

    let mut nodes: BTreeMap<RemoteFileId, TreeNode> = BTreeMap::new();
    let mut broken_cycles = Vec::new();
    let mut first_cycle = None;
    let mut missing_parents = 0usize;

    let mut chain: Vec<&RemoteFileRecord> = Vec::new();
    let mut on_chain: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if nodes.contains_key(record.id.as_str()) {
            continue;
        }

        chain.clear();
        on_chain.clear();
        chain.push(record);
        on_chain.insert(record.id.as_str(), 0);

        let end = loop {
            let cursor = chain[chain.len() - 1];
            let Some(parent_id) = cursor.primary_parent() else {
                break ChainEnd::Root;
            };
            if nodes.contains_key(parent_id.as_str()) {
                break ChainEnd::Anchored(parent_id);
            }
            if let Some(&pos) = on_chain.get(parent_id.as_str()) {
                break ChainEnd::Cycle(pos);
            }
            match index.get(parent_id.as_str()) {
                Some(parent) => {
                    on_chain.insert(parent.id.as_str(), chain.len());
                    chain.push(parent);
                }
                None => {
                    missing_parents += 1;
                    break ChainEnd::Root;
                }
            }
        };

        if let ChainEnd::Cycle(pos) = end {
            warn!(
                node = %chain[pos].id,
                cycle_len = chain.len() - pos,
                "Parent references form a cycle, leaving node without a parent"
            );
            broken_cycles.push(chain[pos].id.clone());
            if first_cycle.is_none() {
                let mut members: Vec<RemoteFileId> =
                    chain[pos..].iter().map(|r| r.id.clone()).collect();
                members.push(chain[pos].id.clone());
                first_cycle = Some(members);
            }
        }

        let last = chain.len() - 1;
        for (i, member) in chain.iter().enumerate() {
            let parent = match &end {
                ChainEnd::Cycle(pos) if i == *pos => None,
                _ if i < last => Some(chain[i + 1].id.clone()),
                ChainEnd::Root => None,
                ChainEnd::Anchored(id) => Some((*id).clone()),
                ChainEnd::Cycle(pos) => Some(chain[*pos].id.clone()),
            };
            nodes.insert(member.id.clone(), TreeNode::from_record(member, parent));
        }
    }

    debug!(
        records = records.len(),
        nodes = nodes.len(),
        duplicates = records.len() - index.len(),
        missing_parents,
        broken_cycles = broken_cycles.len(),
        "Built file tree"
    );

    Resolved {
        tree: FileTree::from_parts(nodes, broken_cycles),
        first_cycle,
    }
}
