#![forbid(unsafe_code)]

//! Immutable word-ladder graph.

use tracing::warn;

use crate::error::{LadderError, Result};
use crate::model::Leaf;

/// Ordered node sequence where a node's position is its identity.
///
/// Nodes are sorted by (character length, text), neighbor lists are strictly
/// ascending and every edge is stored on both of its endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    leaves: Vec<Leaf>,
}

impl Graph {
    /// Wraps nodes produced by the builder, which upholds the invariants itself.
    pub(crate) fn from_built(leaves: Vec<Leaf>) -> Self {
        Self { leaves }
    }

    /// Validates untrusted nodes (typically decoded from disk) and wraps them.
    ///
    /// Neighbor lists that are merely unsorted are sorted in place; any other
    /// invariant violation is reported as [`LadderError::MalformedGraph`].
    pub fn from_leaves(mut leaves: Vec<Leaf>) -> Result<Self> {
        if let Some(pos) = leaves.windows(2).position(|pair| {
            !pair[0]
                .cmp_key(pair[1].root.chars().count(), &pair[1].root)
                .is_lt()
        }) {
            return Err(LadderError::malformed(format!(
                "node #{} '{}' does not sort after '{}'",
                pos + 1,
                leaves[pos + 1].root,
                leaves[pos].root
            )));
        }

        let count = leaves.len();
        let mut normalised = 0usize;
        for (index, leaf) in leaves.iter_mut().enumerate() {
            if !leaf.relations.windows(2).all(|pair| pair[0] <= pair[1]) {
                leaf.relations.sort_unstable();
                normalised += 1;
            }
            if leaf.relations.windows(2).any(|pair| pair[0] == pair[1]) {
                return Err(LadderError::malformed(format!(
                    "node #{index} '{}' lists a neighbor twice",
                    leaf.root
                )));
            }
            if let Some(&bad) = leaf.relations.iter().find(|&&j| j >= count || j == index) {
                return Err(LadderError::malformed(format!(
                    "node #{index} '{}' references invalid neighbor {bad} (nodes: {count})",
                    leaf.root
                )));
            }
        }
        if normalised > 0 {
            warn!(nodes = normalised, "graph.load.unsorted_relations");
        }

        for (index, leaf) in leaves.iter().enumerate() {
            for &j in &leaf.relations {
                if leaves[j].relations.binary_search(&index).is_err() {
                    return Err(LadderError::malformed(format!(
                        "edge {index} -> {j} ('{}' -> '{}') has no reverse edge",
                        leaf.root, leaves[j].root
                    )));
                }
            }
        }

        Ok(Self { leaves })
    }

    /// All nodes in index order.
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Consumes the graph, returning its nodes.
    pub fn into_leaves(self) -> Vec<Leaf> {
        self.leaves
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Node at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Leaf> {
        self.leaves.get(index)
    }

    /// Index of the node for `word`, found by binary search.
    pub fn find(&self, word: &str) -> Option<usize> {
        crate::search::find_word(&self.leaves, word)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.leaves.iter().map(|leaf| leaf.relations.len()).sum::<usize>() / 2
    }

    /// Number of distinct word lengths among the nodes.
    pub fn partition_count(&self) -> usize {
        let mut count = 0;
        let mut last = None;
        for leaf in &self.leaves {
            let length = leaf.root.chars().count();
            if last != Some(length) {
                count += 1;
                last = Some(length);
            }
        }
        count
    }
}
