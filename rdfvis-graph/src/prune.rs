//! Final pruning of hidden and informationless elements
//!
//! Pass 1 visits nodes in creation order and judges each through the head
//! of its list chain: list members live or die with their root. List groups
//! left without a live member go with them. Pass 2 drops edges that are
//! hidden or lost an endpoint.
//!
//! Pass 1 is a single sweep against the adjacency recorded while building.
//! A node kept early in the sweep is not revisited when a neighbor judged
//! later is deleted, so removals cascade at most one hop.

use crate::model::{EdgeKey, GraphTables, GroupKey, NodeKey};
use std::collections::HashSet;

impl GraphTables {
    /// Run both pruning passes
    pub(crate) fn prune(&mut self) {
        let keys: Vec<NodeKey> = self.node_keys().collect();
        for key in keys {
            if !self.contains_node(key) {
                continue;
            }

            let root = self.chain_root(key);
            if self.is_prunable_root(root) {
                self.delete_node(key);
                if let Some(group) = self.node(root).links.group {
                    self.delete_group(group);
                }
            }
        }

        let occupied: HashSet<GroupKey> = self
            .nodes()
            .filter_map(|(_, node)| node.links.group)
            .collect();
        let empty: Vec<GroupKey> = self
            .groups()
            .map(|(key, _)| key)
            .filter(|key| !occupied.contains(key))
            .collect();
        for key in empty {
            self.delete_group(key);
        }

        let keys: Vec<EdgeKey> = self.edge_keys().collect();
        for key in keys {
            let edge = self.edge(key);
            if edge.remove || !self.contains_node(edge.source) || !self.contains_node(edge.target)
            {
                self.delete_edge(key);
            }
        }
    }

    /// A chain root that is gone, hidden, or carries nothing to show
    fn is_prunable_root(&self, root: NodeKey) -> bool {
        if !self.contains_node(root) {
            return true;
        }

        let node = self.node(root);
        if node.remove {
            return true;
        }

        node.types.is_empty()
            && node.values.is_empty()
            && !node.in_edges.iter().any(|key| self.edge_survives(*key, false))
            && !node.out_edges.iter().any(|key| self.edge_survives(*key, true))
    }

    /// An edge survives if it is not hidden and the chain root of its far
    /// endpoint is still present and not hidden
    fn edge_survives(&self, key: EdgeKey, outgoing: bool) -> bool {
        let edge = self.edge(key);
        if edge.remove {
            return false;
        }

        let far = if outgoing { edge.target } else { edge.source };
        if !self.contains_node(far) {
            return false;
        }

        let root = self.chain_root(far);
        self.contains_node(root) && !self.node(root).remove
    }
}
