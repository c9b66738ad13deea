//! Grouping of RDF list chains
//!
//! Every `rdf:rest` statement links two list nodes. Linking creates a new
//! group and moves the whole chain reachable from both ends into it, so
//! chain fragments merge correctly whatever order their links arrive in.

use crate::model::{GraphTables, GroupKey, NodeKey};
use std::collections::HashSet;
use tracing::trace;

impl GraphTables {
    /// Link `source -> target` and gather their chain into a new group
    ///
    /// Groups left without members are superseded and deleted. Chain walks
    /// stop on revisiting a node, so cyclic `rdf:rest` data terminates.
    pub fn link(&mut self, source: NodeKey, target: NodeKey) -> GroupKey {
        let group = self.insert_group();

        self.node_mut(source).links.next = Some(target);
        self.node_mut(target).links.prev = Some(source);

        let mut visited = HashSet::new();

        let mut cursor = Some(source);
        while let Some(key) = cursor.filter(|key| visited.insert(*key)) {
            self.adopt(key, group);
            cursor = self.node(key).links.prev;
        }

        let mut cursor = Some(target);
        while let Some(key) = cursor.filter(|key| visited.insert(*key)) {
            self.adopt(key, group);
            cursor = self.node(key).links.next;
        }

        trace!(
            source = %self.node(source).id,
            target = %self.node(target).id,
            members = self.group(group).member_count,
            "linked list nodes"
        );
        group
    }

    /// Move `key` into `group`, deleting the group it leaves if now empty
    fn adopt(&mut self, key: NodeKey, group: GroupKey) {
        let previous = self.node_mut(key).links.group.replace(group);
        match previous {
            Some(old) if old == group => return,
            Some(old) => {
                let old_group = self.group_mut(old);
                old_group.member_count -= 1;
                if old_group.member_count == 0 {
                    self.delete_group(old);
                }
            }
            None => {}
        }
        self.group_mut(group).member_count += 1;
    }

    /// Head of the chain containing `key` (`key` itself outside any list)
    pub fn chain_root(&self, key: NodeKey) -> NodeKey {
        let mut visited = HashSet::new();
        visited.insert(key);

        let mut root = key;
        while let Some(prev) = self.node(root).links.prev {
            if !visited.insert(prev) {
                break;
            }
            root = prev;
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, NodeClass};

    fn tables_with(n: usize) -> (GraphTables, Vec<NodeKey>) {
        let mut tables = GraphTables::new();
        let keys = (0..n)
            .map(|i| {
                let id = format!("_:l{}", i);
                tables.insert_node(Node::new(id.clone(), id, NodeClass::ListNode))
            })
            .collect();
        (tables, keys)
    }

    fn group_of(tables: &GraphTables, key: NodeKey) -> GroupKey {
        tables.node(key).links.group.unwrap()
    }

    #[test]
    fn test_single_link() {
        let (mut tables, keys) = tables_with(2);
        let group = tables.link(keys[0], keys[1]);

        assert_eq!(tables.node(keys[0]).links.next, Some(keys[1]));
        assert_eq!(tables.node(keys[1]).links.prev, Some(keys[0]));
        assert_eq!(group_of(&tables, keys[0]), group);
        assert_eq!(group_of(&tables, keys[1]), group);
        assert_eq!(tables.groups().count(), 1);
    }

    #[test]
    fn test_chain_converges_in_any_order() {
        let orders: [[usize; 3]; 4] = [[0, 1, 2], [2, 1, 0], [1, 0, 2], [0, 2, 1]];
        for order in orders {
            let (mut tables, keys) = tables_with(4);
            for i in order {
                tables.link(keys[i], keys[i + 1]);
            }

            let group = group_of(&tables, keys[0]);
            for key in &keys {
                assert_eq!(group_of(&tables, *key), group, "order {:?}", order);
            }
            assert_eq!(tables.groups().count(), 1, "order {:?}", order);
            assert!(tables.contains_group(group));
        }
    }

    #[test]
    fn test_fragments_merge_from_the_middle() {
        let (mut tables, keys) = tables_with(4);
        let left = tables.link(keys[0], keys[1]);
        let right = tables.link(keys[2], keys[3]);
        assert_ne!(left, right);
        assert_eq!(tables.groups().count(), 2);

        let merged = tables.link(keys[1], keys[2]);
        assert!(!tables.contains_group(left));
        assert!(!tables.contains_group(right));
        assert_eq!(tables.group(merged).member_count, 4);
    }

    #[test]
    fn test_chain_root() {
        let (mut tables, keys) = tables_with(3);
        tables.link(keys[1], keys[2]);
        tables.link(keys[0], keys[1]);

        assert_eq!(tables.chain_root(keys[2]), keys[0]);
        assert_eq!(tables.chain_root(keys[0]), keys[0]);
    }

    #[test]
    fn test_cyclic_chain_terminates() {
        let (mut tables, keys) = tables_with(2);
        tables.link(keys[0], keys[1]);
        let group = tables.link(keys[1], keys[0]);

        assert_eq!(group_of(&tables, keys[0]), group);
        assert_eq!(group_of(&tables, keys[1]), group);
        assert_eq!(tables.groups().count(), 1);

        let root = tables.chain_root(keys[0]);
        assert!(keys.contains(&root));
    }

    #[test]
    fn test_self_link() {
        let (mut tables, keys) = tables_with(1);
        let group = tables.link(keys[0], keys[0]);
        assert_eq!(tables.group(group).member_count, 1);
        assert_eq!(tables.chain_root(keys[0]), keys[0]);
    }
}
