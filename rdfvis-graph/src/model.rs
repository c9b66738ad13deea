//! Node, edge and list-group tables
//!
//! All elements of one build live in arenas owned by [`GraphTables`]. Cross
//! references (edge endpoints, list links, group membership) are keys into
//! those arenas, never references. Pruning marks slots dead instead of
//! shrinking the arenas, so keys stay valid for the whole build.

use rdfvis_graph_ir::{Term, TermKind};
use std::collections::HashMap;
use uuid::Uuid;

macro_rules! arena_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_key!(
    /// Key of a node in [`GraphTables`]
    NodeKey
);
arena_key!(
    /// Key of an edge in [`GraphTables`]
    EdgeKey
);
arena_key!(
    /// Key of a list group in [`GraphTables`]
    GroupKey
);

/// Fresh globally unique identifier
pub(crate) fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Base visual class of a node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeClass {
    /// Class named after the term kind the node was created from
    Term(TermKind),
    /// Member of an RDF list chain
    ListNode,
    /// Blank node that carries literal values
    ValueNode,
}

impl NodeClass {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeClass::Term(kind) => kind.as_str(),
            NodeClass::ListNode => "ListNode",
            NodeClass::ValueNode => "ValueNode",
        }
    }

    /// Swap `from` for `to`; any other class is left alone
    pub(crate) fn relabel(&mut self, from: NodeClass, to: NodeClass) {
        if *self == from {
            *self = to;
        }
    }
}

/// Links of a node that takes part in an RDF list chain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListLinks {
    pub prev: Option<NodeKey>,
    pub next: Option<NodeKey>,
    pub group: Option<GroupKey>,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: String,
    pub text: String,
    pub class: NodeClass,
    /// Generated style classes (node styles, then type styles)
    pub style_classes: Vec<String>,
    pub types: Vec<Term>,
    /// (predicate, literal) pairs
    pub values: Vec<(Term, Term)>,
    pub out_edges: Vec<EdgeKey>,
    pub in_edges: Vec<EdgeKey>,
    /// Hidden by a `node-presentation: none` style
    pub remove: bool,
    pub links: ListLinks,
}

impl Node {
    pub(crate) fn new(id: String, text: String, class: NodeClass) -> Self {
        Self {
            id,
            text,
            class,
            style_classes: Vec::new(),
            types: Vec::new(),
            values: Vec::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            remove: false,
            links: ListLinks::default(),
        }
    }

    /// Space-separated class list: base class first, then style classes
    pub fn classes(&self) -> String {
        join_classes(self.class.as_str(), &self.style_classes)
    }
}

/// Base visual class of an edge
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    /// Ordinary predicate: term kind plus its generated style classes
    Predicate {
        kind: TermKind,
        style_classes: Vec<String>,
    },
    /// `rdf:type` drawn as an edge
    TypeEdge,
    /// `rdf:first` / `rdf:rest`
    ListEdge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    pub id: String,
    pub text: String,
    /// Visual source (already swapped for reversed edges)
    pub source: NodeKey,
    /// Visual target (already swapped for reversed edges)
    pub target: NodeKey,
    /// Hidden by a `node-presentation: none` edge style
    pub remove: bool,
    pub class: EdgeClass,
    pub direction: Direction,
}

impl Edge {
    pub fn classes(&self) -> String {
        let base = match &self.class {
            EdgeClass::Predicate {
                kind,
                style_classes,
            } => join_classes(kind.as_str(), style_classes),
            EdgeClass::TypeEdge => "TypeEdge".to_string(),
            EdgeClass::ListEdge => "ListEdge".to_string(),
        };
        format!("{} {}", base, self.direction.as_str())
    }
}

fn join_classes(base: &str, extra: &[String]) -> String {
    let mut classes = base.to_string();
    for class in extra {
        classes.push(' ');
        classes.push_str(class);
    }
    classes
}

/// A detected RDF list chain
#[derive(Clone, Debug)]
pub struct ListGroup {
    pub id: String,
    /// Nodes whose `links.group` currently names this group
    pub(crate) member_count: usize,
}

/// Arena-backed element tables of one build
#[derive(Debug, Default)]
pub struct GraphTables {
    nodes: Vec<Node>,
    node_alive: Vec<bool>,
    node_index: HashMap<String, NodeKey>,
    edges: Vec<Edge>,
    edge_alive: Vec<bool>,
    edge_index: HashMap<String, EdgeKey>,
    groups: Vec<ListGroup>,
    group_alive: Vec<bool>,
}

impl GraphTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_node(&self, id: &str) -> Option<NodeKey> {
        self.node_index.get(id).copied()
    }

    pub(crate) fn insert_node(&mut self, node: Node) -> NodeKey {
        let key = NodeKey(self.nodes.len() as u32);
        self.node_index.insert(node.id.clone(), key);
        self.nodes.push(node);
        self.node_alive.push(true);
        key
    }

    pub fn node(&self, key: NodeKey) -> &Node {
        &self.nodes[key.index()]
    }

    pub(crate) fn node_mut(&mut self, key: NodeKey) -> &mut Node {
        &mut self.nodes[key.index()]
    }

    pub fn contains_node(&self, key: NodeKey) -> bool {
        self.node_alive[key.index()]
    }

    pub(crate) fn delete_node(&mut self, key: NodeKey) {
        self.node_alive[key.index()] = false;
    }

    /// Live nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| self.node_alive[*i])
            .map(|(i, node)| (NodeKey(i as u32), node))
    }

    pub(crate) fn node_keys(&self) -> impl Iterator<Item = NodeKey> {
        (0..self.nodes.len() as u32).map(NodeKey)
    }

    pub fn find_edge(&self, id: &str) -> Option<EdgeKey> {
        self.edge_index.get(id).copied()
    }

    /// Insert an edge and register it with both endpoints
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> EdgeKey {
        let key = EdgeKey(self.edges.len() as u32);
        let (source, target) = (edge.source, edge.target);
        self.edge_index.insert(edge.id.clone(), key);
        self.edges.push(edge);
        self.edge_alive.push(true);
        self.node_mut(source).out_edges.push(key);
        self.node_mut(target).in_edges.push(key);
        key
    }

    pub fn edge(&self, key: EdgeKey) -> &Edge {
        &self.edges[key.index()]
    }

    pub fn contains_edge(&self, key: EdgeKey) -> bool {
        self.edge_alive[key.index()]
    }

    pub(crate) fn delete_edge(&mut self, key: EdgeKey) {
        self.edge_alive[key.index()] = false;
    }

    /// Live edges in creation order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(i, _)| self.edge_alive[*i])
            .map(|(i, edge)| (EdgeKey(i as u32), edge))
    }

    pub(crate) fn edge_keys(&self) -> impl Iterator<Item = EdgeKey> {
        (0..self.edges.len() as u32).map(EdgeKey)
    }

    pub(crate) fn insert_group(&mut self) -> GroupKey {
        let key = GroupKey(self.groups.len() as u32);
        self.groups.push(ListGroup {
            id: fresh_id(),
            member_count: 0,
        });
        self.group_alive.push(true);
        key
    }

    pub fn group(&self, key: GroupKey) -> &ListGroup {
        &self.groups[key.index()]
    }

    pub(crate) fn group_mut(&mut self, key: GroupKey) -> &mut ListGroup {
        &mut self.groups[key.index()]
    }

    pub fn contains_group(&self, key: GroupKey) -> bool {
        self.group_alive[key.index()]
    }

    pub(crate) fn delete_group(&mut self, key: GroupKey) {
        self.group_alive[key.index()] = false;
    }

    /// Live groups in creation order
    pub fn groups(&self) -> impl Iterator<Item = (GroupKey, &ListGroup)> {
        self.groups
            .iter()
            .enumerate()
            .filter(|(i, _)| self.group_alive[*i])
            .map(|(i, group)| (GroupKey(i as u32), group))
    }
}
