//! Renderer-facing graph description
//!
//! Serializes to the `{ nodes, edges }` element shape a graph renderer
//! consumes: each element carries a `data` object and a space-separated
//! `classes` string. Tooltips read `types` and `values` off node data.

use crate::error::Result;
use crate::model::{EdgeKey, GraphTables, GroupKey, NodeKey};
use rdfvis_graph_ir::Term;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Class of list group elements
pub const LIST_GROUP_CLASS: &str = "ListGroup";

/// Surviving nodes (list groups last) and edges of a build
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Elements {
    pub nodes: Vec<NodeElement>,
    pub edges: Vec<EdgeElement>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeElement {
    pub data: NodeData,
    pub classes: String,
}

impl NodeElement {
    pub fn id(&self) -> &str {
        match &self.data {
            NodeData::Term(data) => &data.id,
            NodeData::Group(data) => &data.id,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.data, NodeData::Group(_))
    }

    pub fn term_data(&self) -> Option<&TermNodeData> {
        match &self.data {
            NodeData::Term(data) => Some(data),
            NodeData::Group(_) => None,
        }
    }

    pub fn group_data(&self) -> Option<&GroupData> {
        match &self.data {
            NodeData::Group(data) => Some(data),
            NodeData::Term(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeData {
    Term(TermNodeData),
    Group(GroupData),
}

/// Data of a node drawn for a term occurrence
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TermNodeData {
    pub id: String,
    pub text: String,
    pub types: Vec<Term>,
    /// (predicate, literal) pairs
    pub values: Vec<(Term, Term)>,
    /// Ids of surviving incoming edges
    #[serde(rename = "in")]
    pub in_edges: Vec<String>,
    /// Ids of surviving outgoing edges
    #[serde(rename = "out")]
    pub out_edges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Id of the enclosing list group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Data of a list group container
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupData {
    pub id: String,
    pub members: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeElement {
    pub data: EdgeData,
    pub classes: String,
}

impl EdgeElement {
    pub fn id(&self) -> &str {
        &self.data.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeData {
    pub id: String,
    pub text: String,
    pub source: String,
    pub target: String,
}

impl Elements {
    /// Collect the live elements of pruned tables
    pub(crate) fn from_tables(tables: &GraphTables) -> Self {
        let live_id = |key: Option<NodeKey>| {
            key.filter(|key| tables.contains_node(*key))
                .map(|key| tables.node(key).id.clone())
        };
        let live_group = |key: Option<GroupKey>| {
            key.filter(|key| tables.contains_group(*key))
                .map(|key| tables.group(key).id.clone())
        };
        let live_edges = |keys: &[EdgeKey]| -> Vec<String> {
            keys.iter()
                .filter(|key| tables.contains_edge(**key))
                .map(|key| tables.edge(*key).id.clone())
                .collect()
        };

        let mut nodes: Vec<NodeElement> = tables
            .nodes()
            .map(|(_, node)| NodeElement {
                data: NodeData::Term(TermNodeData {
                    id: node.id.clone(),
                    text: node.text.clone(),
                    types: node.types.clone(),
                    values: node.values.clone(),
                    in_edges: live_edges(&node.in_edges),
                    out_edges: live_edges(&node.out_edges),
                    prev: live_id(node.links.prev),
                    next: live_id(node.links.next),
                    parent: live_group(node.links.group),
                }),
                classes: node.classes(),
            })
            .collect();

        for (key, group) in tables.groups() {
            let members = tables
                .nodes()
                .filter(|(_, node)| node.links.group == Some(key))
                .map(|(_, node)| node.id.clone())
                .collect();
            nodes.push(NodeElement {
                data: NodeData::Group(GroupData {
                    id: group.id.clone(),
                    members,
                }),
                classes: LIST_GROUP_CLASS.to_string(),
            });
        }

        let edges = tables
            .edges()
            .map(|(_, edge)| EdgeElement {
                data: EdgeData {
                    id: edge.id.clone(),
                    text: edge.text.clone(),
                    source: tables.node(edge.source).id.clone(),
                    target: tables.node(edge.target).id.clone(),
                },
                classes: edge.classes(),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&NodeElement> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeElement> {
        self.edges.iter().find(|edge| edge.id() == id)
    }

    /// List group elements
    pub fn groups(&self) -> impl Iterator<Item = &NodeElement> {
        self.nodes.iter().filter(|node| node.is_group())
    }

    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}
