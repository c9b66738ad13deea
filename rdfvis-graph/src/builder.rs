//! Graph construction from quads
//!
//! [`GraphBuilder`] consumes quads one at a time, merging term occurrences by
//! identity and applying the RDF display rules for `rdf:type`, `rdf:first`
//! and `rdf:rest`. Nothing is deleted until [`GraphBuilder::finalize`].

use crate::elements::Elements;
use crate::identity::term_id;
use crate::model::{Direction, Edge, EdgeClass, EdgeKey, GraphTables, Node, NodeClass, NodeKey};
use rdfvis_graph_ir::{Quad, QuadSink, Term, TermKind};
use rdfvis_style::{
    ClassNames, NodePresentation, ShowTypeEdge, StyleClass, StyleMatcher, StyleSet,
};
use rdfvis_vocab::rdf;
use tracing::{debug, trace};

/// Result of a finished build
#[derive(Debug)]
pub struct BuildOutput {
    pub elements: Elements,
    /// Class names assigned to style objects while building
    pub class_names: ClassNames,
}

/// Accumulates nodes and edges from quads
///
/// # Example
///
/// ```
/// use rdfvis_graph::GraphBuilder;
/// use rdfvis_graph_ir::{Quad, Term};
/// use rdfvis_style::{Config, StyleSet};
///
/// let styles = StyleSet::compile(&Config::default()).unwrap();
/// let mut builder = GraphBuilder::new(&styles);
/// builder.add(&Quad::new(
///     Term::named("http://example.org/a"),
///     Term::named("http://example.org/knows"),
///     Term::named("http://example.org/b"),
/// ));
///
/// let output = builder.finalize();
/// assert_eq!(output.elements.nodes.len(), 2);
/// assert_eq!(output.elements.edges.len(), 1);
/// ```
#[derive(Debug)]
pub struct GraphBuilder<'a> {
    matcher: StyleMatcher<'a>,
    tables: GraphTables,
    quads: usize,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(styles: &'a StyleSet) -> Self {
        Self {
            matcher: StyleMatcher::new(styles),
            tables: GraphTables::new(),
            quads: 0,
        }
    }

    /// Element tables accumulated so far
    pub fn tables(&self) -> &GraphTables {
        &self.tables
    }

    /// Number of quads added
    pub fn quad_count(&self) -> usize {
        self.quads
    }

    /// Add one quad to the graph
    pub fn add(&mut self, quad: &Quad) {
        self.quads += 1;
        trace!(
            subject = %quad.subject,
            predicate = %quad.predicate,
            object = %quad.object,
            "adding quad"
        );

        let source = self.node(&quad.subject, &quad.graph, false);

        let rdf_edge = match quad.predicate.as_named() {
            Some(rdf::TYPE) => {
                let type_classes = self.matcher.class_names(&quad.object, StyleClass::Type);
                let styled = !type_classes.is_empty();

                let node = self.tables.node_mut(source);
                node.types.push(quad.object.clone());
                node.style_classes.extend(type_classes);

                match self.matcher.styles().options().type_edge_policy() {
                    ShowTypeEdge::Never => return,
                    ShowTypeEdge::Unstyled if styled => return,
                    _ => Some(EdgeClass::TypeEdge),
                }
            }
            Some(rdf::FIRST) => Some(EdgeClass::ListEdge),
            Some(rdf::REST) => {
                self.add_list_link(quad, source);
                return;
            }
            _ => None,
        };

        if quad.object.is_literal() {
            if rdf_edge.is_none()
                && self
                    .matcher
                    .present(NodePresentation::None, &quad.predicate, StyleClass::Edge)
            {
                return;
            }

            let node = self.tables.node_mut(source);
            node.values.push((quad.predicate.clone(), quad.object.clone()));
            if quad.subject.is_blank() {
                node.class
                    .relabel(NodeClass::Term(TermKind::BlankNode), NodeClass::ValueNode);
                node.class.relabel(NodeClass::ListNode, NodeClass::ValueNode);
            }
            return;
        }

        let decouple = (rdf_edge.is_none()
            && self
                .matcher
                .present(NodePresentation::Multiple, &quad.predicate, StyleClass::Edge))
            || self
                .matcher
                .present(NodePresentation::Multiple, &quad.object, StyleClass::Node);
        let target = self.node(&quad.object, &quad.graph, decouple);
        self.edge(&quad.predicate, &quad.graph, source, target, rdf_edge);
    }

    /// `rdf:rest`: both ends become list nodes joined into one chain
    fn add_list_link(&mut self, quad: &Quad, source: NodeKey) {
        let is_nil = quad.object.is_named_node(rdf::NIL);
        let target = self.node(&quad.object, &quad.graph, is_nil);

        self.tables
            .node_mut(source)
            .class
            .relabel(NodeClass::Term(TermKind::BlankNode), NodeClass::ListNode);
        let target_kind = if is_nil {
            TermKind::NamedNode
        } else {
            TermKind::BlankNode
        };
        self.tables
            .node_mut(target)
            .class
            .relabel(NodeClass::Term(target_kind), NodeClass::ListNode);

        self.edge(
            &quad.predicate,
            &quad.graph,
            source,
            target,
            Some(EdgeClass::ListEdge),
        );
        self.tables.link(source, target);
    }

    /// Get or create the node for `term`
    ///
    /// Style classes and the hidden flag are fixed when the node is created.
    fn node(&mut self, term: &Term, graph: &Term, decouple: bool) -> NodeKey {
        let id = term_id(term, graph, decouple);
        if let Some(key) = self.tables.find_node(&id) {
            return key;
        }

        let text = self.matcher.styles().namespaces().term_text(term);
        let mut node = Node::new(id, text, NodeClass::Term(term.kind()));
        node.style_classes = self.matcher.class_names(term, StyleClass::Node);
        node.remove = self
            .matcher
            .present(NodePresentation::None, term, StyleClass::Node);
        self.tables.insert_node(node)
    }

    /// Get or create the edge for an occurrence of `predicate`
    ///
    /// Reversed predicates swap the visual endpoints. An edge whose identity
    /// already exists is returned as is and not registered again.
    fn edge(
        &mut self,
        predicate: &Term,
        graph: &Term,
        source: NodeKey,
        target: NodeKey,
        rdf_class: Option<EdgeClass>,
    ) -> EdgeKey {
        let id = term_id(predicate, graph, true);
        if let Some(key) = self.tables.find_edge(&id) {
            return key;
        }

        let (source, target, direction) = if self.matcher.reverse_direction(predicate) {
            (target, source, Direction::Reverse)
        } else {
            (source, target, Direction::Forward)
        };

        let class = match rdf_class {
            Some(class) => class,
            None => EdgeClass::Predicate {
                kind: predicate.kind(),
                style_classes: self.matcher.class_names(predicate, StyleClass::Edge),
            },
        };

        let edge = Edge {
            id,
            text: self.matcher.styles().namespaces().term_text(predicate),
            source,
            target,
            remove: self
                .matcher
                .present(NodePresentation::None, predicate, StyleClass::Edge),
            class,
            direction,
        };
        self.tables.insert_edge(edge)
    }

    /// Prune the accumulated graph and produce its output elements
    pub fn finalize(mut self) -> BuildOutput {
        let before = (
            self.tables.nodes().count(),
            self.tables.edges().count(),
            self.tables.groups().count(),
        );

        self.tables.prune();
        let elements = Elements::from_tables(&self.tables);

        debug!(
            quads = self.quads,
            nodes_before = before.0,
            edges_before = before.1,
            groups_before = before.2,
            nodes = elements.nodes.len(),
            edges = elements.edges.len(),
            "finalized graph"
        );

        BuildOutput {
            elements,
            class_names: self.matcher.into_class_names(),
        }
    }
}

impl QuadSink for GraphBuilder<'_> {
    fn emit_quad(&mut self, quad: Quad) {
        self.add(&quad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfvis_style::Config;
    use serde_json::json;

    const EX: &str = "http://example.org/";

    fn ex(local: &str) -> Term {
        Term::named(format!("{}{}", EX, local))
    }

    fn styles(config: serde_json::Value) -> StyleSet {
        StyleSet::compile(&Config::from_json_value(config).unwrap()).unwrap()
    }

    #[test]
    fn test_node_reused_by_identity() {
        let styles = styles(json!({}));
        let mut builder = GraphBuilder::new(&styles);

        builder.add(&Quad::new(ex("a"), ex("p"), ex("b")));
        builder.add(&Quad::new(ex("a"), ex("q"), ex("c")));

        let tables = builder.tables();
        assert_eq!(tables.nodes().count(), 3);
        let a = tables.find_node("http://example.org/a").unwrap();
        assert_eq!(tables.node(a).out_edges.len(), 2);
        assert_eq!(builder.quad_count(), 2);
    }

    #[test]
    fn test_type_recorded_on_subject() {
        let styles = styles(json!({
            "style": { "type": { "http://example.org/Foo": { "color": "blue" } } }
        }));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(ex("a"), Term::named(rdf::TYPE), ex("Foo")));

        let tables = builder.tables();
        let a = tables.find_node("http://example.org/a").unwrap();
        assert_eq!(tables.node(a).types, vec![ex("Foo")]);
        assert_eq!(tables.node(a).style_classes.len(), 1);
        assert!(tables.node(a).classes().starts_with("NamedNode class-"));
    }

    #[test]
    fn test_literal_on_blank_subject_marks_value_node() {
        let styles = styles(json!({}));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(Term::blank("b0"), ex("label"), Term::string("x")));

        let tables = builder.tables();
        let b0 = tables.find_node("_:b0").unwrap();
        assert_eq!(tables.node(b0).class, NodeClass::ValueNode);
        assert_eq!(tables.node(b0).values.len(), 1);
        assert_eq!(tables.edges().count(), 0);
    }

    #[test]
    fn test_literal_dropped_for_hidden_predicate() {
        let styles = styles(json!({
            "style": { "edge": { "http://example.org/secret": { "node-presentation": "none" } } }
        }));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(ex("a"), ex("secret"), Term::string("x")));

        let a = builder.tables().find_node("http://example.org/a").unwrap();
        assert!(builder.tables().node(a).values.is_empty());
    }

    #[test]
    fn test_multiple_predicate_decouples_target() {
        let styles = styles(json!({
            "style": { "edge": { "http://example.org/inScheme": { "node-presentation": "multiple" } } }
        }));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(ex("a"), ex("inScheme"), ex("scheme")));
        builder.add(&Quad::new(ex("b"), ex("inScheme"), ex("scheme")));

        let tables = builder.tables();
        assert_eq!(tables.nodes().count(), 4);
        assert_eq!(tables.find_node("http://example.org/scheme"), None);
    }

    #[test]
    fn test_multiple_object_decouples_target() {
        let styles = styles(json!({
            "style": { "node": { "http://example.org/shared": { "node-presentation": "multiple" } } }
        }));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(ex("a"), ex("p"), ex("shared")));
        builder.add(&Quad::new(ex("b"), ex("p"), ex("shared")));

        assert_eq!(builder.tables().nodes().count(), 4);
    }

    #[test]
    fn test_rest_links_list_nodes() {
        let styles = styles(json!({}));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(Term::blank("l1"), Term::named(rdf::REST), Term::named(rdf::NIL)));

        let tables = builder.tables();
        let l1 = tables.find_node("_:l1").unwrap();
        let nil = tables.node(l1).links.next.unwrap();

        assert_eq!(tables.node(l1).class, NodeClass::ListNode);
        assert_eq!(tables.node(nil).class, NodeClass::ListNode);
        assert_ne!(tables.node(nil).id, rdf::NIL);
        assert_eq!(tables.node(l1).links.group, tables.node(nil).links.group);
        assert_eq!(tables.find_node(rdf::NIL), None);
    }

    #[test]
    fn test_named_list_subject_keeps_class() {
        let styles = styles(json!({}));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(ex("list"), Term::named(rdf::REST), Term::blank("l2")));

        let tables = builder.tables();
        let list = tables.find_node("http://example.org/list").unwrap();
        let l2 = tables.find_node("_:l2").unwrap();
        assert_eq!(tables.node(list).class, NodeClass::Term(TermKind::NamedNode));
        assert_eq!(tables.node(l2).class, NodeClass::ListNode);
    }

    #[test]
    fn test_reversed_edge_registered_on_swapped_endpoints() {
        let styles = styles(json!({
            "style": { "edge": { "http://example.org/parentOf": { "layout-direction": "reverse" } } }
        }));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(ex("parent"), ex("parentOf"), ex("child")));

        let tables = builder.tables();
        let (_, edge) = tables.edges().next().unwrap();
        assert_eq!(tables.node(edge.source).id, "http://example.org/child");
        assert_eq!(tables.node(edge.target).id, "http://example.org/parent");
        assert_eq!(edge.direction, Direction::Reverse);

        let child = tables.find_node("http://example.org/child").unwrap();
        assert_eq!(tables.node(child).out_edges.len(), 1);
    }

    #[test]
    fn test_variable_predicate_edge_registered_once() {
        let styles = styles(json!({}));
        let mut builder = GraphBuilder::new(&styles);
        builder.add(&Quad::new(ex("a"), Term::variable("p"), ex("b")));
        builder.add(&Quad::new(ex("a"), Term::variable("p"), ex("c")));

        let tables = builder.tables();
        assert_eq!(tables.edges().count(), 1);
        let a = tables.find_node("http://example.org/a").unwrap();
        assert_eq!(tables.node(a).out_edges.len(), 1);
    }

    #[test]
    fn test_builder_as_quad_sink() {
        let styles = styles(json!({}));
        let mut builder = GraphBuilder::new(&styles);
        builder.emit_quads(vec![
            Quad::new(ex("a"), ex("p"), ex("b")),
            Quad::new(ex("b"), ex("p"), ex("c")),
        ]);
        assert_eq!(builder.quad_count(), 2);
        assert_eq!(builder.tables().edges().count(), 2);
    }
}
