//! Identity of term occurrences
//!
//! Every visual node and edge is keyed by the id computed here. Occurrences
//! with equal ids are drawn as one element.

use crate::model::fresh_id;
use rdfvis_graph_ir::Term;

/// Compute the element id of `term` occurring in `graph`
///
/// - The default graph is always the empty id.
/// - A named node is its IRI, unless `decouple` asks for a separate visual
///   instance, in which case it gets a fresh id.
/// - Blank nodes and variables are scoped by the id of their graph: equal
///   labels in different graphs are different resources. Scoped ids start
///   with `_:` / `?` or contain a space, so they never equal an absolute IRI.
/// - Literals always get a fresh id. Equal literals are interchangeable in
///   RDF, but merging them would draw unrelated statements as connected.
pub fn term_id(term: &Term, graph: &Term, decouple: bool) -> String {
    match term {
        Term::DefaultGraph => String::new(),
        Term::NamedNode(iri) => {
            if decouple {
                fresh_id()
            } else {
                iri.to_string()
            }
        }
        Term::BlankNode(id) => scoped(graph, "_:", id.as_str()),
        Term::Variable(name) => scoped(graph, "?", name),
        Term::Literal { .. } => fresh_id(),
    }
}

fn scoped(graph: &Term, sigil: &str, label: &str) -> String {
    let scope = term_id(graph, &Term::DefaultGraph, false);
    if scope.is_empty() {
        format!("{}{}", sigil, label)
    } else {
        format!("{} {}{}", scope, sigil, label)
    }
}
