//! RDF quads to a styled, pruned node/edge graph
//!
//! This crate turns a finite quad sequence into the elements a graph
//! renderer draws, plus the stylesheet that goes with them.
//!
//! # Pipeline
//!
//! 1. **Identity** - every term occurrence gets an element id. Named nodes
//!    merge by IRI, blank nodes and variables merge within their graph, and
//!    literals never merge.
//! 2. **Building** - [`GraphBuilder::add`] creates nodes and edges per quad.
//!    `rdf:type` becomes tooltip data and style classes (and optionally an
//!    edge), literals become tooltip values, and `rdf:rest` chains are
//!    gathered into list groups.
//! 3. **Pruning** - [`GraphBuilder::finalize`] drops hidden elements and
//!    nodes that carry nothing to show, then emits [`Elements`].
//!
//! # Example
//!
//! ```
//! use rdfvis_graph::render;
//! use rdfvis_graph_ir::{Quad, Term};
//! use rdfvis_style::Config;
//!
//! let config = Config::from_json_str(r#"{
//!     "namespace": { "ex": "http://example.org/" },
//!     "style": { "edge": { "ex:parentOf": { "layout-direction": "reverse" } } }
//! }"#).unwrap();
//!
//! let quads = vec![Quad::new(
//!     Term::named("http://example.org/alice"),
//!     Term::named("http://example.org/parentOf"),
//!     Term::named("http://example.org/bob"),
//! )];
//!
//! let graph = render(quads, &config).unwrap();
//! let edge = &graph.elements.edges[0];
//! assert_eq!(edge.data.source, "http://example.org/bob");
//! assert_eq!(edge.data.text, "ex:parentOf");
//! assert!(edge.classes.ends_with("reverse"));
//! ```

mod builder;
pub mod elements;
pub mod error;
mod identity;
mod list;
pub mod model;
mod prune;

pub use builder::{BuildOutput, GraphBuilder};
pub use elements::{
    EdgeData, EdgeElement, Elements, GroupData, NodeData, NodeElement, TermNodeData,
};
pub use error::{GraphError, Result};
pub use identity::term_id;

use rdfvis_graph_ir::{Quad, QuadSink};
use rdfvis_style::{stylesheet, Config, StyleSet, StylesheetRule};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Elements of a build together with the stylesheet that renders them
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedGraph {
    pub elements: Elements,
    pub stylesheet: Vec<StylesheetRule>,
}

impl RenderedGraph {
    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Build and prune the graph of `quads` against compiled styles
pub fn build<I>(quads: I, styles: &StyleSet) -> BuildOutput
where
    I: IntoIterator<Item = Quad>,
{
    let mut builder = GraphBuilder::new(styles);
    builder.emit_quads(quads);
    builder.finalize()
}

/// Compile `config`, build the graph of `quads` and generate its stylesheet
///
/// Fails only if the configuration does not compile.
pub fn render<I>(quads: I, config: &Config) -> Result<RenderedGraph>
where
    I: IntoIterator<Item = Quad>,
{
    let styles = StyleSet::compile(config)?;
    let output = build(quads, &styles);
    let stylesheet = stylesheet(&styles, &output.class_names);

    Ok(RenderedGraph {
        elements: output.elements,
        stylesheet,
    })
}
