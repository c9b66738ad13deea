//! RDF term and quad representation for rdfvis
//!
//! This crate provides the input-side types of the visualizer: the terms a
//! parser collaborator produces, the quads built from them, and a small
//! sink interface through which quads are handed to a consumer.
//!
//! # Key Design Principles
//!
//! 1. **Five term kinds** - `NamedNode`, `BlankNode`, `Literal`, `Variable`
//!    and `DefaultGraph`. The enum is closed, so every consumer matches
//!    exhaustively.
//!
//! 2. **Expanded IRIs only** - Named nodes hold full IRIs. Compaction to
//!    prefixed names is a display concern handled by the style crate.
//!
//! 3. **Bag semantics** - `Dataset` keeps duplicates in arrival order.
//!    Call `dedupe()` explicitly for set semantics.
//!
//! # Example
//!
//! ```
//! use rdfvis_graph_ir::{Dataset, Quad, QuadSink, Term};
//!
//! let mut dataset = Dataset::new();
//! dataset.emit_quad(Quad::new(
//!     Term::named("http://example.org/alice"),
//!     Term::named("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! ));
//!
//! assert_eq!(dataset.len(), 1);
//! ```

pub mod datatype;
mod dataset;
mod quad;
mod sink;
mod term;

pub use dataset::Dataset;
pub use datatype::Datatype;
pub use quad::Quad;
pub use sink::QuadSink;
pub use term::{BlankId, Term, TermKind};
