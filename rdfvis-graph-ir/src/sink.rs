//! QuadSink trait for push-style quad delivery
//!
//! A parser (or any other quad source) hands quads to a sink one at a time
//! without knowing what the sink does with them. The sink can be:
//! - `Dataset`: collects quads in memory
//! - the graph builder in `rdfvis-graph`: builds visual elements directly

use crate::Quad;

/// Consumer of a finite, ordered quad sequence
///
/// # Example
///
/// ```
/// use rdfvis_graph_ir::{Dataset, Quad, QuadSink, Term};
///
/// let mut sink = Dataset::new();
/// sink.emit_quads(vec![
///     Quad::new(Term::blank("b0"), Term::named("http://example.org/p"), Term::string("x")),
///     Quad::new(Term::blank("b1"), Term::named("http://example.org/p"), Term::string("y")),
/// ]);
/// assert_eq!(sink.len(), 2);
/// ```
pub trait QuadSink {
    /// Accept the next quad
    fn emit_quad(&mut self, quad: Quad);

    /// Accept every quad of `quads`, in order
    fn emit_quads<I>(&mut self, quads: I)
    where
        I: IntoIterator<Item = Quad>,
        Self: Sized,
    {
        for quad in quads {
            self.emit_quad(quad);
        }
    }
}
