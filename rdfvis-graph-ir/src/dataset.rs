//! RDF dataset - an ordered bag of quads
//!
//! The `Dataset` type uses `Vec<Quad>` to preserve duplicates and arrival
//! order (bag semantics). Call `dedupe()` explicitly if you want set semantics.

use crate::{Quad, QuadSink, Term};

/// A collection of RDF quads, possibly spanning several named graphs
///
/// # Example
///
/// ```
/// use rdfvis_graph_ir::{Dataset, Term};
///
/// let mut dataset = Dataset::new();
/// dataset.add_quad(
///     Term::named("http://example.org/alice"),
///     Term::named("http://xmlns.com/foaf/0.1/name"),
///     Term::string("Alice"),
/// );
///
/// // Canonical order, no duplicates
/// dataset.dedupe();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    quads: Vec<Quad>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quad to the dataset
    pub fn add(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    /// Add a default-graph quad by components
    pub fn add_quad(&mut self, s: Term, p: Term, o: Term) {
        self.add(Quad::new(s, p, o));
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn into_quads(self) -> Vec<Quad> {
        self.quads
    }

    /// Sort quads by SPOG for deterministic output
    pub fn sort(&mut self) {
        self.quads.sort();
    }

    /// Remove duplicate quads (apply set semantics)
    ///
    /// Leaves the dataset sorted.
    pub fn dedupe(&mut self) {
        self.quads.sort();
        self.quads.dedup();
    }

    /// Distinct graph terms in first-seen order
    pub fn graphs(&self) -> Vec<&Term> {
        let mut graphs: Vec<&Term> = Vec::new();
        for quad in &self.quads {
            if !graphs.contains(&&quad.graph) {
                graphs.push(&quad.graph);
            }
        }
        graphs
    }
}

impl QuadSink for Dataset {
    fn emit_quad(&mut self, quad: Quad) {
        self.add(quad);
    }
}

impl IntoIterator for Dataset {
    type Item = Quad;
    type IntoIter = std::vec::IntoIter<Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Quad;
    type IntoIter = std::slice::Iter<'a, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.iter()
    }
}

impl FromIterator<Quad> for Dataset {
    fn from_iter<T: IntoIterator<Item = Quad>>(iter: T) -> Self {
        Dataset {
            quads: iter.into_iter().collect(),
        }
    }
}

impl Extend<Quad> for Dataset {
    fn extend<T: IntoIterator<Item = Quad>>(&mut self, iter: T) {
        self.quads.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(s: &str, o: &str, g: Term) -> Quad {
        Quad::in_graph(
            Term::named(s),
            Term::named("http://example.org/p"),
            Term::string(o),
            g,
        )
    }

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::new();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }

    #[test]
    fn test_dataset_keeps_arrival_order() {
        let dataset: Dataset = vec![
            quad("http://example.org/bob", "Bob", Term::DefaultGraph),
            quad("http://example.org/alice", "Alice", Term::DefaultGraph),
        ]
        .into_iter()
        .collect();

        let first = dataset.iter().next().unwrap();
        assert_eq!(first.subject.as_named(), Some("http://example.org/bob"));

        let mut sorted = dataset.clone();
        sorted.sort();
        let first = sorted.iter().next().unwrap();
        assert_eq!(first.subject.as_named(), Some("http://example.org/alice"));
    }

    #[test]
    fn test_dataset_dedupe() {
        let mut dataset = Dataset::new();
        let q = quad("http://example.org/s", "o", Term::DefaultGraph);
        dataset.add(q.clone());
        dataset.add(q.clone());
        dataset.add(q);
        assert_eq!(dataset.len(), 3);

        dataset.dedupe();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_graphs_first_seen_order() {
        let g = Term::named("http://example.org/g");
        let mut dataset = Dataset::new();
        dataset.emit_quads(vec![
            quad("http://example.org/a", "1", g.clone()),
            quad("http://example.org/b", "2", Term::DefaultGraph),
            quad("http://example.org/c", "3", g.clone()),
        ]);

        assert_eq!(dataset.graphs(), vec![&g, &Term::DefaultGraph]);
    }
}
