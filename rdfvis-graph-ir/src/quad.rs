use crate::Term;

/// A subject-predicate-object statement in a graph context
///
/// `graph` is `Term::DefaultGraph` for statements outside any named graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    pub graph: Term,
}

impl Quad {
    /// Create a quad in the default graph
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self::in_graph(subject, predicate, object, Term::DefaultGraph)
    }

    /// Create a quad in an explicit graph
    pub fn in_graph(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph,
        }
    }
}

impl std::fmt::Display for Quad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if self.graph != Term::DefaultGraph {
            write!(f, " {}", self.graph)?;
        }
        f.write_str(" .")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_graph() {
        let quad = Quad::new(
            Term::named("http://example.org/s"),
            Term::named("http://example.org/p"),
            Term::string("o"),
        );
        assert_eq!(quad.graph, Term::DefaultGraph);
        assert_eq!(
            quad.to_string(),
            "<http://example.org/s> <http://example.org/p> \"o\" ."
        );
    }

    #[test]
    fn test_named_graph_display() {
        let quad = Quad::in_graph(
            Term::blank("b0"),
            Term::named("http://example.org/p"),
            Term::named("http://example.org/o"),
            Term::named("http://example.org/g"),
        );
        assert_eq!(
            quad.to_string(),
            "_:b0 <http://example.org/p> <http://example.org/o> <http://example.org/g> ."
        );
    }
}
