//! Namespace prefixes for display text
//!
//! Prefixes only affect what is shown (`ex:alice` instead of the full IRI)
//! and how prefixed style patterns are written. Matching always runs on
//! expanded IRIs.

use rdfvis_graph_ir::Term;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Ordered abbreviation => IRI prefix map
///
/// The first entry that applies wins, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Namespaces {
    entries: Vec<(String, String)>,
}

impl Namespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an abbreviation; re-registering replaces the prefix in place
    pub fn insert(&mut self, abbreviation: impl Into<String>, prefix: impl Into<String>) {
        let abbreviation = abbreviation.into();
        let prefix = prefix.into();
        match self.entries.iter_mut().find(|(a, _)| *a == abbreviation) {
            Some(slot) => slot.1 = prefix,
            None => self.entries.push((abbreviation, prefix)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact an IRI to `abbr:local` if a namespace prefix covers it
    pub fn compact(&self, iri: &str) -> String {
        for (abbreviation, prefix) in &self.entries {
            if let Some(local) = iri.strip_prefix(prefix.as_str()) {
                return format!("{}:{}", abbreviation, local);
            }
        }
        iri.to_string()
    }

    /// Expand `abbr:local` to a full IRI if the abbreviation is known
    pub fn expand(&self, text: &str) -> String {
        for (abbreviation, prefix) in &self.entries {
            let local = text
                .strip_prefix(abbreviation.as_str())
                .and_then(|rest| rest.strip_prefix(':'));
            if let Some(local) = local {
                return format!("{}{}", prefix, local);
            }
        }
        text.to_string()
    }

    /// Display text for a term
    ///
    /// Named nodes are compacted, blank nodes and variables get their sigil,
    /// literals show their lexical form and the default graph shows nothing.
    pub fn term_text(&self, term: &Term) -> String {
        match term {
            Term::NamedNode(iri) => self.compact(iri),
            Term::BlankNode(id) => id.to_string(),
            Term::Variable(name) => format!("?{}", name),
            Term::DefaultGraph => String::new(),
            Term::Literal { value, .. } => value.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Namespaces {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NamespacesVisitor;

        impl<'de> Visitor<'de> for NamespacesVisitor {
            type Value = Namespaces;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of abbreviations to IRI prefixes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Namespaces, A::Error> {
                let mut namespaces = Namespaces::new();
                while let Some((abbreviation, prefix)) = access.next_entry::<String, String>()? {
                    namespaces.insert(abbreviation, prefix);
                }
                Ok(namespaces)
            }
        }

        deserializer.deserialize_map(NamespacesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfvis_graph_ir::Datatype;

    fn namespaces() -> Namespaces {
        let mut ns = Namespaces::new();
        ns.insert("ex", "http://example.org/");
        ns.insert("foaf", "http://xmlns.com/foaf/0.1/");
        ns
    }

    #[test]
    fn test_compact() {
        let ns = namespaces();
        assert_eq!(ns.compact("http://example.org/alice"), "ex:alice");
        assert_eq!(ns.compact("http://xmlns.com/foaf/0.1/name"), "foaf:name");
        assert_eq!(ns.compact("http://other.org/x"), "http://other.org/x");
    }

    #[test]
    fn test_first_namespace_wins() {
        let mut ns = Namespaces::new();
        ns.insert("ex", "http://example.org/");
        ns.insert("exv", "http://example.org/vocab/");
        assert_eq!(ns.compact("http://example.org/vocab/p"), "ex:vocab/p");
    }

    #[test]
    fn test_expand() {
        let ns = namespaces();
        assert_eq!(ns.expand("ex:alice"), "http://example.org/alice");
        assert_eq!(ns.expand("ex:*"), "http://example.org/*");
        assert_eq!(ns.expand("exx:alice"), "exx:alice");
        assert_eq!(ns.expand("http://example.org/a"), "http://example.org/a");
    }

    #[test]
    fn test_term_text() {
        let ns = namespaces();
        assert_eq!(ns.term_text(&Term::named("http://example.org/a")), "ex:a");
        assert_eq!(ns.term_text(&Term::blank("b1")), "_:b1");
        assert_eq!(ns.term_text(&Term::variable("x")), "?x");
        assert_eq!(ns.term_text(&Term::DefaultGraph), "");
        assert_eq!(
            ns.term_text(&Term::typed("42", Datatype::xsd_integer())),
            "42"
        );
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let ns: Namespaces = serde_json::from_str(
            r#"{"b": "http://example.org/b/", "a": "http://example.org/"}"#,
        )
        .unwrap();
        assert_eq!(ns.len(), 2);
        assert_eq!(ns.compact("http://example.org/b/x"), "b:x");
    }
}
