//! RDF term types
//!
//! A term occupies one position of a quad. It can be:
//! - A named node (an expanded IRI)
//! - A blank node (label scoped to its containing graph)
//! - A literal (lexical value + explicit datatype + optional language tag)
//! - A variable (query-pattern placeholder, scoped like blank nodes)
//! - The default graph (graph position only)

use crate::Datatype;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::sync::Arc;

/// Blank node label
///
/// Labels are only meaningful inside the graph that contains them; two
/// graphs may use the same label for unrelated resources.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node label
    ///
    /// The label should NOT include the `_:` prefix.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Discriminant of a [`Term`]
///
/// The string form doubles as the base class name of rendered elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermKind {
    NamedNode,
    BlankNode,
    Literal,
    Variable,
    DefaultGraph,
}

impl TermKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TermKind::NamedNode => "NamedNode",
            TermKind::BlankNode => "BlankNode",
            TermKind::Literal => "Literal",
            TermKind::Variable => "Variable",
            TermKind::DefaultGraph => "DefaultGraph",
        }
    }
}

impl std::fmt::Display for TermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RDF term
///
/// # Invariants
///
/// - `Term::NamedNode` always holds an **expanded** IRI.
/// - A `Term::Literal` with a language tag has datatype `rdf:langString`.
/// - `Term::DefaultGraph` only appears in the graph position of a quad.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// Full expanded IRI (e.g., "http://schema.org/Person")
    NamedNode(Arc<str>),

    /// Blank node with graph-local label
    BlankNode(BlankId),

    /// Literal value with explicit datatype
    Literal {
        /// Lexical form
        value: Arc<str>,
        /// Datatype (always present)
        datatype: Datatype,
        /// Language tag (only with rdf:langString)
        language: Option<Arc<str>>,
    },

    /// Variable name, without the `?` sigil
    Variable(Arc<str>),

    /// The unnamed default graph
    DefaultGraph,
}

impl Term {
    /// Create a named node from an expanded IRI
    pub fn named(iri: impl AsRef<str>) -> Self {
        Term::NamedNode(Arc::from(iri.as_ref()))
    }

    /// Create a blank node
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// Create a variable
    pub fn variable(name: impl AsRef<str>) -> Self {
        Term::Variable(Arc::from(name.as_ref()))
    }

    /// Create a plain string literal (xsd:string)
    pub fn string(value: impl AsRef<str>) -> Self {
        Self::typed(value, Datatype::xsd_string())
    }

    /// Create a language-tagged string literal (rdf:langString)
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal {
            value: Arc::from(value.as_ref()),
            datatype: Datatype::rdf_lang_string(),
            language: Some(Arc::from(lang.as_ref())),
        }
    }

    /// Create a literal with an explicit datatype
    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal {
            value: Arc::from(value.as_ref()),
            datatype,
            language: None,
        }
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal { .. } => TermKind::Literal,
            Term::Variable(_) => TermKind::Variable,
            Term::DefaultGraph => TermKind::DefaultGraph,
        }
    }

    /// The raw value of the term: IRI, label, lexical form or variable name.
    ///
    /// The default graph has an empty value.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(iri) => iri,
            Term::BlankNode(id) => id.as_str(),
            Term::Literal { value, .. } => value,
            Term::Variable(name) => name,
            Term::DefaultGraph => "",
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    /// Try to get as IRI string
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Term::NamedNode(iri) => Some(iri),
            _ => None,
        }
    }

    /// True if this is the named node `iri`
    pub fn is_named_node(&self, iri: &str) -> bool {
        self.as_named() == Some(iri)
    }

    /// Try to get literal components
    pub fn as_literal(&self) -> Option<(&str, &Datatype, Option<&str>)> {
        match self {
            Term::Literal {
                value,
                datatype,
                language,
            } => Some((value.as_ref(), datatype, language.as_deref())),
            _ => None,
        }
    }
}

/// Terms serialize in the RDF/JS shape (`termType`, `value`, and for
/// literals `datatype` / `language`), which is what tooltip consumers read.
impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::Literal {
                value,
                datatype,
                language,
            } => {
                let mut state = serializer.serialize_struct("Term", 4)?;
                state.serialize_field("termType", TermKind::Literal.as_str())?;
                state.serialize_field("value", value.as_ref())?;
                state.serialize_field("datatype", datatype)?;
                state.serialize_field("language", &language.as_deref().unwrap_or(""))?;
                state.end()
            }
            other => {
                let mut state = serializer.serialize_struct("Term", 2)?;
                state.serialize_field("termType", other.kind().as_str())?;
                state.serialize_field("value", other.value())?;
                state.end()
            }
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::NamedNode(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "{}", id),
            Term::Literal {
                value,
                datatype,
                language,
            } => {
                write!(f, "\"{}\"", value)?;
                if let Some(lang) = language {
                    write!(f, "@{}", lang)
                } else if !datatype.is_xsd_string() {
                    write!(f, "^^<{}>", datatype)
                } else {
                    Ok(())
                }
            }
            Term::Variable(name) => write!(f, "?{}", name),
            Term::DefaultGraph => Ok(()),
        }
    }
}
