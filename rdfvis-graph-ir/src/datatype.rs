//! Literal datatype representation
//!
//! Datatypes are always explicit: plain strings use `xsd:string` and
//! language-tagged strings use `rdf:langString`.

use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Common XSD and RDF datatype IRIs (re-exported from the vocab crate)
pub mod iri {
    pub use rdfvis_vocab::rdf::LANG_STRING as RDF_LANG_STRING;
    pub use rdfvis_vocab::xsd::{
        BOOLEAN as XSD_BOOLEAN, DOUBLE as XSD_DOUBLE, INTEGER as XSD_INTEGER,
        STRING as XSD_STRING,
    };
}

/// RDF literal datatype, always an expanded IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain literals
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(iri::RDF_LANG_STRING)
    }

    pub fn as_iri(&self) -> &str {
        &self.0
    }

    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }

    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_LANG_STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_iri())
    }
}

/// Serializes as the bare IRI string
impl Serialize for Datatype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_iri())
    }
}
