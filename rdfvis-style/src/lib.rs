//! Style configuration and matching for rdfvis
//!
//! Styles are keyed by IRI glob patterns in three buckets (`type`, `node`,
//! `edge`). A matched entry is either a style object, a string alias to
//! another pattern key, or `null`.
//!
//! # Example
//!
//! ```
//! use rdfvis_style::{Config, NodePresentation, StyleClass, StyleMatcher, StyleSet};
//! use rdfvis_graph_ir::Term;
//!
//! let config = Config::from_json_str(r#"{
//!     "namespace": { "ex": "http://example.org/" },
//!     "style": { "node": { "ex:secret*": { "node-presentation": "none" } } }
//! }"#).unwrap();
//!
//! let styles = StyleSet::compile(&config).unwrap();
//! let matcher = StyleMatcher::new(&styles);
//!
//! let term = Term::named("http://example.org/secretKey");
//! assert!(matcher.present(NodePresentation::None, &term, StyleClass::Node));
//! ```
//!
//! # Alias cycles
//!
//! Alias resolution recurses without a guard, so a configuration must not
//! contain aliases that resolve back onto themselves. `StyleSet::compile`
//! enforces this and fails with [`StyleError::AliasCycle`].

pub mod config;
pub mod error;
pub mod matcher;
pub mod namespace;
pub mod style_set;
pub mod stylesheet;

pub use config::{
    Config, LayoutDirection, NodePresentation, Options, ShowTypeEdge, StyleConfig, StyleEntry,
    StyleMap, StyleRule,
};
pub use error::{Result, StyleError};
pub use matcher::{ClassNames, StyleMatcher};
pub use namespace::Namespaces;
pub use style_set::{StyleClass, StyleRuleId, StyleSet};
pub use stylesheet::{stylesheet, StylesheetRule};
