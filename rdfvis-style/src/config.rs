//! Visualizer configuration value
//!
//! The configuration arrives from a loader collaborator (which handles files,
//! includes and merging). This module only defines its shape and how it is
//! deserialized from JSON:
//!
//! ```json
//! {
//!   "namespace": { "ex": "http://example.org/" },
//!   "style": {
//!     "type": { "ex:Person": { "border-color": "blue" } },
//!     "node": { "ex:hidden*": { "node-presentation": "none" } },
//!     "edge": { "ex:parentOf": { "layout-direction": "reverse" },
//!               "ex:childOf": "ex:parentOf",
//!               "ex:ignored": null }
//!   },
//!   "option": { "showTypeEdge": "unstyled" }
//! }
//! ```
//!
//! Style maps keep document order: when several patterns match one IRI,
//! their styles apply in the order they were written.

use crate::error::Result;
use crate::namespace::Namespaces;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// Top-level configuration
///
/// Unknown sections (sources, proxies) belong to other collaborators and are
/// ignored during deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// abbreviation => IRI prefix
    pub namespace: Namespaces,
    /// IRI glob => style | alias | removal
    pub style: StyleConfig,
    /// Misc. options
    pub option: Options,
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_value(value: JsonValue) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// The three pattern buckets
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(rename = "type")]
    pub type_: StyleMap,
    pub node: StyleMap,
    pub edge: StyleMap,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub show_type_edge: Option<ShowTypeEdge>,
}

impl Options {
    /// Effective type-edge policy; an absent policy shows every type edge
    pub fn type_edge_policy(&self) -> ShowTypeEdge {
        self.show_type_edge.unwrap_or_default()
    }
}

/// When `rdf:type` statements are drawn as edges in addition to tooltips
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowTypeEdge {
    Never,
    /// Only types that matched no type style
    Unstyled,
    #[default]
    Always,
}

/// Node presentation directive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePresentation {
    /// Rendered once and shared by every statement
    Single,
    /// A separate visual instance per incoming edge
    Multiple,
    /// Hidden
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    Forward,
    Reverse,
}

/// A style object: CSS-like properties plus the visualizer's directives
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct StyleRule {
    #[serde(
        rename = "node-presentation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub node_presentation: Option<NodePresentation>,

    #[serde(
        rename = "layout-direction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub layout_direction: Option<LayoutDirection>,

    /// Everything else, passed through to the renderer
    #[serde(flatten)]
    pub css: Map<String, JsonValue>,
}

/// One value of a style map
#[derive(Clone, Debug, PartialEq)]
pub enum StyleEntry {
    Rule(StyleRule),
    /// Reference to another pattern key in the same bucket
    Alias(String),
    /// Matches, but contributes no style
    Removed,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Alias(String),
    Rule(StyleRule),
}

/// Ordered pattern => entry map
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(String, StyleEntry)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; a repeated pattern replaces the earlier entry in place
    pub fn insert(&mut self, pattern: impl Into<String>, entry: StyleEntry) {
        let pattern = pattern.into();
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((pattern, entry)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(p, e)| (p.as_str(), e))
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of IRI patterns to style objects, aliases or null")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<StyleMap, A::Error> {
                let mut map = StyleMap::new();
                while let Some((pattern, raw)) = access.next_entry::<String, Option<RawEntry>>()? {
                    let entry = match raw {
                        Some(RawEntry::Alias(alias)) => StyleEntry::Alias(alias),
                        Some(RawEntry::Rule(rule)) => StyleEntry::Rule(rule),
                        None => StyleEntry::Removed,
                    };
                    map.insert(pattern, entry);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(StyleMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_keep_document_order() {
        let config = Config::from_json_value(json!({
            "style": {
                "node": {
                    "http://example.org/z*": { "color": "red" },
                    "http://example.org/a*": "http://example.org/z",
                    "http://example.org/m*": null
                }
            }
        }))
        .unwrap();

        let patterns: Vec<_> = config.style.node.iter().map(|(p, _)| p).collect();
        assert_eq!(
            patterns,
            vec![
                "http://example.org/z*",
                "http://example.org/a*",
                "http://example.org/m*"
            ]
        );

        let entries: Vec<_> = config.style.node.iter().map(|(_, e)| e.clone()).collect();
        assert!(matches!(entries[0], StyleEntry::Rule(_)));
        assert_eq!(entries[1], StyleEntry::Alias("http://example.org/z".into()));
        assert_eq!(entries[2], StyleEntry::Removed);
    }

    #[test]
    fn test_rule_directives_and_css() {
        let config = Config::from_json_value(json!({
            "style": {
                "edge": {
                    "ex:p": {
                        "node-presentation": "multiple",
                        "layout-direction": "reverse",
                        "line-color": "red"
                    }
                }
            }
        }))
        .unwrap();

        let (_, entry) = config.style.edge.iter().next().unwrap();
        let StyleEntry::Rule(rule) = entry else {
            panic!("expected a style rule");
        };
        assert_eq!(rule.node_presentation, Some(NodePresentation::Multiple));
        assert_eq!(rule.layout_direction, Some(LayoutDirection::Reverse));
        assert_eq!(rule.css.get("line-color"), Some(&json!("red")));
        assert!(!rule.css.contains_key("layout-direction"));
    }

    #[test]
    fn test_type_edge_policy() {
        let config = Config::default();
        assert_eq!(config.option.type_edge_policy(), ShowTypeEdge::Always);

        let config = Config::from_json_str(r#"{"option": {"showTypeEdge": "never"}}"#).unwrap();
        assert_eq!(config.option.type_edge_policy(), ShowTypeEdge::Never);

        let config = Config::from_json_str(r#"{"option": {"showTypeEdge": "unstyled"}}"#).unwrap();
        assert_eq!(config.option.type_edge_policy(), ShowTypeEdge::Unstyled);
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let config = Config::from_json_value(json!({
            "source": { "data/*.ttl": "text/turtle" },
            "proxy": { "http://example.org/": "./fixtures" }
        }))
        .unwrap();
        assert!(config.style.node.is_empty());
    }

    #[test]
    fn test_invalid_policy_is_an_error() {
        let err =
            Config::from_json_str(r#"{"option": {"showTypeEdge": "sometimes"}}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
