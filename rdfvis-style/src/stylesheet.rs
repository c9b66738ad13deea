//! Stylesheet generation for the renderer
//!
//! The renderer styles elements by selector. The builder tags elements with
//! term-kind classes (`NamedNode`, `BlankNode`, ...), RDF display classes
//! (`ListGroup`, `ListNode`, `ListEdge`, `ValueNode`) and generated
//! `class-<uuid>` names; this module produces the matching rules.

use crate::matcher::ClassNames;
use crate::style_set::StyleSet;
use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};

/// One selector and the properties it applies
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StylesheetRule {
    pub selector: String,
    pub style: Map<String, JsonValue>,
}

impl StylesheetRule {
    fn new(selector: impl Into<String>, style: JsonValue) -> Self {
        let style = match style {
            JsonValue::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            selector: selector.into(),
            style,
        }
    }
}

fn base_rules() -> Vec<StylesheetRule> {
    vec![
        StylesheetRule::new(
            "edge",
            json!({
                "label": "data(text)",
                "width": 2,
                "arrow-scale": 2,
                "curve-style": "bezier",
                "line-color": "silver",
                "target-arrow-color": "silver",
                "target-arrow-shape": "vee",
                "text-rotation": "autorotate",
                "text-outline-color": "white",
                "text-outline-width": 2,
                "text-outline-opacity": 0.5
            }),
        ),
        StylesheetRule::new(
            "node",
            json!({
                "background-opacity": 0,
                "background-color": "silver",
                "border-color": "silver",
                "border-width": 4,
                "text-valign": "center",
                "text-halign": "center",
                "text-outline-color": "white",
                "text-outline-width": 4,
                "text-outline-opacity": 0.5
            }),
        ),
    ]
}

fn term_kind_rules() -> Vec<StylesheetRule> {
    vec![
        StylesheetRule::new(
            "node.NamedNode",
            json!({ "label": "data(text)", "width": 32, "height": 32 }),
        ),
        StylesheetRule::new("node.BlankNode", json!({ "width": 8, "height": 8 })),
        StylesheetRule::new("node.Literal", json!({ "display": "none" })),
        StylesheetRule::new("node.Variable", json!({ "display": "none" })),
        StylesheetRule::new("node.DefaultGraph", json!({ "display": "none" })),
    ]
}

fn rdf_rules() -> Vec<StylesheetRule> {
    vec![
        StylesheetRule::new(
            "node.ListGroup",
            json!({ "shape": "roundrectangle", "border-opacity": 0.5 }),
        ),
        StylesheetRule::new("node.ListNode", json!({ "width": 4, "height": 4 })),
        StylesheetRule::new("edge.ListEdge", json!({ "label": "" })),
        StylesheetRule::new("node.ValueNode", json!({ "width": 16, "height": 16 })),
    ]
}

/// Build the full stylesheet: defaults, then one rule per style object that
/// received a class name during the build
///
/// The visualizer's own directives (`node-presentation`, `layout-direction`)
/// are not renderer properties and are left out.
pub fn stylesheet(styles: &StyleSet, class_names: &ClassNames) -> Vec<StylesheetRule> {
    let mut rules = base_rules();
    rules.extend(term_kind_rules());
    rules.extend(rdf_rules());

    for (id, name) in class_names.iter() {
        rules.push(StylesheetRule {
            selector: format!(".{}", name),
            style: styles.rule(id).css.clone(),
        });
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, StyleClass, StyleMatcher};
    use rdfvis_graph_ir::Term;

    #[test]
    fn test_defaults_only_without_matches() {
        let styles = StyleSet::compile(&Config::default()).unwrap();
        let rules = stylesheet(&styles, &ClassNames::new());

        let selectors: Vec<_> = rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors[..2], ["edge", "node"]);
        assert!(selectors.contains(&"node.ListGroup"));
        assert!(selectors.contains(&"node.Literal"));
        assert_eq!(rules.len(), 11);
    }

    #[test]
    fn test_used_styles_become_class_rules() {
        let config = Config::from_json_value(json!({
            "style": { "node": {
                "http://example.org/a": { "color": "red", "node-presentation": "single" },
                "http://example.org/unused": { "color": "blue" }
            } }
        }))
        .unwrap();
        let styles = StyleSet::compile(&config).unwrap();

        let mut matcher = StyleMatcher::new(&styles);
        let classes = matcher.class_names(&Term::named("http://example.org/a"), StyleClass::Node);
        let rules = stylesheet(&styles, &matcher.into_class_names());

        let last = rules.last().unwrap();
        assert_eq!(last.selector, format!(".{}", classes[0]));
        assert_eq!(JsonValue::Object(last.style.clone()), json!({ "color": "red" }));
        assert_eq!(rules.len(), 12);
    }
}
