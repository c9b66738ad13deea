//! Style lookups for terms
//!
//! [`StyleMatcher`] answers the builder's questions about a term (is it
//! hidden, duplicated, reversed, which classes does it carry) and owns the
//! class-name side table that the stylesheet is generated from.

use crate::config::{LayoutDirection, NodePresentation};
use crate::style_set::{StyleClass, StyleRuleId, StyleSet};
use rdfvis_graph_ir::Term;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Side table of generated class names, keyed by style object identity
///
/// Names are assigned on first use, so only styles that actually matched
/// something end up in the table (and in the stylesheet).
#[derive(Clone, Debug, Default)]
pub struct ClassNames {
    names: BTreeMap<StyleRuleId, String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// The class name of `id`, generating one if needed
    pub fn get_or_assign(&mut self, id: StyleRuleId) -> &str {
        self.names
            .entry(id)
            .or_insert_with(|| format!("class-{}", Uuid::new_v4()))
    }

    pub fn get(&self, id: StyleRuleId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Assigned names in style-object order
    pub fn iter(&self) -> impl Iterator<Item = (StyleRuleId, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

/// Term-level style queries over a compiled [`StyleSet`]
///
/// Only named nodes are ever styled; every query answers "no" for other
/// term kinds.
#[derive(Debug)]
pub struct StyleMatcher<'a> {
    styles: &'a StyleSet,
    class_names: ClassNames,
}

impl<'a> StyleMatcher<'a> {
    pub fn new(styles: &'a StyleSet) -> Self {
        Self {
            styles,
            class_names: ClassNames::new(),
        }
    }

    pub fn styles(&self) -> &'a StyleSet {
        self.styles
    }

    /// True if any matching style of `term` has the given node presentation
    pub fn present(&self, presentation: NodePresentation, term: &Term, class: StyleClass) -> bool {
        let Some(iri) = term.as_named() else {
            return false;
        };
        self.styles
            .resolve(iri, class)
            .into_iter()
            .any(|id| self.styles.rule(id).node_presentation == Some(presentation))
    }

    /// True if any matching edge style lays the edge out in reverse
    pub fn reverse_direction(&self, term: &Term) -> bool {
        let Some(iri) = term.as_named() else {
            return false;
        };
        self.styles
            .resolve(iri, StyleClass::Edge)
            .into_iter()
            .any(|id| self.styles.rule(id).layout_direction == Some(LayoutDirection::Reverse))
    }

    /// Generated class names for every style matching `term`, in match order
    pub fn class_names(&mut self, term: &Term, class: StyleClass) -> Vec<String> {
        let Some(iri) = term.as_named() else {
            return Vec::new();
        };
        self.styles
            .resolve(iri, class)
            .into_iter()
            .map(|id| self.class_names.get_or_assign(id).to_string())
            .collect()
    }

    /// Give up the matcher, keeping the class names it generated
    pub fn into_class_names(self) -> ClassNames {
        self.class_names
    }
}
