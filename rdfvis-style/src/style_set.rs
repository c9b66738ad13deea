//! Compiled style configuration
//!
//! `StyleSet::compile` turns the three pattern buckets of a [`Config`] into
//! glob matchers, moves every style object into an arena addressed by
//! [`StyleRuleId`], and rejects alias cycles. Resolution on a compiled set is
//! plain recursion: the configuration it walks is known to be acyclic.

use crate::config::{Config, Options, StyleEntry, StyleMap, StyleRule};
use crate::error::{Result, StyleError};
use crate::namespace::Namespaces;
use globset::{GlobBuilder, GlobMatcher};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which pattern bucket a lookup runs against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleClass {
    Type,
    Node,
    Edge,
}

impl StyleClass {
    pub const ALL: [StyleClass; 3] = [StyleClass::Type, StyleClass::Node, StyleClass::Edge];

    fn index(self) -> usize {
        match self {
            StyleClass::Type => 0,
            StyleClass::Node => 1,
            StyleClass::Edge => 2,
        }
    }
}

/// Identity of one style object in the configuration
///
/// Two patterns that alias the same object resolve to the same id, which is
/// what class-name memoization keys on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleRuleId(u32);

impl StyleRuleId {
    pub fn index(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone)]
enum Target {
    Rule(StyleRuleId),
    Alias(String),
    Removed,
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    pattern: String,
    matcher: GlobMatcher,
    target: Target,
}

/// Configuration compiled for matching
#[derive(Debug, Clone)]
pub struct StyleSet {
    rules: Vec<StyleRule>,
    buckets: [Vec<CompiledPattern>; 3],
    namespaces: Namespaces,
    options: Options,
}

impl StyleSet {
    /// Compile a configuration
    ///
    /// Pattern keys and alias strings may use namespace abbreviations; both
    /// are expanded before compilation.
    pub fn compile(config: &Config) -> Result<Self> {
        let mut set = StyleSet {
            rules: Vec::new(),
            buckets: Default::default(),
            namespaces: config.namespace.clone(),
            options: config.option.clone(),
        };

        set.compile_bucket(StyleClass::Type, &config.style.type_)?;
        set.compile_bucket(StyleClass::Node, &config.style.node)?;
        set.compile_bucket(StyleClass::Edge, &config.style.edge)?;

        for class in StyleClass::ALL {
            set.check_aliases(class)?;
        }

        debug!(
            type_patterns = set.buckets[0].len(),
            node_patterns = set.buckets[1].len(),
            edge_patterns = set.buckets[2].len(),
            rules = set.rules.len(),
            "compiled style configuration"
        );
        Ok(set)
    }

    fn compile_bucket(&mut self, class: StyleClass, map: &StyleMap) -> Result<()> {
        // keys that expand to the same pattern collapse; the later entry wins
        let mut expanded = StyleMap::new();
        for (key, entry) in map.iter() {
            expanded.insert(self.namespaces.expand(key), entry.clone());
        }

        for (pattern, entry) in expanded.iter() {
            let pattern = pattern.to_string();
            let matcher = GlobBuilder::new(&pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| StyleError::invalid_pattern(pattern.clone(), source))?
                .compile_matcher();

            let target = match entry {
                StyleEntry::Rule(rule) => {
                    let id = StyleRuleId(self.rules.len() as u32);
                    self.rules.push(rule.clone());
                    Target::Rule(id)
                }
                StyleEntry::Alias(alias) => Target::Alias(self.namespaces.expand(alias)),
                StyleEntry::Removed => Target::Removed,
            };

            self.buckets[class.index()].push(CompiledPattern {
                pattern,
                matcher,
                target,
            });
        }
        Ok(())
    }

    /// Reject any alias whose resolution reaches itself again
    fn check_aliases(&self, class: StyleClass) -> Result<()> {
        for compiled in &self.buckets[class.index()] {
            if let Target::Alias(alias) = &compiled.target {
                let mut chain = vec![compiled.pattern.clone(), alias.clone()];
                self.walk_alias(alias, class, &mut chain)?;
            }
        }
        Ok(())
    }

    fn walk_alias(&self, uri: &str, class: StyleClass, chain: &mut Vec<String>) -> Result<()> {
        for compiled in self.matching(uri, class) {
            if let Target::Alias(next) = &compiled.target {
                if chain[1..].contains(next) {
                    let mut chain = chain.clone();
                    chain.push(next.clone());
                    return Err(StyleError::AliasCycle { chain });
                }
                chain.push(next.clone());
                self.walk_alias(next, class, chain)?;
                chain.pop();
            }
        }
        Ok(())
    }

    fn matching<'a>(
        &'a self,
        uri: &'a str,
        class: StyleClass,
    ) -> impl Iterator<Item = &'a CompiledPattern> + 'a {
        self.buckets[class.index()]
            .iter()
            .filter(move |compiled| compiled.matcher.is_match(uri))
    }

    /// All style objects that apply to `uri`, in pattern order
    ///
    /// Aliases are resolved in place, so an alias contributes the styles of
    /// its target at the alias's position.
    pub fn resolve(&self, uri: &str, class: StyleClass) -> Vec<StyleRuleId> {
        let mut found = Vec::new();
        self.resolve_into(uri, class, &mut found);
        found
    }

    fn resolve_into(&self, uri: &str, class: StyleClass, found: &mut Vec<StyleRuleId>) {
        for compiled in self.matching(uri, class) {
            match &compiled.target {
                Target::Rule(id) => found.push(*id),
                Target::Alias(alias) => self.resolve_into(alias, class, found),
                Target::Removed => {}
            }
        }
    }

    pub fn rule(&self, id: StyleRuleId) -> &StyleRule {
        &self.rules[id.0 as usize]
    }

    pub fn rules(&self) -> impl Iterator<Item = (StyleRuleId, &StyleRule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (StyleRuleId(i as u32), rule))
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
