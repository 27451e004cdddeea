//! Finite-state rule tables driving the tokenizer.
//!
//! A table is a set of named lexer states, each with an ordered list of
//! rules. Rules are tried in declaration order and the first one that matches
//! at the current offset wins, so more specific patterns must come first.

use std::sync::Arc;

use regex::Regex;
use serde::Deserialize;

use crate::error::GrammarError;

/// Index of a lexer state inside its [`RuleTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Uncompiled rule as written in code or in a grammar file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleSpec {
    /// Regular expression, implicitly anchored at the current offset
    pub pattern: String,
    /// Token type given to the matched text
    pub kind: String,
    /// State to switch to after the match; absent means stay
    #[serde(default)]
    pub next: Option<String>,
}

impl RuleSpec {
    /// An empty `next` keeps the current state
    pub fn new(pattern: &str, kind: &str, next: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            kind: kind.to_string(),
            next: (!next.is_empty()).then(|| next.to_string()),
        }
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    pattern: String,
    kind: Arc<str>,
    next: Option<StateId>,
}

impl Rule {
    /// The pattern as written, before anchoring
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn kind(&self) -> &Arc<str> {
        &self.kind
    }

    pub fn next(&self) -> Option<StateId> {
        self.next
    }

    /// Matched prefix of `input`, if any
    pub fn match_prefix<'t>(&self, input: &'t str) -> Option<&'t str> {
        self.regex.find(input).map(|m| m.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RuleTable {
    start: StateId,
    names: Vec<String>,
    states: Vec<Vec<Rule>>,
}

impl RuleTable {
    pub fn builder(start: &str) -> RuleTableBuilder {
        RuleTableBuilder {
            start: start.to_string(),
            states: Vec::new(),
        }
    }

    /// A table with a single state and no rules: everything is unclassified
    pub fn empty(start: &str) -> Self {
        Self {
            start: StateId(0),
            names: vec![start.to_string()],
            states: vec![Vec::new()],
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.names.len()
    }

    pub fn state_name(&self, state: StateId) -> &str {
        &self.names[state.0]
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.names.iter().position(|n| n == name).map(StateId)
    }

    pub fn rules(&self, state: StateId) -> &[Rule] {
        &self.states[state.0]
    }

    /// First rule of `state` consuming a non-empty prefix of `input`.
    ///
    /// Zero-length matches are skipped here: they cannot advance the scan.
    pub fn next_match<'t>(&self, state: StateId, input: &'t str) -> Option<(&Rule, &'t str)> {
        self.rules(state).iter().find_map(|rule| {
            rule.match_prefix(input)
                .filter(|text| !text.is_empty())
                .map(|text| (rule, text))
        })
    }

    /// First rule of `state` matching at end of line
    pub fn end_of_line_match(&self, state: StateId) -> Option<&Rule> {
        self.rules(state)
            .iter()
            .find(|rule| rule.match_prefix("").is_some())
    }
}

/// Collects named states, then resolves state names and compiles patterns.
#[derive(Debug, Clone)]
pub struct RuleTableBuilder {
    start: String,
    states: Vec<(String, Vec<RuleSpec>)>,
}

impl RuleTableBuilder {
    pub fn state<I>(mut self, name: &str, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleSpec>,
    {
        self.states
            .push((name.to_string(), rules.into_iter().collect()));
        self
    }

    pub fn build(self) -> Result<RuleTable, GrammarError> {
        let mut names: Vec<String> = Vec::with_capacity(self.states.len());
        for (name, _) in &self.states {
            if names.contains(name) {
                return Err(GrammarError::DuplicateState(name.clone()));
            }
            names.push(name.clone());
        }

        let lookup = |name: &str| {
            names
                .iter()
                .position(|n| n == name)
                .map(StateId)
                .ok_or_else(|| GrammarError::UnknownState(name.to_string()))
        };

        let start = lookup(&self.start)?;
        let mut states = Vec::with_capacity(self.states.len());

        for (state, specs) in &self.states {
            let mut rules = Vec::with_capacity(specs.len());
            for spec in specs {
                let regex = Regex::new(&format!("^(?:{})", spec.pattern)).map_err(|source| {
                    GrammarError::Pattern {
                        state: state.clone(),
                        pattern: spec.pattern.clone(),
                        source,
                    }
                })?;
                let next = spec.next.as_deref().map(lookup).transpose()?;
                rules.push(Rule {
                    regex,
                    pattern: spec.pattern.clone(),
                    kind: Arc::from(spec.kind.as_str()),
                    next,
                });
            }
            states.push(rules);
        }

        Ok(RuleTable {
            start,
            names,
            states,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::builder("open")
            .state(
                "open",
                [
                    RuleSpec::new(r"#", "comment", "comment"),
                    RuleSpec::new(r"\w+", "word", ""),
                ],
            )
            .state("comment", [RuleSpec::new(r"$", "comment", "open")])
            .build()
            .unwrap()
    }

    #[test]
    fn test_rules_are_anchored() {
        let table = table();
        let open = table.start();
        let (rule, text) = table.next_match(open, "abc def").unwrap();
        assert_eq!(&**rule.kind(), "word");
        assert_eq!(text, "abc");
        assert!(table.next_match(open, " abc").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let table = table();
        let (rule, _) = table.next_match(table.start(), "#x").unwrap();
        assert_eq!(&**rule.kind(), "comment");
        assert_eq!(rule.next(), table.state_id("comment"));
    }

    #[test]
    fn test_end_of_line_rule() {
        let table = table();
        let comment = table.state_id("comment").unwrap();
        assert!(table.next_match(comment, "x").is_none());
        let rule = table.end_of_line_match(comment).unwrap();
        assert_eq!(rule.next(), Some(table.start()));
        assert!(table.end_of_line_match(table.start()).is_none());
    }

    #[test]
    fn test_unknown_state_is_rejected() {
        let err = RuleTable::builder("open")
            .state("open", [RuleSpec::new("x", "x", "nowhere")])
            .build()
            .unwrap_err();
        assert!(matches!(err, GrammarError::UnknownState(name) if name == "nowhere"));

        let err = RuleTable::builder("missing").state("open", []).build().unwrap_err();
        assert!(matches!(err, GrammarError::UnknownState(_)));
    }

    #[test]
    fn test_duplicate_state_is_rejected() {
        let err = RuleTable::builder("open")
            .state("open", [])
            .state("open", [])
            .build()
            .unwrap_err();
        assert!(matches!(err, GrammarError::DuplicateState(_)));
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        let err = RuleTable::builder("open")
            .state("open", [RuleSpec::new("(", "x", "")])
            .build()
            .unwrap_err();
        assert!(matches!(err, GrammarError::Pattern { .. }));
    }
}
