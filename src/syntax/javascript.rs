//! JavaScript-flavoured grammar.
//!
//! Good enough for highlighting: comments, strings, regex literals, numbers
//! and keywords. Not a JavaScript parser.

use super::grammar::{Grammar, TokenClass};
use super::rules::{RuleSpec, RuleTable};
use crate::error::GrammarError;

const KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "function", "break", "continue", "return", "var", "this",
    "new", "delete", "null", "undefined", "throw", "typeof", "import", "export", "default",
    "class", "extends", "from", "in", "of", "let", "const",
];

fn number() -> RuleSpec {
    RuleSpec::new(r"(0x|0X|0b|0B|0o)?[0-9]+", "num", "")
}

/// ASCII word characters only, so `é` stays unclassified
fn word() -> RuleSpec {
    RuleSpec::new(r"[0-9A-Za-z_]+", "alnum", "")
}

fn white() -> RuleSpec {
    RuleSpec::new(r"\s+", "white", "")
}

#[derive(Debug, Clone)]
pub struct JavaScript {
    table: RuleTable,
}

impl JavaScript {
    pub fn new() -> Result<Self, GrammarError> {
        let table = RuleTable::builder("open")
            .state(
                "open",
                [
                    RuleSpec::new(r"/\*", "comment", "mlcomment"),
                    RuleSpec::new(r"//", "comment", "slcomment"),
                    RuleSpec::new(r#"""#, "string", "dqstring"),
                    RuleSpec::new(r"'", "string", "sqstring"),
                    RuleSpec::new(r"(true|false)", "num", ""),
                    RuleSpec::new(r"/", "regex", "regex"),
                    number(),
                    word(),
                    white(),
                ],
            )
            .state(
                "slcomment",
                [RuleSpec::new(r"$", "comment", "open"), word(), white()],
            )
            .state(
                "mlcomment",
                [RuleSpec::new(r"\*/", "comment", "open"), word(), white()],
            )
            .state(
                "dqstring",
                [
                    RuleSpec::new(r"$", "string", "open"),
                    RuleSpec::new(r#"""#, "string", "open"),
                    RuleSpec::new(r#"\\""#, "string", ""),
                    word(),
                    white(),
                ],
            )
            .state(
                "sqstring",
                [
                    RuleSpec::new(r"$", "string", "open"),
                    RuleSpec::new(r"'", "string", "open"),
                    RuleSpec::new(r"\\'", "string", ""),
                    word(),
                    white(),
                ],
            )
            .state(
                "regex",
                [
                    RuleSpec::new(r"\\/", "regex", ""),
                    RuleSpec::new(r"/", "regex", "open"),
                    RuleSpec::new(r"$", "regex", "open"),
                ],
            )
            .build()?;

        Ok(Self { table })
    }
}

impl Grammar for JavaScript {
    fn name(&self) -> &str {
        "javascript"
    }

    fn rules(&self) -> &RuleTable {
        &self.table
    }

    fn classify(&self, kind: &str, before: &str, after: &str, text: &str) -> TokenClass {
        let inside = |state: &str| before == state && after == state;

        if kind == "comment" || inside("mlcomment") || inside("slcomment") {
            TokenClass::Comment
        } else if kind == "string" || inside("dqstring") || inside("sqstring") {
            TokenClass::String
        } else if kind == "alnum" && KEYWORDS.contains(&text) {
            TokenClass::Keyword
        } else if kind == "num" {
            TokenClass::Number
        } else if kind == "regex" || inside("regex") {
            TokenClass::String
        } else {
            TokenClass::Normal
        }
    }
}
