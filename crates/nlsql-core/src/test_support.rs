//! Test helpers shared with other crates through the `test-utils` feature

use crate::token::{ParseSequence, ParseToken};
use crate::traits::{
    DependencyParser, LlmResult, ParseResult, SqlCompletionProvider,
};
use async_trait::async_trait;

/// Build a sequence from `(text, label, head)` triples; negative head = ROOT
pub fn sequence(tokens: &[(&str, &str, i64)]) -> ParseSequence {
    tokens
        .iter()
        .map(|(text, dep, head)| ParseToken::new(*text, *dep, *head))
        .collect()
}

/// Build a sequence from `(text, label, head, pos)` tuples
pub fn tagged(tokens: &[(&str, &str, i64, &str)]) -> ParseSequence {
    tokens
        .iter()
        .map(|(text, dep, head, pos)| ParseToken::new(*text, *dep, *head).with_pos(*pos))
        .collect()
}

/// "Return the average number of publications by Bob" as a spaCy-style parse
pub fn publications_question() -> ParseSequence {
    tagged(&[
        ("Return", "ROOT", -1, "VERB"),
        ("the", "det", 3, "DET"),
        ("average", "amod", 3, "ADJ"),
        ("number", "dobj", 0, "NOUN"),
        ("of", "prep", 3, "ADP"),
        ("publications", "pobj", 4, "NOUN"),
        ("by", "prep", 0, "ADP"),
        ("Bob", "pobj", 6, "PROPN"),
    ])
}

/// Parser returning a fixed result for any question
pub struct StaticParser {
    name: String,
    result: ParseResult<ParseSequence>,
}

impl StaticParser {
    /// Parser that always succeeds with `sequence`
    pub fn new(name: impl Into<String>, sequence: ParseSequence) -> Self {
        Self {
            name: name.into(),
            result: Ok(sequence),
        }
    }

    /// Parser that always fails with `error`
    pub fn failing(name: impl Into<String>, error: crate::traits::ParseError) -> Self {
        Self {
            name: name.into(),
            result: Err(error),
        }
    }
}

#[async_trait]
impl DependencyParser for StaticParser {
    fn name(&self) -> &str {
        &self.name
    }

    async fn parse(&self, _query: &str) -> ParseResult<ParseSequence> {
        self.result.clone()
    }
}

/// Completion provider returning a fixed result
pub struct StaticCompletion {
    result: LlmResult<String>,
}

impl StaticCompletion {
    /// Provider answering every question with `sql`
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            result: Ok(sql.into()),
        }
    }

    /// Provider failing every request with `error`
    pub fn failing(error: crate::traits::LlmError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl SqlCompletionProvider for StaticCompletion {
    fn provider_name(&self) -> &str {
        "static"
    }

    fn model(&self) -> &str {
        "static-model"
    }

    async fn complete_sql(&self, _query: &str) -> LlmResult<String> {
        self.result.clone()
    }
}
