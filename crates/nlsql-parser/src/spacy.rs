//! spaCy `Doc.to_json()` adapter
//!
//! ```json
//! {"text": "Bob ate cake",
//!  "tokens": [{"id": 0, "start": 0, "end": 3, "pos": "PROPN", "dep": "nsubj", "head": 1, "lemma": "Bob"}, ...]}
//! ```
//!
//! Offsets are character offsets into `text`; heads are token ids and the
//! sentence root points at itself.

use nlsql_core::{ParseError, ParseResult, ParseSequence, ParseToken};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serialized spaCy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacyDoc {
    /// Original text
    pub text: String,
    /// Tokens in document order
    #[serde(default)]
    pub tokens: Vec<SpacyToken>,
}

/// One token of a serialized spaCy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacyToken {
    /// Token id (document index)
    pub id: usize,
    /// Start character offset
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
    /// Coarse part-of-speech tag
    #[serde(default)]
    pub pos: Option<String>,
    /// Dependency label
    pub dep: String,
    /// Id of the syntactic head
    pub head: usize,
    /// Lemma
    #[serde(default)]
    pub lemma: Option<String>,
}

/// Parse a `Doc.to_json()` payload
pub fn from_spacy_json(json: &str) -> ParseResult<ParseSequence> {
    let doc: SpacyDoc = serde_json::from_str(json)
        .map_err(|e| ParseError::InvalidResponse(format!("Invalid spaCy document: {}", e)))?;
    from_spacy_doc(&doc)
}

/// Normalize a deserialized spaCy document
pub fn from_spacy_doc(doc: &SpacyDoc) -> ParseResult<ParseSequence> {
    let positions: HashMap<usize, usize> = doc
        .tokens
        .iter()
        .enumerate()
        .map(|(position, token)| (token.id, position))
        .collect();
    let offsets = CharOffsets::new(&doc.text);

    doc.tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            let line = position + 1;
            let text = offsets.slice(token.start, token.end).ok_or_else(|| {
                ParseError::format(
                    line,
                    format!("span {}..{} outside text", token.start, token.end),
                )
            })?;

            let head = if token.head == token.id {
                -1
            } else {
                let head_position = positions.get(&token.head).ok_or_else(|| {
                    ParseError::format(line, format!("unknown head id {}", token.head))
                })?;
                *head_position as i64
            };

            let mut parsed = ParseToken::new(text, token.dep.to_lowercase(), head);
            if let Some(pos) = &token.pos {
                parsed = parsed.with_pos(pos.clone());
            }
            if let Some(lemma) = &token.lemma {
                parsed = parsed.with_lemma(lemma.clone());
            }
            Ok(parsed)
        })
        .collect::<ParseResult<Vec<_>>>()
        .map(ParseSequence::new)
}

/// Character → byte offset table
struct CharOffsets<'a> {
    text: &'a str,
    bytes: Vec<usize>,
}

impl<'a> CharOffsets<'a> {
    fn new(text: &'a str) -> Self {
        let bytes = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { text, bytes }
    }

    fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        if start > end {
            return None;
        }
        let from = *self.bytes.get(start)?;
        let to = *self.bytes.get(end)?;
        self.text.get(from..to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nlsql_core::HeadRef;

    const BOB_ATE_CAKE: &str = r#"{
        "text": "Bob ate cake",
        "ents": [],
        "sents": [{"start": 0, "end": 12}],
        "tokens": [
            {"id": 0, "start": 0, "end": 3, "tag": "NNP", "pos": "PROPN", "morph": "", "lemma": "Bob", "dep": "nsubj", "head": 1},
            {"id": 1, "start": 4, "end": 7, "tag": "VBD", "pos": "VERB", "morph": "", "lemma": "eat", "dep": "ROOT", "head": 1},
            {"id": 2, "start": 8, "end": 12, "tag": "NN", "pos": "NOUN", "morph": "", "lemma": "cake", "dep": "dobj", "head": 1}
        ]
    }"#;

    #[test]
    fn test_adapts_doc_json() {
        let sequence = from_spacy_json(BOB_ATE_CAKE).unwrap();

        assert_eq!(sequence.texts(), vec!["Bob", "ate", "cake"]);
        assert_eq!(sequence[0].head, HeadRef::Index(1));
        assert_eq!(sequence[1].head, HeadRef::Root);
        assert_eq!(sequence[1].dependency_label, "root");
        assert_eq!(sequence[1].pos.as_deref(), Some("VERB"));
        assert_eq!(sequence[1].lemma.as_deref(), Some("eat"));
    }

    #[test]
    fn test_offsets_are_characters() {
        let doc = SpacyDoc {
            text: "Zoë ate".to_string(),
            tokens: vec![
                SpacyToken {
                    id: 0,
                    start: 0,
                    end: 3,
                    pos: None,
                    dep: "nsubj".to_string(),
                    head: 1,
                    lemma: None,
                },
                SpacyToken {
                    id: 1,
                    start: 4,
                    end: 7,
                    pos: None,
                    dep: "ROOT".to_string(),
                    head: 1,
                    lemma: None,
                },
            ],
        };

        let sequence = from_spacy_doc(&doc).unwrap();
        assert_eq!(sequence.texts(), vec!["Zoë", "ate"]);
    }

    #[test]
    fn test_span_outside_text() {
        let json = r#"{"text": "Bob", "tokens": [{"id": 0, "start": 0, "end": 9, "dep": "ROOT", "head": 0}]}"#;
        assert!(matches!(
            from_spacy_json(json),
            Err(ParseError::Format { line: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_head() {
        let json = r#"{"text": "Bob", "tokens": [{"id": 0, "start": 0, "end": 3, "dep": "nsubj", "head": 4}]}"#;
        assert!(matches!(
            from_spacy_json(json),
            Err(ParseError::Format { line: 1, .. })
        ));
    }

    #[test]
    fn test_not_a_doc() {
        assert!(matches!(
            from_spacy_json("[1, 2, 3]"),
            Err(ParseError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_empty_doc() {
        let sequence = from_spacy_json(r#"{"text": ""}"#).unwrap();
        assert!(sequence.is_empty());
    }
}
