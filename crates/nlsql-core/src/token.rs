//! Normalized dependency-parse tokens and sequences
//!
//! Every parser adapter produces this one shape, so nothing downstream ever
//! inspects which parser a token came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Reference from a token to its syntactic head.
///
/// Serialized as an integer; any negative value is [`HeadRef::Root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum HeadRef {
    /// No head
    Root,
    /// 0-based position in the owning sequence
    Index(usize),
}

impl From<i64> for HeadRef {
    fn from(value: i64) -> Self {
        if value < 0 {
            HeadRef::Root
        } else {
            HeadRef::Index(value as usize)
        }
    }
}

impl From<HeadRef> for i64 {
    fn from(head: HeadRef) -> Self {
        match head {
            HeadRef::Root => -1,
            HeadRef::Index(i) => i as i64,
        }
    }
}

/// One word with its dependency label and head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseToken {
    /// Surface text
    pub text: String,
    /// Dependency relation to the head (`nsubj`, `dobj`, `root`, ...)
    #[serde(alias = "dep")]
    pub dependency_label: String,
    /// Syntactic head
    pub head: HeadRef,
    /// Coarse part-of-speech tag, when the parser provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    /// Lemma, when the parser provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
}

impl ParseToken {
    /// Create a token. A negative `head` means ROOT.
    pub fn new(text: impl Into<String>, dependency_label: impl Into<String>, head: i64) -> Self {
        Self {
            text: text.into(),
            dependency_label: dependency_label.into(),
            head: HeadRef::from(head),
            pos: None,
            lemma: None,
        }
    }

    /// Attach a part-of-speech tag
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Attach a lemma
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// Case-insensitive label comparison
    pub fn has_label(&self, label: &str) -> bool {
        self.dependency_label.eq_ignore_ascii_case(label)
    }

    /// Part-of-speech tag, or `""` when unknown
    pub fn pos_or_empty(&self) -> &str {
        self.pos.as_deref().unwrap_or("")
    }
}

/// Immutable ordered token sequence.
///
/// Clones share the same backing storage; edits build a new sequence.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ParseToken>", into = "Vec<ParseToken>")]
pub struct ParseSequence {
    tokens: Arc<[ParseToken]>,
}

impl ParseSequence {
    /// Create a sequence from tokens
    pub fn new(tokens: Vec<ParseToken>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when there are no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Borrow the tokens
    pub fn tokens(&self) -> &[ParseToken] {
        &self.tokens
    }

    /// Iterate over the tokens
    pub fn iter(&self) -> std::slice::Iter<'_, ParseToken> {
        self.tokens.iter()
    }

    /// Token at `position`
    pub fn get(&self, position: usize) -> Option<&ParseToken> {
        self.tokens.get(position)
    }

    /// Resolve the head of the token at `position`.
    ///
    /// Returns `None` (synthetic ROOT) when the head is ROOT, out of bounds,
    /// or the token itself.
    pub fn head_of(&self, position: usize) -> Option<(usize, &ParseToken)> {
        match self.tokens.get(position)?.head {
            HeadRef::Index(head) if head != position => {
                self.tokens.get(head).map(|token| (head, token))
            }
            _ => None,
        }
    }

    /// New sequence with the token at `from` removed and reinserted at `to`.
    ///
    /// Head references travel with their tokens unchanged.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn with_move(&self, from: usize, to: usize) -> Self {
        let mut tokens = self.tokens.to_vec();
        let token = tokens.remove(from);
        tokens.insert(to, token);
        Self::new(tokens)
    }

    /// Surface texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

impl Default for ParseSequence {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<ParseToken>> for ParseSequence {
    fn from(tokens: Vec<ParseToken>) -> Self {
        Self::new(tokens)
    }
}

impl From<ParseSequence> for Vec<ParseToken> {
    fn from(sequence: ParseSequence) -> Self {
        sequence.tokens.to_vec()
    }
}

impl FromIterator<ParseToken> for ParseSequence {
    fn from_iter<I: IntoIterator<Item = ParseToken>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for ParseSequence {
    type Output = ParseToken;

    fn index(&self, position: usize) -> &Self::Output {
        &self.tokens[position]
    }
}

impl<'a> IntoIterator for &'a ParseSequence {
    type Item = &'a ParseToken;
    type IntoIter = std::slice::Iter<'a, ParseToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for ParseSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

/// Compact `text/label` rendering, e.g. `Bob/nsubj ate/root cake/dobj`
impl fmt::Display for ParseSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}/{}", token.text, token.dependency_label)?;
        }
        Ok(())
    }
}
