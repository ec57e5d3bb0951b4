//! Structural fingerprints for deduplicating candidate sequences
//!
//! The fingerprint covers each token's (text, dependency label) pair in
//! order. Head indices, POS tags and lemmas are deliberately left out, so two
//! orderings that read the same but disagree on attachment collapse into one
//! search state.

use crate::token::ParseSequence;
use std::fmt;

/// Order-sensitive BLAKE3 digest of a sequence's (text, label) pairs
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint a sequence
    pub fn of(sequence: &ParseSequence) -> Self {
        let mut hasher = blake3::Hasher::new();
        for token in sequence {
            // length prefixes keep ("ab","c") and ("a","bc") apart
            write_field(&mut hasher, &token.text);
            write_field(&mut hasher, &token.dependency_label);
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

fn write_field(hasher: &mut blake3::Hasher, field: &str) {
    hasher.update(&(field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}

/// Fingerprint a sequence
pub fn fingerprint(sequence: &ParseSequence) -> Fingerprint {
    Fingerprint::of(sequence)
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self)
    }
}

/// Short form: first 8 bytes in hex
impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0[..8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ParseToken;

    fn seq(tokens: &[(&str, &str, i64)]) -> ParseSequence {
        tokens
            .iter()
            .map(|(text, dep, head)| ParseToken::new(*text, *dep, *head))
            .collect()
    }

    #[test]
    fn test_deterministic() {
        let a = seq(&[("Bob", "nsubj", 1), ("ate", "root", -1)]);
        assert_eq!(fingerprint(&a), fingerprint(&a.clone()));
    }

    #[test]
    fn test_heads_ignored() {
        let a = seq(&[("Bob", "nsubj", 1), ("ate", "root", -1)]);
        let b = seq(&[("Bob", "nsubj", -1), ("ate", "root", 0)]);
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_pos_and_lemma_ignored() {
        let a = ParseSequence::new(vec![ParseToken::new("ran", "root", -1)]);
        let b = ParseSequence::new(vec![ParseToken::new("ran", "root", -1)
            .with_pos("VERB")
            .with_lemma("run")]);
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_order_sensitive() {
        let a = seq(&[("Bob", "nsubj", 1), ("ate", "root", -1)]);
        let b = seq(&[("ate", "root", -1), ("Bob", "nsubj", 1)]);
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_label_changes_fingerprint() {
        let a = seq(&[("cake", "dobj", 0)]);
        let b = seq(&[("cake", "pobj", 0)]);
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_field_boundaries_unambiguous() {
        let a = seq(&[("ab", "c", -1)]);
        let b = seq(&[("a", "bc", -1)]);
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn test_display_is_short_hex() {
        let fp = fingerprint(&ParseSequence::default());
        assert_eq!(fp.to_string().len(), 16);
        assert!(fp.to_hex().starts_with(&fp.to_string()));
    }
}
