//! Cross-parser alignment
//!
//! Parses from different parsers are combined position by position, which is
//! only meaningful when they tokenized the question identically. Length
//! agreement is checked up front and a mismatch is an error, never a silent
//! best effort.

use crate::error::{ShapeError, ShapeResult};
use crate::role::SemanticRole;
use crate::token::ParseSequence;
use crate::traits::RoleClassifier;

/// Require every named sequence to have the same length as the first.
pub fn ensure_same_length<'a, I>(sequences: I) -> ShapeResult<()>
where
    I: IntoIterator<Item = (&'a str, &'a ParseSequence)>,
{
    let mut iter = sequences.into_iter();
    let Some((first_name, first)) = iter.next() else {
        return Ok(());
    };

    for (name, sequence) in iter {
        if sequence.len() != first.len() {
            return Err(ShapeError::LengthMismatch {
                left_source: first_name.to_string(),
                left_len: first.len(),
                right_source: name.to_string(),
                right_len: sequence.len(),
            });
        }
    }
    Ok(())
}

/// Which parse a merged position was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseSide {
    /// First parser
    Primary,
    /// Second parser
    Secondary,
}

/// Sequence and roles built by picking, per position, the more informative parse
#[derive(Debug, Clone)]
pub struct MergedParse {
    /// Tokens taken from the chosen side at each position
    pub sequence: ParseSequence,
    /// Chosen role at each position
    pub roles: Vec<SemanticRole>,
    /// Side chosen at each position
    pub sides: Vec<ParseSide>,
}

/// Two positionally aligned parses of the same question
#[derive(Debug, Clone)]
pub struct AlignedParse<'a> {
    primary: &'a ParseSequence,
    secondary: &'a ParseSequence,
}

impl<'a> AlignedParse<'a> {
    /// Pair two parses, failing if their lengths differ
    pub fn new(
        primary_name: &str,
        primary: &'a ParseSequence,
        secondary_name: &str,
        secondary: &'a ParseSequence,
    ) -> ShapeResult<Self> {
        ensure_same_length([(primary_name, primary), (secondary_name, secondary)])?;
        Ok(Self { primary, secondary })
    }

    /// Number of aligned positions
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// True when both parses are empty
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Classify both parses and merge position by position.
    ///
    /// The secondary parser's role wins unless it is `Unknown`; then the
    /// primary's role is used if known; when both are unknown the secondary
    /// token is kept.
    pub fn merge(&self, classifier: &dyn RoleClassifier) -> ShapeResult<MergedParse> {
        let primary_roles = classify_checked(classifier, self.primary)?;
        let secondary_roles = classify_checked(classifier, self.secondary)?;

        let mut tokens = Vec::with_capacity(self.len());
        let mut roles = Vec::with_capacity(self.len());
        let mut sides = Vec::with_capacity(self.len());

        for (i, (primary_role, secondary_role)) in
            primary_roles.into_iter().zip(secondary_roles).enumerate()
        {
            let side = if secondary_role == SemanticRole::Unknown
                && primary_role != SemanticRole::Unknown
            {
                ParseSide::Primary
            } else {
                ParseSide::Secondary
            };
            let (token, role) = match side {
                ParseSide::Primary => (&self.primary[i], primary_role),
                ParseSide::Secondary => (&self.secondary[i], secondary_role),
            };
            tokens.push(token.clone());
            roles.push(role);
            sides.push(side);
        }

        Ok(MergedParse {
            sequence: ParseSequence::new(tokens),
            roles,
            sides,
        })
    }
}

/// Classify and require one role per token
pub fn classify_checked(
    classifier: &dyn RoleClassifier,
    sequence: &ParseSequence,
) -> ShapeResult<Vec<SemanticRole>> {
    let roles = classifier.classify(sequence);
    if roles.len() != sequence.len() {
        return Err(ShapeError::RoleCountMismatch {
            tokens: sequence.len(),
            roles: roles.len(),
        });
    }
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::ParseToken;

    /// Classifies by a fixed text → role table
    struct TableClassifier(&'static [(&'static str, SemanticRole)]);

    impl RoleClassifier for TableClassifier {
        fn classify(&self, sequence: &ParseSequence) -> Vec<SemanticRole> {
            sequence
                .iter()
                .map(|t| {
                    self.0
                        .iter()
                        .find(|(text, _)| *text == t.text)
                        .map(|(_, role)| *role)
                        .unwrap_or(SemanticRole::Unknown)
                })
                .collect()
        }
    }

    struct ShortClassifier;

    impl RoleClassifier for ShortClassifier {
        fn classify(&self, _sequence: &ParseSequence) -> Vec<SemanticRole> {
            vec![SemanticRole::Select]
        }
    }

    fn words(texts: &[&str]) -> ParseSequence {
        texts.iter().map(|t| ParseToken::new(*t, "dep", -1)).collect()
    }

    #[test]
    fn test_same_length_ok() {
        let a = words(&["a", "b"]);
        let b = words(&["a", "b"]);
        assert!(ensure_same_length([("spacy", &a), ("stanza", &b)]).is_ok());
        assert!(ensure_same_length(std::iter::empty()).is_ok());
    }

    #[test]
    fn test_length_mismatch_names_both_sources() {
        let a = words(&["a", "b", "c"]);
        let b = words(&["a", "b"]);

        let err = AlignedParse::new("spacy", &a, "stanza", &b).unwrap_err();

        assert_eq!(
            err,
            ShapeError::LengthMismatch {
                left_source: "spacy".to_string(),
                left_len: 3,
                right_source: "stanza".to_string(),
                right_len: 2,
            }
        );
        assert!(err.to_string().contains("stanza has 2"));
    }

    #[test]
    fn test_merge_prefers_secondary_then_primary() {
        let primary = words(&["Return", "Bob", "x"]);
        let secondary = words(&["return", "bob", "x"]);
        let classifier = TableClassifier(&[
            ("Return", SemanticRole::Select),
            ("return", SemanticRole::Select),
            ("Bob", SemanticRole::Name),
        ]);

        let aligned = AlignedParse::new("spacy", &primary, "stanza", &secondary).unwrap();
        let merged = aligned.merge(&classifier).unwrap();

        assert_eq!(
            merged.roles,
            vec![SemanticRole::Select, SemanticRole::Name, SemanticRole::Unknown]
        );
        assert_eq!(
            merged.sides,
            vec![ParseSide::Secondary, ParseSide::Primary, ParseSide::Secondary]
        );
        assert_eq!(merged.sequence.texts(), vec!["return", "Bob", "x"]);
    }

    #[test]
    fn test_classifier_role_count_checked() {
        let sequence = words(&["a", "b"]);
        let err = classify_checked(&ShortClassifier, &sequence).unwrap_err();

        assert_eq!(err, ShapeError::RoleCountMismatch { tokens: 2, roles: 1 });
    }
}
