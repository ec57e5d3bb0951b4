//! Semantic role classification abstraction

use crate::role::SemanticRole;
use crate::token::ParseSequence;

/// Labels every token of a sequence with a [`SemanticRole`].
///
/// Implementations must return exactly one role per token.
pub trait RoleClassifier: Send + Sync {
    /// Classify each token, in order
    fn classify(&self, sequence: &ParseSequence) -> Vec<SemanticRole>;
}
