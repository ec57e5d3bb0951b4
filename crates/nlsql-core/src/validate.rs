//! Grammar-shape validation of candidate token orderings
//!
//! Two rules are checked independently for every token:
//!
//! - **Direct object**: a direct object headed by the governing verb needs a
//!   verb that may take an object without a preposition ("eat", "return", ...).
//! - **Subject support**: an abstract-collection subject ("report") of a
//!   composition verb ("consists") needs an earlier preposition or
//!   conjunction.
//!
//! Tokens whose head is ROOT, out of bounds, or themselves hang off a
//! synthetic ROOT with a neutral label and never trigger either rule.

use crate::token::ParseSequence;
use nlsql_config::GrammarConfig;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

static DEFAULT_VALIDATOR: LazyLock<TreeValidator> = LazyLock::new(TreeValidator::default);

/// Validate with the default rule set
pub fn is_valid(sequence: &ParseSequence) -> bool {
    DEFAULT_VALIDATOR.is_valid(sequence)
}

/// Lower-cased word lists and label sets
#[derive(Debug, Clone)]
pub struct GrammarRules {
    direct_action_verbs: HashSet<String>,
    abstract_nouns: HashSet<String>,
    composition_verbs: HashSet<String>,
    direct_object_labels: HashSet<String>,
    governing_verb_labels: HashSet<String>,
    subject_labels: HashSet<String>,
    support_labels: HashSet<String>,
}

fn lowered(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

impl From<&GrammarConfig> for GrammarRules {
    fn from(config: &GrammarConfig) -> Self {
        Self {
            direct_action_verbs: lowered(&config.direct_action_verbs),
            abstract_nouns: lowered(&config.abstract_nouns),
            composition_verbs: lowered(&config.composition_verbs),
            direct_object_labels: lowered(&config.direct_object_labels),
            governing_verb_labels: lowered(&config.governing_verb_labels),
            subject_labels: lowered(&config.subject_labels),
            support_labels: lowered(&config.support_labels),
        }
    }
}

impl Default for GrammarRules {
    fn default() -> Self {
        Self::from(&GrammarConfig::default())
    }
}

/// A rule broken by one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// Direct object governed by a verb outside the allow-list
    DirectObject {
        /// Position of the object
        position: usize,
        /// Position of the governing verb
        head_position: usize,
        /// The verb's surface text
        verb: String,
    },
    /// Abstract subject of a composition verb with no earlier preposition or conjunction
    MissingSupport {
        /// Position of the subject
        position: usize,
        /// Position of the composition verb
        head_position: usize,
        /// The subject's surface text
        subject: String,
    },
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::DirectObject {
                position,
                head_position,
                verb,
            } => write!(
                f,
                "token {} is a direct object of '{}' (token {}), which cannot govern one directly",
                position, verb, head_position
            ),
            RuleViolation::MissingSupport {
                position,
                head_position,
                subject,
            } => write!(
                f,
                "subject '{}' (token {}) of composition verb at token {} lacks a preceding preposition or conjunction",
                subject, position, head_position
            ),
        }
    }
}

/// Accepts or rejects candidate sequences. Pure.
#[derive(Debug, Clone, Default)]
pub struct TreeValidator {
    rules: GrammarRules,
}

impl TreeValidator {
    /// Create a validator with custom rules
    pub fn new(rules: GrammarRules) -> Self {
        Self { rules }
    }

    /// Create a validator from configuration
    pub fn from_config(config: &GrammarConfig) -> Self {
        Self::new(GrammarRules::from(config))
    }

    /// True iff no token violates a rule
    pub fn is_valid(&self, sequence: &ParseSequence) -> bool {
        (0..sequence.len()).all(|i| self.check_token(sequence, i).is_none())
    }

    /// Every violation, in token order
    pub fn violations(&self, sequence: &ParseSequence) -> Vec<RuleViolation> {
        (0..sequence.len())
            .filter_map(|i| self.check_token(sequence, i))
            .collect()
    }

    fn check_token(&self, sequence: &ParseSequence, position: usize) -> Option<RuleViolation> {
        let token = &sequence[position];
        let (head_position, head) = sequence.head_of(position)?;
        let label = token.dependency_label.to_lowercase();
        let head_text = head.text.to_lowercase();

        if self.rules.direct_object_labels.contains(&label)
            && self
                .rules
                .governing_verb_labels
                .contains(&head.dependency_label.to_lowercase())
            && !self.rules.direct_action_verbs.contains(&head_text)
        {
            return Some(RuleViolation::DirectObject {
                position,
                head_position,
                verb: head.text.clone(),
            });
        }

        if self.rules.subject_labels.contains(&label)
            && self.rules.abstract_nouns.contains(&token.text.to_lowercase())
            && self.rules.composition_verbs.contains(&head_text)
            && !self.has_support_before(sequence, position)
        {
            return Some(RuleViolation::MissingSupport {
                position,
                head_position,
                subject: token.text.clone(),
            });
        }

        None
    }

    fn has_support_before(&self, sequence: &ParseSequence, position: usize) -> bool {
        sequence.tokens()[..position].iter().any(|t| {
            self.rules
                .support_labels
                .contains(&t.dependency_label.to_lowercase())
        })
    }
}
