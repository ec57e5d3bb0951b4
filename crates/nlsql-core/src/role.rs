//! Semantic roles relevant to SQL construction and the default lookup-table
//! classifier.

use crate::token::ParseSequence;
use crate::traits::RoleClassifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a token contributes to the SQL statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticRole {
    /// Central action verb ("return", "show")
    #[serde(rename = "SN")]
    Select,
    /// Aggregate or modifier ("average")
    #[serde(rename = "FN")]
    Function,
    /// Table, column or entity name
    #[serde(rename = "NN")]
    Name,
    /// Literal value
    #[serde(rename = "VN")]
    Value,
    /// Quantifier ("all", "each")
    #[serde(rename = "QN")]
    Quantifier,
    /// Logical connective ("and", "or", "not")
    #[serde(rename = "LN")]
    Logic,
    /// Comparison or relating word ("by", "=")
    #[serde(rename = "ON")]
    Operator,
    /// Nothing SQL-relevant
    Unknown,
}

impl SemanticRole {
    /// Short code used in logs and option descriptions
    pub fn code(&self) -> &'static str {
        match self {
            SemanticRole::Select => "SN",
            SemanticRole::Function => "FN",
            SemanticRole::Name => "NN",
            SemanticRole::Value => "VN",
            SemanticRole::Quantifier => "QN",
            SemanticRole::Logic => "LN",
            SemanticRole::Operator => "ON",
            SemanticRole::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const LOGIC_WORDS: &[&str] = &["and", "or", "not"];
const QUANTIFIER_WORDS: &[&str] = &["all", "any", "each", "every"];

/// Lookup-table classifier over (label, POS, head POS).
///
/// Needs POS tags; tokens without one can still be Logic, Quantifier or
/// Unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    /// Classify the token at `position`
    pub fn classify_token(&self, sequence: &ParseSequence, position: usize) -> SemanticRole {
        let token = &sequence[position];
        let dep = token.dependency_label.to_lowercase();
        let pos = token.pos_or_empty().to_uppercase();
        let head_pos = sequence
            .head_of(position)
            .map(|(_, head)| head.pos_or_empty().to_uppercase())
            .unwrap_or_else(|| "ROOT".to_string());
        let text = token.text.to_lowercase();

        determine_role(&dep, &pos, &head_pos, &text)
    }
}

fn determine_role(dep: &str, pos: &str, head_pos: &str, text: &str) -> SemanticRole {
    match (dep, pos) {
        ("root", "VERB") => SemanticRole::Select,
        ("amod" | "acomp", _) if head_pos == "NOUN" => SemanticRole::Function,
        (_, "NUM") => SemanticRole::Value,
        ("nsubj", "NOUN") => SemanticRole::Name,
        ("pobj" | "dobj" | "obj", "NOUN" | "PROPN") => SemanticRole::Name,
        _ if LOGIC_WORDS.contains(&text) => SemanticRole::Logic,
        _ if QUANTIFIER_WORDS.contains(&text) => SemanticRole::Quantifier,
        ("prep" | "agent", _) if head_pos == "VERB" => SemanticRole::Operator,
        _ => SemanticRole::Unknown,
    }
}

impl RoleClassifier for RuleBasedClassifier {
    fn classify(&self, sequence: &ParseSequence) -> Vec<SemanticRole> {
        (0..sequence.len())
            .map(|i| self.classify_token(sequence, i))
            .collect()
    }
}
