//! Grammar-shape rule configuration
//!
//! Word lists are matched case-insensitively against surface text, so
//! inflected forms are listed explicitly rather than lemmatized.

use serde::{Deserialize, Serialize};

/// Word lists and dependency label sets used by the tree validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Verbs allowed to govern a direct object without a preposition
    pub direct_action_verbs: Vec<String>,
    /// Nouns naming an abstract collection ("report", "document", ...)
    pub abstract_nouns: Vec<String>,
    /// Verbs describing composition ("consist", "comprise", ...)
    pub composition_verbs: Vec<String>,
    /// Labels marking a direct object
    pub direct_object_labels: Vec<String>,
    /// Labels marking the governing verb of the sentence
    pub governing_verb_labels: Vec<String>,
    /// Labels marking a nominal subject
    pub subject_labels: Vec<String>,
    /// Labels that count as a supporting preposition or conjunction
    pub support_labels: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            direct_action_verbs: words(&[
                "eat", "eats", "ate", "eaten", "eating",
                "see", "sees", "saw", "seen", "seeing",
                "write", "writes", "wrote", "written", "writing",
                "modify", "modifies", "modified", "modifying",
                "create", "creates", "created", "creating",
                "handle", "handles", "handled", "handling",
                "return", "returns", "returned", "returning",
            ]),
            abstract_nouns: words(&[
                "information", "report", "reports", "document", "documents",
            ]),
            composition_verbs: words(&[
                "consist", "consists", "consisted", "consisting",
                "comprise", "comprises", "comprised", "comprising",
                "include", "includes", "included", "including",
            ]),
            direct_object_labels: words(&["dobj", "obj"]),
            governing_verb_labels: words(&["root"]),
            subject_labels: words(&["nsubj"]),
            support_labels: words(&["prep", "conj"]),
        }
    }
}
