//! Dependency parser endpoint configuration

use super::defaults::DEFAULT_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};

/// Wire format returned by a parser service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserFormat {
    /// spaCy `Doc.to_json()` output
    #[default]
    Spacy,
    /// CoNLL-U text, as produced by Stanza
    Conllu,
}

/// One parser service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserEndpointConfig {
    /// Name used in logs and alignment errors
    pub name: String,
    /// URL receiving `{"text": ...}` POST requests
    pub endpoint: String,
    /// Response format
    #[serde(default)]
    pub format: ParserFormat,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl ParserEndpointConfig {
    /// Get timeout in seconds, using default if not specified
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
