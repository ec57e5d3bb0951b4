//! Logging configuration

use super::defaults::DEFAULT_LOG_LEVEL;
use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for nlsql crates (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Whether to include target/module
    pub include_target: bool,
    /// Extra `EnvFilter` directives, e.g. `"reqwest=warn"`
    pub directives: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
            include_target: true,
            directives: Vec::new(),
        }
    }
}
