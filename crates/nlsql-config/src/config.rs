//! Root configuration type

use crate::components::{
    GrammarConfig, LlmConfig, LoggingConfig, ParserEndpointConfig, RenderConfig, SearchConfig,
};
use crate::loader::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Complete nlsql configuration. Every section has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reformulation search bounds
    pub search: SearchConfig,
    /// Tree validator word lists
    pub grammar: GrammarConfig,
    /// SQL assembly hints
    pub render: RenderConfig,
    /// Optional LLM provider for the alternative SQL option
    pub llm: Option<LlmConfig>,
    /// Dependency parser services, primary first
    pub parsers: Vec<ParserEndpointConfig>,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl Config {
    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> ConfigResult<()> {
        if self.render.default_table.trim().is_empty() {
            return Err(ConfigError::invalid("render.default_table must not be empty"));
        }
        if let Some(table) = self.render.tables.iter().find(|t| t.trim().is_empty()) {
            return Err(ConfigError::invalid(format!(
                "render.tables contains an empty name: {:?}",
                table
            )));
        }
        if let Some(llm) = &self.llm {
            let temperature = llm.temperature();
            if !temperature.is_finite() || !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigError::invalid(format!(
                    "llm.temperature must be within 0.0-2.0, got {}",
                    temperature
                )));
            }
        }
        for parser in &self.parsers {
            if parser.endpoint.trim().is_empty() {
                return Err(ConfigError::invalid(format!(
                    "parser '{}' has an empty endpoint",
                    parser.name
                )));
            }
        }
        Ok(())
    }
}
