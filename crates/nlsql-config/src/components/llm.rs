//! SQL completion provider configuration

use super::defaults::{
    DEFAULT_API_KEY_ENV, DEFAULT_MAX_TOKENS, DEFAULT_OLLAMA_MODEL, DEFAULT_OPENAI_MODEL,
    DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};

/// LLM backend producing the alternative SQL candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// OpenAI-compatible chat completions API
    #[default]
    OpenAI,
    /// Local Ollama server
    Ollama,
}

/// LLM configuration - every field optional, accessors supply defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider to use
    #[serde(default)]
    pub provider: LlmProviderType,
    /// Chat model
    pub model: Option<String>,
    /// API base URL
    pub endpoint: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: Option<String>,
    /// Sampling temperature (0.0-2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl LlmConfig {
    /// Get the endpoint, using provider-specific default if not specified
    pub fn llm_endpoint(&self) -> String {
        self.endpoint.clone().unwrap_or_else(|| match self.provider {
            LlmProviderType::OpenAI => "https://api.openai.com/v1".to_string(),
            LlmProviderType::Ollama => "http://localhost:11434".to_string(),
        })
    }

    /// Get the model, using provider-specific default if not specified
    pub fn chat_model(&self) -> String {
        self.model.clone().unwrap_or_else(|| match self.provider {
            LlmProviderType::OpenAI => DEFAULT_OPENAI_MODEL.to_string(),
            LlmProviderType::Ollama => DEFAULT_OLLAMA_MODEL.to_string(),
        })
    }

    /// Get the API key variable name
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Get the temperature, using default if not specified
    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Get max tokens, using default if not specified
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Get timeout in seconds, using default if not specified
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
