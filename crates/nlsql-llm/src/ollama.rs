//! Ollama SQL completion provider

use crate::prompt::{extract_sql, user_prompt, SYSTEM_PROMPT};
use async_trait::async_trait;
use nlsql_config::components::defaults::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use nlsql_core::{LlmError, LlmResult, SqlCompletionProvider};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Ollama SQL completion provider
pub struct OllamaSqlProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl OllamaSqlProvider {
    /// Create a new Ollama provider
    pub fn new(base_url: String, model: String, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Set sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token limit (`num_predict`)
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn request_body(&self, query: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt(query) },
            ],
            "stream": false,
            "options": {
                "temperature": self.temperature,
                "num_predict": self.max_tokens,
                "top_p": 1.0,
            },
        })
    }
}

#[async_trait]
impl SqlCompletionProvider for OllamaSqlProvider {
    fn provider_name(&self) -> &str {
        "Ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete_sql(&self, query: &str) -> LlmResult<String> {
        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&self.request_body(query))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LlmError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::InvalidResponse(format!(
                "Ollama API error ({}): {}",
                status, error_text
            )));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let sql = extract_sql(&ollama_response.message.content)?;
        debug!(
            model = %self.model,
            eval_count = ?ollama_response.eval_count,
            "Ollama returned SQL"
        );
        Ok(sql)
    }
}

// Ollama API response types
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
    #[serde(default)]
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}
