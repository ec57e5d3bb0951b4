//! OpenAI SQL completion provider

use crate::prompt::{extract_sql, user_prompt, SYSTEM_PROMPT};
use async_trait::async_trait;
use nlsql_config::components::defaults::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use nlsql_core::{LlmError, LlmResult, SqlCompletionProvider};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// OpenAI SQL completion provider
pub struct OpenAiSqlProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl OpenAiSqlProvider {
    /// Create a new OpenAI provider
    pub fn new(api_key: String, base_url: Option<String>, model: String, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
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

    /// Set the completion token limit
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
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "top_p": 1.0,
            "frequency_penalty": 0.0,
            "presence_penalty": 0.0,
        })
    }
}

#[async_trait]
impl SqlCompletionProvider for OpenAiSqlProvider {
    fn provider_name(&self) -> &str {
        "OpenAI"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete_sql(&self, query: &str) -> LlmResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
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
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let openai_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))?;

        let sql = extract_sql(&choice.message.content.unwrap_or_default())?;
        debug!(model = %self.model, finish_reason = ?choice.finish_reason, "OpenAI returned SQL");
        Ok(sql)
    }
}

// OpenAI API response types
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}
