//! SQL completion provider abstraction

use async_trait::async_trait;
use thiserror::Error;

/// LLM error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    /// Transport failure
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Unexpected status or body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing key or unusable settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The model answered with nothing
    #[error("Empty completion")]
    EmptyCompletion,
}

/// Specialized Result type for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Turns a natural-language question directly into one SQL string.
#[async_trait]
pub trait SqlCompletionProvider: Send + Sync {
    /// Provider name for logs and option labels
    fn provider_name(&self) -> &str;

    /// Model used for completions
    fn model(&self) -> &str;

    /// Produce one SQL statement for `query`
    async fn complete_sql(&self, query: &str) -> LlmResult<String>;
}
