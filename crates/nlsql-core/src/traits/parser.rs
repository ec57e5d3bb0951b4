//! Dependency parser abstraction

use crate::token::ParseSequence;
use async_trait::async_trait;
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Transport failure talking to a parser service
    #[error("HTTP error: {0}")]
    Http(String),

    /// Service answered with something unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Malformed parser output
    #[error("Format error at line {line}: {message}")]
    Format {
        /// 1-based line (or token) number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// Nothing to parse
    #[error("Empty input")]
    EmptyInput,
}

impl ParseError {
    /// Create a format error
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

/// Specialized Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Produces a normalized dependency parse for a question.
#[async_trait]
pub trait DependencyParser: Send + Sync {
    /// Name used in logs and alignment errors
    fn name(&self) -> &str;

    /// Parse `query` into one token sequence
    async fn parse(&self, query: &str) -> ParseResult<ParseSequence>;
}
