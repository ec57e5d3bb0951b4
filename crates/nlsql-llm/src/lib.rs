//! # nlsql LLM providers
//!
//! [`SqlCompletionProvider`](nlsql_core::SqlCompletionProvider)
//! implementations that ask a chat model to translate the question into SQL
//! directly. The answer is offered next to the parse-derived options.
//!
//! - [`OpenAiSqlProvider`] - OpenAI-compatible `/chat/completions`
//! - [`OllamaSqlProvider`] - local Ollama `/api/chat`
//!
//! Use [`create_sql_provider`] to build one from
//! [`LlmConfig`](nlsql_config::LlmConfig).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod factory;
pub mod ollama;
pub mod openai;
pub mod prompt;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use factory::{create_from_app_config, create_sql_provider};
pub use ollama::OllamaSqlProvider;
pub use openai::OpenAiSqlProvider;
pub use prompt::{extract_sql, user_prompt, SYSTEM_PROMPT};

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockSqlProvider;
