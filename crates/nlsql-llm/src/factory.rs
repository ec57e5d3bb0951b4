//! Provider construction from configuration

use crate::ollama::OllamaSqlProvider;
use crate::openai::OpenAiSqlProvider;
use nlsql_config::{Config, LlmConfig, LlmProviderType};
use nlsql_core::{LlmError, LlmResult, SqlCompletionProvider};
use std::sync::Arc;

/// Create a SQL completion provider from configuration
pub fn create_sql_provider(config: &LlmConfig) -> LlmResult<Arc<dyn SqlCompletionProvider>> {
    match config.provider {
        LlmProviderType::Ollama => {
            let provider = OllamaSqlProvider::new(
                config.llm_endpoint(),
                config.chat_model(),
                config.timeout_secs(),
            )
            .with_temperature(config.temperature())
            .with_max_tokens(config.max_tokens());
            Ok(Arc::new(provider))
        }
        LlmProviderType::OpenAI => {
            let key_env = config.api_key_env();
            let api_key = std::env::var(key_env)
                .map_err(|_| LlmError::ConfigError(format!("{} not set", key_env)))?;

            let provider = OpenAiSqlProvider::new(
                api_key,
                Some(config.llm_endpoint()),
                config.chat_model(),
                config.timeout_secs(),
            )
            .with_temperature(config.temperature())
            .with_max_tokens(config.max_tokens());
            Ok(Arc::new(provider))
        }
    }
}

/// Create the provider named in app config, if any
pub fn create_from_app_config(config: &Config) -> LlmResult<Option<Arc<dyn SqlCompletionProvider>>> {
    config.llm.as_ref().map(create_sql_provider).transpose()
}
