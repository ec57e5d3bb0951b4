//! Configuration loading from files, strings and the environment

use crate::config::Config;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Overrides `search.max_edits`
pub const ENV_MAX_EDITS: &str = "NLSQL_MAX_EDITS";
/// Overrides `logging.level`
pub const ENV_LOG: &str = "NLSQL_LOG";
/// Overrides `llm.model` when an LLM section exists
pub const ENV_LLM_MODEL: &str = "NLSQL_LLM_MODEL";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or type error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or type error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension not recognised
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Semantically invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create an invalid-value error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Specialized Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Loads [`Config`] values
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load, apply environment overrides and validate a config file.
    ///
    /// The format is chosen by extension: `.toml` or `.json`.
    pub async fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Config> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        debug!(path = %path.display(), bytes = contents.len(), "Loaded config file");

        let mut config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document
    pub fn from_toml_str(contents: &str) -> ConfigResult<Config> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(contents: &str) -> ConfigResult<Config> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Apply `NLSQL_*` environment variables on top of a loaded config
    pub fn apply_env_overrides(config: &mut Config) -> ConfigResult<()> {
        if let Ok(value) = std::env::var(ENV_MAX_EDITS) {
            config.search.max_edits = value.trim().parse().map_err(|_| {
                ConfigError::invalid(format!("{} must be a non-negative integer, got {:?}", ENV_MAX_EDITS, value))
            })?;
        }

        if let Ok(level) = std::env::var(ENV_LOG) {
            config.logging.level = level;
        }

        if let Ok(model) = std::env::var(ENV_LLM_MODEL) {
            match config.llm.as_mut() {
                Some(llm) => llm.model = Some(model),
                None => warn!("{} set but no [llm] section is configured", ENV_LLM_MODEL),
            }
        }

        Ok(())
    }
}
