//! Process-wide `tracing` subscriber setup
//!
//! Libraries in this workspace only emit events; binaries and test harnesses
//! call [`init_logging`] once to see them.

use crate::components::LoggingConfig;
use crate::loader::{ConfigError, ConfigResult};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const CRATES: &[&str] = &["nlsql_config", "nlsql_core", "nlsql_parser", "nlsql_llm"];

/// Build the `EnvFilter` directive string for a logging config
pub fn build_filter_string(config: &LoggingConfig) -> String {
    let mut filter = CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, config.level))
        .collect::<Vec<_>>();
    filter.extend(config.directives.iter().cloned());
    filter.join(",")
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(config: &LoggingConfig) -> ConfigResult<()> {
    let filter = EnvFilter::try_new(build_filter_string(config))
        .map_err(|e| ConfigError::invalid(format!("log filter: {}", e)))?;
    let include_target = config.include_target;
    let json = config.json;

    INIT.call_once(move || {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(include_target);
        // Another subscriber may already be installed by the host; keep it.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });

    tracing::debug!(level = %config.level, json, "Logging initialized");
    Ok(())
}
