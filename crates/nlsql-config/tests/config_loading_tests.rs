//! Config file loading tests
//!
//! Environment overrides mutate process state, so those tests run serially.

use nlsql_config::{Config, ConfigError, ConfigLoader, LlmProviderType, ParserFormat};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

const FULL_TOML: &str = r#"
[search]
max_edits = 2

[grammar]
direct_action_verbs = ["return", "returns"]

[render]
default_table = "papers"
tables = ["papers", "authors"]

[render.operator_columns]
by = "author"

[llm]
provider = "ollama"
model = "qwen2.5-coder"

[[parsers]]
name = "spacy"
endpoint = "http://localhost:8001/parse"

[[parsers]]
name = "stanza"
endpoint = "http://localhost:8002/parse"
format = "conllu"

[logging]
level = "debug"
"#;

fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn clear_env() {
    std::env::remove_var("NLSQL_MAX_EDITS");
    std::env::remove_var("NLSQL_LOG");
    std::env::remove_var("NLSQL_LLM_MODEL");
}

#[tokio::test]
#[serial]
async fn test_load_full_toml() {
    clear_env();
    let file = write_temp(".toml", FULL_TOML);

    let config = ConfigLoader::load_from_file(file.path()).await.unwrap();

    assert_eq!(config.search.max_edits, 2);
    assert_eq!(config.grammar.direct_action_verbs, vec!["return", "returns"]);
    assert_eq!(config.render.tables, vec!["papers", "authors"]);
    let llm = config.llm.as_ref().unwrap();
    assert_eq!(llm.provider, LlmProviderType::Ollama);
    assert_eq!(llm.chat_model(), "qwen2.5-coder");
    assert_eq!(config.parsers.len(), 2);
    assert_eq!(config.parsers[1].format, ParserFormat::Conllu);
    assert_eq!(config.logging.level, "debug");
}

#[tokio::test]
#[serial]
async fn test_load_empty_toml_gives_defaults() {
    clear_env();
    let file = write_temp(".toml", "");

    let config = ConfigLoader::load_from_file(file.path()).await.unwrap();

    assert_eq!(config, Config::default());
}

#[tokio::test]
#[serial]
async fn test_load_json() {
    clear_env();
    let file = write_temp(".json", r#"{"search": {"max_edits": 7}}"#);

    let config = ConfigLoader::load_from_file(file.path()).await.unwrap();

    assert_eq!(config.search.max_edits, 7);
}

#[tokio::test]
#[serial]
async fn test_unknown_extension_rejected() {
    clear_env();
    let file = write_temp(".ini", "max_edits=1");

    let result = ConfigLoader::load_from_file(file.path()).await;

    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"));
}

#[tokio::test]
#[serial]
async fn test_missing_file_is_io_error() {
    clear_env();
    let result = ConfigLoader::load_from_file("/nonexistent/nlsql.toml").await;

    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[tokio::test]
#[serial]
async fn test_env_overrides_applied() {
    clear_env();
    std::env::set_var("NLSQL_MAX_EDITS", "9");
    std::env::set_var("NLSQL_LLM_MODEL", "gpt-4o-mini");
    let file = write_temp(".toml", FULL_TOML);

    let config = ConfigLoader::load_from_file(file.path()).await.unwrap();
    clear_env();

    assert_eq!(config.search.max_edits, 9);
    assert_eq!(config.llm.unwrap().model.as_deref(), Some("gpt-4o-mini"));
}

#[tokio::test]
#[serial]
async fn test_bad_env_override_rejected() {
    clear_env();
    std::env::set_var("NLSQL_MAX_EDITS", "lots");
    let file = write_temp(".toml", "");

    let result = ConfigLoader::load_from_file(file.path()).await;
    clear_env();

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_toml_type_error_surfaces() {
    let result = ConfigLoader::from_toml_str("[search]\nmax_edits = \"three\"");

    assert!(matches!(result, Err(ConfigError::Toml(_))));
}
