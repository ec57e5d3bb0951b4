//! Default values shared by configuration components.

/// Default edit budget for reformulation search
pub const DEFAULT_MAX_EDITS: usize = 3;

/// Default table when no configured table is mentioned
pub const DEFAULT_TABLE: &str = "publications";

/// Default OpenAI chat model
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Default Ollama chat model
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Default environment variable holding the OpenAI API key
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default sampling temperature for SQL completions
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default completion length for SQL completions
pub const DEFAULT_MAX_TOKENS: u32 = 150;

/// Default HTTP timeout for collaborator services
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
