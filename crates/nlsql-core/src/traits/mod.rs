//! Collaborator abstractions
//!
//! The core defines these traits; parser services, LLM clients and role
//! classifiers are implemented elsewhere and injected by the caller.

pub mod classifier;
pub mod llm;
pub mod parser;

pub use classifier::RoleClassifier;
pub use llm::{LlmError, LlmResult, SqlCompletionProvider};
pub use parser::{DependencyParser, ParseError, ParseResult};
