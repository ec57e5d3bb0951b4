//! # nlsql Configuration Library
//!
//! Type-safe configuration for the nlsql workspace: search budget, grammar
//! word lists, SQL assembly hints, LLM provider and parser endpoints, and
//! logging.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nlsql_config::ConfigLoader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load_from_file("nlsql.toml").await?;
//!     nlsql_config::logging::init_logging(&config.logging)?;
//!     println!("max edits: {}", config.search.max_edits);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
mod config;
mod loader;
pub mod logging;

pub use components::*;
pub use config::*;
pub use loader::*;
