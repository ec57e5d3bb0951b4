//! Configuration components, one per concern.

pub mod defaults;
pub mod grammar;
pub mod llm;
pub mod logging;
pub mod parsers;
pub mod render;
pub mod search;

pub use grammar::*;
pub use llm::*;
pub use logging::*;
pub use parsers::*;
pub use render::*;
pub use search::*;
