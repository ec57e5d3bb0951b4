//! # nlsql core
//!
//! Turns dependency parses of a natural-language question into candidate SQL.
//!
//! The heart of the crate is the parse-tree [reformulation search](search):
//! a bounded breadth-first walk over single-token moves of the parsed
//! sentence, keeping the orderings that pass the grammar-shape
//! [validator](validate) and deduplicating them by [fingerprint].
//!
//! ## Example
//!
//! ```rust
//! use nlsql_core::{reformulate, ParseSequence, ParseToken};
//!
//! let seed = ParseSequence::new(vec![
//!     ParseToken::new("Bob", "nsubj", 1),
//!     ParseToken::new("ate", "root", -1),
//!     ParseToken::new("cake", "dobj", 1),
//! ]);
//!
//! let candidates = reformulate(&[seed.clone()], 1).unwrap();
//! assert_eq!(candidates, vec![seed]);
//! ```
//!
//! Parsers, LLM clients and role classifiers are collaborators defined as
//! [traits] and injected into the [pipeline].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod align;
pub mod error;
pub mod fingerprint;
pub mod permute;
pub mod pipeline;
pub mod render;
pub mod role;
pub mod search;
pub mod token;
pub mod traits;
pub mod validate;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use align::{AlignedParse, MergedParse, ParseSide};
pub use error::{PipelineError, PipelineResult, ShapeError, ShapeResult};
pub use fingerprint::{fingerprint, Fingerprint};
pub use permute::neighbors;
pub use pipeline::{OptionOrigin, QueryPipeline, QueryPipelineBuilder, SqlOption};
pub use render::{RenderedQuery, SqlRenderer};
pub use role::{RuleBasedClassifier, SemanticRole};
pub use search::{reformulate, ReformulationSearch, SearchOutcome, SearchStats};
pub use token::{HeadRef, ParseSequence, ParseToken};
pub use traits::{
    DependencyParser, LlmError, LlmResult, ParseError, ParseResult, RoleClassifier,
    SqlCompletionProvider,
};
pub use validate::{is_valid, GrammarRules, RuleViolation, TreeValidator};
