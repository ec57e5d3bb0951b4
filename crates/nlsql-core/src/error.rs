//! Core error types
//!
//! The reformulation core is permissive about imperfect parser output (bad
//! head indices are read as ROOT). The one thing it refuses is input whose
//! shape makes downstream results meaningless, reported as [`ShapeError`].

use crate::traits::ParseError;
use thiserror::Error;

/// Unsupported input shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Two sequences expected to be positionally aligned differ in length
    #[error(
        "Sequence length mismatch: {left_source} has {left_len} tokens but {right_source} has {right_len}"
    )]
    LengthMismatch {
        /// Name of the reference sequence
        left_source: String,
        /// Length of the reference sequence
        left_len: usize,
        /// Name of the mismatching sequence
        right_source: String,
        /// Length of the mismatching sequence
        right_len: usize,
    },

    /// Role labels do not cover the sequence one-to-one
    #[error("Role labels cover {roles} tokens but the sequence has {tokens}")]
    RoleCountMismatch {
        /// Tokens in the sequence
        tokens: usize,
        /// Role labels supplied
        roles: usize,
    },
}

/// Specialized Result type for shape checks
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Errors surfaced by [`crate::pipeline::QueryPipeline`]
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Parser output could not be combined
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A parser collaborator failed
    #[error("Parser '{parser}' failed: {source}")]
    Parse {
        /// Parser name
        parser: String,
        /// Underlying failure
        #[source]
        source: ParseError,
    },

    /// Pipeline built without any parser
    #[error("No dependency parser configured")]
    NoParsers,

    /// Blank question
    #[error("Question is empty")]
    EmptyQuestion,
}

/// Specialized Result type for pipeline runs
pub type PipelineResult<T> = Result<T, PipelineError>;
