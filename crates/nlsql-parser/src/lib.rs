//! # nlsql parsers
//!
//! Adapters that turn the output of external dependency parsers into the
//! normalized [`ParseSequence`](nlsql_core::ParseSequence) shape, plus an
//! HTTP client implementing [`DependencyParser`](nlsql_core::DependencyParser)
//! for parser services.
//!
//! Each adapter owns the quirks of its format (character offsets, 1-based
//! heads, self-referencing roots) so the core never needs to know which
//! parser produced a token.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod conllu;
pub mod http;
pub mod spacy;

pub use conllu::parse_conllu;
pub use http::{create_parsers, HttpDependencyParser};
pub use spacy::{from_spacy_doc, from_spacy_json, SpacyDoc, SpacyToken};
