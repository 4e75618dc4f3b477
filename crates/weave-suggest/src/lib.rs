//! # weave-suggest
//!
//! The connection-suggestion engine: exclusion-set resolution, the four
//! candidate generators, mutual-connection and request-status enrichment,
//! composite relevance scoring, deterministic ranking/pagination, and the
//! connection-request writer.

pub mod engine;
pub mod enrich;
pub mod exclusion;
pub mod generators;
pub mod ranking;
pub mod writer;

pub use engine::SuggestionEngine;
pub use generators::Candidate;
