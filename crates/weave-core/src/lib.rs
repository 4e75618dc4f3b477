//! # weave-core
//!
//! Foundation crate for the Weave suggestion engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod models;
pub mod strategy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WeaveConfig;
pub use errors::{WeaveError, WeaveResult};
pub use graph::{
    ConnectionEdge, ConnectionRequest, RequestRef, RequestStatus, UserId, UserProfile,
};
pub use models::{Suggestion, SuggestionPage, SuggestionQuery};
pub use strategy::Strategy;
