use serde::{Deserialize, Serialize};

use crate::graph::{RequestRef, UserProfile};
use crate::strategy::Strategy;

/// A fully enriched, scored candidate ready for response serialization.
/// Suggestions are derived at request time and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub profile: UserProfile,
    /// Total number of the requesting user's connections that follow this
    /// candidate. May exceed `mutual_sample.len()`.
    pub mutual_count: u64,
    /// Up to [`crate::constants::MUTUAL_SAMPLE_CAP`] mutual-connection
    /// profiles, sorted by id.
    pub mutual_sample: Vec<UserProfile>,
    pub relevance_score: f64,
    /// Request from the viewer toward this candidate, any status.
    pub outgoing_request: Option<RequestRef>,
    /// Request from this candidate toward the viewer, any status.
    pub incoming_request: Option<RequestRef>,
    /// True only when no request exists in either direction.
    pub can_send_request: bool,
}

impl Suggestion {
    /// Wrap a bare profile with no enrichment data.
    pub fn unenriched(profile: UserProfile) -> Self {
        Self {
            profile,
            mutual_count: 0,
            mutual_sample: Vec::new(),
            relevance_score: 0.0,
            outgoing_request: None,
            incoming_request: None,
            can_send_request: true,
        }
    }
}

/// One page of suggestions plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionPage {
    pub suggestions: Vec<Suggestion>,
    /// Candidate count before pagination.
    pub total_count: usize,
    /// True iff `total_count > offset + limit`.
    pub has_more: bool,
    /// The strategy that actually produced the page (proximity may fall
    /// back to popularity).
    pub strategy_used: Strategy,
}
