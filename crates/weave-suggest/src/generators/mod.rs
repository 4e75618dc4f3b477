//! Candidate generators, one per strategy. All share the same shape: read
//! from the stores, drop excluded and non-suggestible profiles, assign a
//! strategy-specific base score.

pub mod mutual;
pub mod popularity;
pub mod proximity;
pub mod recency;

use std::collections::HashSet;

use weave_core::errors::{SuggestError, WeaveResult};
use weave_core::graph::{UserId, UserProfile};
use weave_core::models::SuggestionQuery;
use weave_core::strategy::Strategy;
use weave_core::traits::{IEdgeStore, IProfileStore};

/// A user profile produced by a generator, not yet scored or enriched.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub profile: UserProfile,
    /// Strategy-assigned starting score; bonuses land in the scoring stage.
    pub base_score: f64,
    /// Two-hop fan-in count. Zero except for the mutual strategy, where the
    /// enrichment pass later confirms it.
    pub mutual_count: u64,
}

/// Run the generator selected by the query. Returns the candidates plus the
/// strategy that actually ran (proximity falls back to popularity when no
/// location is resolvable).
pub fn generate(
    profiles: &dyn IProfileStore,
    edges: &dyn IEdgeStore,
    user: &UserId,
    query: &SuggestionQuery,
    exclusions: &HashSet<UserId>,
    fetch_limit: usize,
) -> WeaveResult<(Vec<Candidate>, Strategy)> {
    let run = || -> WeaveResult<(Vec<Candidate>, Strategy)> {
        match query.strategy {
            Strategy::Mutual => mutual::generate(profiles, edges, user, exclusions, fetch_limit)
                .map(|c| (c, Strategy::Mutual)),
            Strategy::Popularity => popularity::generate(profiles, query, exclusions, fetch_limit)
                .map(|c| (c, Strategy::Popularity)),
            Strategy::Recency => recency::generate(profiles, query, exclusions, fetch_limit)
                .map(|c| (c, Strategy::Recency)),
            Strategy::Proximity => {
                proximity::generate(profiles, user, query, exclusions, fetch_limit)
            }
        }
    };
    run().map_err(|e| {
        SuggestError::GenerationFailed {
            strategy: query.strategy.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
