//! Recency strategy: newest accounts first, optional location filter.
//!
//! The base score is flat; recency is expressed through ordering at
//! generation time, plus a time-decayed bonus in the scoring stage.

use std::collections::HashSet;

use weave_core::errors::WeaveResult;
use weave_core::graph::UserId;
use weave_core::models::SuggestionQuery;
use weave_core::traits::IProfileStore;

use super::Candidate;

const BASE_SCORE: f64 = 5.0;

pub fn generate(
    profiles: &dyn IProfileStore,
    query: &SuggestionQuery,
    exclusions: &HashSet<UserId>,
    fetch_limit: usize,
) -> WeaveResult<Vec<Candidate>> {
    let store_limit = fetch_limit.saturating_add(exclusions.len());
    let rows = profiles.recent_profiles(query.location.as_deref(), store_limit)?;

    Ok(rows
        .into_iter()
        .filter(|p| p.is_suggestible() && !exclusions.contains(&p.id))
        .take(fetch_limit)
        .map(|p| Candidate {
            base_score: BASE_SCORE,
            mutual_count: 0,
            profile: p,
        })
        .collect())
}
