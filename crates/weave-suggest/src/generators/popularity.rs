//! Popularity strategy: follower-count range filter, most-followed first.

use std::collections::HashSet;

use weave_core::errors::WeaveResult;
use weave_core::graph::UserId;
use weave_core::models::SuggestionQuery;
use weave_core::traits::IProfileStore;

use super::Candidate;

/// Base score per follower.
const BASE_WEIGHT: f64 = 0.1;

pub fn generate(
    profiles: &dyn IProfileStore,
    query: &SuggestionQuery,
    exclusions: &HashSet<UserId>,
    fetch_limit: usize,
) -> WeaveResult<Vec<Candidate>> {
    // The store cannot see the exclusion set, so ask for enough extra rows
    // to survive pruning.
    let store_limit = fetch_limit.saturating_add(exclusions.len());
    let rows = profiles.profiles_by_follower_range(
        query.min_followers,
        query.max_followers,
        store_limit,
    )?;

    Ok(rows
        .into_iter()
        .filter(|p| p.is_suggestible() && !exclusions.contains(&p.id))
        .take(fetch_limit)
        .map(|p| Candidate {
            base_score: p.follower_count as f64 * BASE_WEIGHT,
            mutual_count: 0,
            profile: p,
        })
        .collect())
}
