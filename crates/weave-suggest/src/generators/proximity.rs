//! Proximity strategy: same-location accounts, most-followed first.
//!
//! Resolves the location from the query, then from the requesting user's
//! own profile. With neither available the call runs the popularity
//! strategy unchanged (a documented fallback, not an error).

use std::collections::HashSet;

use tracing::debug;

use weave_core::errors::WeaveResult;
use weave_core::graph::UserId;
use weave_core::models::SuggestionQuery;
use weave_core::strategy::Strategy;
use weave_core::traits::IProfileStore;

use super::{popularity, Candidate};

const BASE_SCORE: f64 = 8.0;

pub fn generate(
    profiles: &dyn IProfileStore,
    user: &UserId,
    query: &SuggestionQuery,
    exclusions: &HashSet<UserId>,
    fetch_limit: usize,
) -> WeaveResult<(Vec<Candidate>, Strategy)> {
    let location = match query.location.as_deref().filter(|l| !l.is_empty()) {
        Some(loc) => Some(loc.to_string()),
        None => profiles
            .get_profile(user)?
            .and_then(|p| p.location)
            .filter(|l| !l.is_empty()),
    };

    let Some(location) = location else {
        debug!(user = %user, "no location resolvable, falling back to popularity");
        let candidates = popularity::generate(profiles, query, exclusions, fetch_limit)?;
        return Ok((candidates, Strategy::Popularity));
    };

    let store_limit = fetch_limit.saturating_add(exclusions.len());
    let rows = profiles.profiles_by_location(&location, store_limit)?;

    let candidates = rows
        .into_iter()
        .filter(|p| p.is_suggestible() && !exclusions.contains(&p.id))
        .take(fetch_limit)
        .map(|p| Candidate {
            base_score: BASE_SCORE,
            mutual_count: 0,
            profile: p,
        })
        .collect();
    Ok((candidates, Strategy::Proximity))
}
