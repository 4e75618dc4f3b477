//! Mutual strategy: two-hop fan-in over the requesting user's connections.

use std::collections::{HashMap, HashSet};

use weave_core::errors::WeaveResult;
use weave_core::graph::{UserId, UserProfile};
use weave_core::traits::{IEdgeStore, IProfileStore};

use super::Candidate;

/// Base score per mutual connection.
const BASE_WEIGHT: f64 = 10.0;

/// For every edge leaving one of the user's connections, tally how many of
/// those connections point at the same (non-excluded) target. Candidates
/// are ordered by fan-in count descending, then id, before truncation, so
/// output is deterministic.
pub fn generate(
    profiles: &dyn IProfileStore,
    edges: &dyn IEdgeStore,
    user: &UserId,
    exclusions: &HashSet<UserId>,
    fetch_limit: usize,
) -> WeaveResult<Vec<Candidate>> {
    let own = edges.following(user)?;
    if own.is_empty() {
        return Ok(Vec::new());
    }

    let fan_out = edges.outgoing_edges_of(&own)?;
    let mut counts: HashMap<UserId, u64> = HashMap::new();
    for edge in fan_out {
        if exclusions.contains(&edge.followee_id) {
            continue;
        }
        *counts.entry(edge.followee_id).or_default() += 1;
    }

    let mut tallies: Vec<(UserId, u64)> = counts.into_iter().collect();
    tallies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tallies.truncate(fetch_limit);

    let ids: Vec<UserId> = tallies.iter().map(|(id, _)| id.clone()).collect();
    let fetched = profiles.get_profiles(&ids)?;
    let by_id: HashMap<&UserId, &UserProfile> = fetched.iter().map(|p| (&p.id, p)).collect();

    let mut candidates = Vec::with_capacity(tallies.len());
    for (id, count) in &tallies {
        let Some(profile) = by_id.get(id) else {
            continue;
        };
        if !profile.is_suggestible() {
            continue;
        }
        candidates.push(Candidate {
            profile: (*profile).clone(),
            base_score: *count as f64 * BASE_WEIGHT,
            mutual_count: *count,
        });
    }
    Ok(candidates)
}
