//! Mutual-connection enrichment: for each candidate, how many of the
//! viewer's own connections follow them, and a small profile sample.

use std::collections::{BTreeSet, HashMap};

use weave_core::constants::MUTUAL_SAMPLE_CAP;
use weave_core::errors::WeaveResult;
use weave_core::graph::{UserId, UserProfile};
use weave_core::traits::{IEdgeStore, IProfileStore};

/// Mutual-connection data for one candidate.
#[derive(Debug, Clone, Default)]
pub struct MutualConnections {
    /// True total; may exceed `sample.len()`.
    pub count: u64,
    /// Up to [`MUTUAL_SAMPLE_CAP`] profiles, ordered by id.
    pub sample: Vec<UserProfile>,
}

/// Look up mutual connections for the candidate batch. A viewer with no
/// connections yields an empty map (a no-op, not an error).
pub fn lookup(
    edges: &dyn IEdgeStore,
    profiles: &dyn IProfileStore,
    user: &UserId,
    candidates: &[UserId],
) -> WeaveResult<HashMap<UserId, MutualConnections>> {
    if candidates.is_empty() {
        return Ok(HashMap::new());
    }
    let own = edges.following(user)?;
    if own.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = edges.edges_from_into(&own, candidates)?;
    let mut grouped: HashMap<UserId, Vec<UserId>> = HashMap::new();
    for edge in rows {
        grouped.entry(edge.followee_id).or_default().push(edge.follower_id);
    }
    for sources in grouped.values_mut() {
        sources.sort();
    }

    // One bulk profile fetch covers every sampled source.
    let sample_ids: Vec<UserId> = grouped
        .values()
        .flat_map(|sources| sources.iter().take(MUTUAL_SAMPLE_CAP).cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let sample_profiles = profiles.get_profiles(&sample_ids)?;
    let by_id: HashMap<UserId, UserProfile> = sample_profiles
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect();

    let mut result = HashMap::with_capacity(grouped.len());
    for (candidate, sources) in grouped {
        let sample = sources
            .iter()
            .take(MUTUAL_SAMPLE_CAP)
            .filter_map(|id| by_id.get(id).cloned())
            .collect();
        result.insert(
            candidate,
            MutualConnections {
                count: sources.len() as u64,
                sample,
            },
        );
    }
    Ok(result)
}
