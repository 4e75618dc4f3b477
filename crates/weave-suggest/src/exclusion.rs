//! Exclusion-set resolution: the ids that must never be suggested for a
//! given call.

use std::collections::HashSet;

use weave_core::errors::{SuggestError, WeaveResult};
use weave_core::graph::UserId;
use weave_core::traits::{IEdgeStore, IRequestStore};

/// Resolve the exclusion set for one suggestion call: the user themselves,
/// everyone they already follow, every target of a pending outgoing
/// request, and any caller-supplied extras.
///
/// The set is a snapshot; concurrent edge writes during the same call are
/// not re-read. A store failure here is fatal to the call, since an
/// incomplete set could surface already-connected users.
pub fn resolve(
    edges: &dyn IEdgeStore,
    requests: &dyn IRequestStore,
    user: &UserId,
    extra: &[UserId],
) -> WeaveResult<HashSet<UserId>> {
    let mut excluded = HashSet::new();
    excluded.insert(user.clone());

    let following = edges.following(user).map_err(|e| SuggestError::ExclusionFailed {
        reason: format!("following lookup: {e}"),
    })?;
    excluded.extend(following);

    let pending = requests
        .pending_targets_of(user)
        .map_err(|e| SuggestError::ExclusionFailed {
            reason: format!("pending-request lookup: {e}"),
        })?;
    excluded.extend(pending);

    excluded.extend(extra.iter().cloned());
    Ok(excluded)
}
