//! Request-status enrichment: existing requests between the viewer and each
//! candidate, in either direction, any status.

use std::collections::HashMap;

use weave_core::errors::WeaveResult;
use weave_core::graph::{RequestRef, UserId};
use weave_core::traits::IRequestStore;

/// Request rows touching one candidate, seen from the viewer's side.
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    /// Viewer → candidate.
    pub outgoing: Option<RequestRef>,
    /// Candidate → viewer.
    pub incoming: Option<RequestRef>,
}

impl RequestState {
    /// A fresh request is allowed only when no request exists in either
    /// direction, whatever its status. A rejected request suppresses
    /// permanently.
    pub fn can_send(&self) -> bool {
        self.outgoing.is_none() && self.incoming.is_none()
    }
}

/// Look up request state for the candidate batch.
pub fn lookup(
    requests: &dyn IRequestStore,
    user: &UserId,
    candidates: &[UserId],
) -> WeaveResult<HashMap<UserId, RequestState>> {
    if candidates.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = requests.requests_between(user, candidates)?;
    let mut result: HashMap<UserId, RequestState> = HashMap::new();
    for row in rows {
        if row.requester_id == *user {
            result.entry(row.target_id.clone()).or_default().outgoing = Some(RequestRef::from(&row));
        } else {
            result.entry(row.requester_id.clone()).or_default().incoming =
                Some(RequestRef::from(&row));
        }
    }
    Ok(result)
}
