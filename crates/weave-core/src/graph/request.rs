use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::UserId;

/// Lifecycle state of a connection request. Accepted and rejected requests
/// are terminal records, retained for history and re-request suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

/// A proposal to form an edge. At most one row exists per ordered
/// (requester, target) pair; a pending A→B and a pending B→A may coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    /// UUID v4 identifier.
    pub id: String,
    pub requester_id: UserId,
    pub target_id: UserId,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl ConnectionRequest {
    /// Create a new pending request with a fresh id.
    pub fn pending(requester_id: UserId, target_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            requester_id,
            target_id,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

/// The slice of a request that a suggestion exposes to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRef {
    pub id: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&ConnectionRequest> for RequestRef {
    fn from(req: &ConnectionRequest) -> Self {
        Self {
            id: req.id.clone(),
            status: req.status,
            created_at: req.created_at,
        }
    }
}
