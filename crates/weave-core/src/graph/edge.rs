use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::UserId;

/// A directed, accepted follow relationship: `follower_id` follows
/// `followee_id`. Unique per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEdge {
    pub follower_id: UserId,
    pub followee_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl ConnectionEdge {
    pub fn new(follower_id: UserId, followee_id: UserId) -> Self {
        Self {
            follower_id,
            followee_id,
            created_at: Utc::now(),
        }
    }
}
