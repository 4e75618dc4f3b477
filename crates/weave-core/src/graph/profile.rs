use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque user identifier, as issued by the profile store.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A user profile as read from the profile store. The suggestion engine
/// never mutates profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    /// Unique handle chosen at onboarding. Absent until onboarding completes.
    pub handle: Option<String>,
    /// Display name. Absent until onboarding completes.
    pub display_name: Option<String>,
    pub bio: Option<String>,
    /// Reference to an avatar image, if one was uploaded.
    pub avatar_url: Option<String>,
    /// Free-form location string ("Berlin", "Berlin, DE", ...).
    pub location: Option<String>,
    pub verified: bool,
    pub follower_count: u64,
    pub following_count: u64,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// A profile is suggestible once onboarding has produced both a handle
    /// and a display name. Incomplete profiles are never surfaced.
    pub fn is_suggestible(&self) -> bool {
        self.handle.as_deref().is_some_and(|h| !h.is_empty())
            && self.display_name.as_deref().is_some_and(|n| !n.is_empty())
    }
}
