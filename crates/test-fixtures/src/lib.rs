//! Shared graph builders for integration tests across crates.
//!
//! Profiles built here are deterministic: fixed creation date, no random
//! fields, so tests asserting on ordering stay stable.

use chrono::{DateTime, Duration, TimeZone, Utc};

use weave_core::graph::{UserId, UserProfile};
use weave_core::traits::{IEdgeStore, IProfileStore};
use weave_core::WeaveResult;

/// Fixed creation timestamp shared by default profiles.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A complete (suggestible) profile with all optional extras absent.
pub fn profile(id: &str) -> UserProfile {
    UserProfile {
        id: UserId::from(id),
        handle: Some(format!("@{id}")),
        display_name: Some(format!("User {id}")),
        bio: None,
        avatar_url: None,
        location: None,
        verified: false,
        follower_count: 0,
        following_count: 0,
        created_at: epoch(),
    }
}

/// A profile that never completed onboarding (no handle, no display name).
pub fn incomplete_profile(id: &str) -> UserProfile {
    UserProfile {
        handle: None,
        display_name: None,
        ..profile(id)
    }
}

/// A suggestible profile with the given follower count.
pub fn popular_profile(id: &str, follower_count: u64) -> UserProfile {
    UserProfile {
        follower_count,
        ..profile(id)
    }
}

/// A suggestible profile created `days_ago` days before `now`.
pub fn recent_profile(id: &str, now: DateTime<Utc>, days_ago: i64) -> UserProfile {
    UserProfile {
        created_at: now - Duration::days(days_ago),
        ..profile(id)
    }
}

/// A suggestible profile in the given location.
pub fn located_profile(id: &str, location: &str) -> UserProfile {
    UserProfile {
        location: Some(location.to_string()),
        ..profile(id)
    }
}

/// Seed complete profiles for every id.
pub fn seed_profiles(store: &dyn IProfileStore, ids: &[&str]) -> WeaveResult<()> {
    for id in ids {
        store.upsert_profile(&profile(id))?;
    }
    Ok(())
}

/// Insert a follow edge for every (follower, followee) pair.
pub fn follow_all(store: &dyn IEdgeStore, pairs: &[(&str, &str)]) -> WeaveResult<()> {
    for (follower, followee) in pairs {
        store.insert_edge(&UserId::from(*follower), &UserId::from(*followee))?;
    }
    Ok(())
}
