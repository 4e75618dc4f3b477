use crate::errors::WeaveResult;
use crate::graph::{UserId, UserProfile};

/// Read access to user profiles, plus the single ingest path.
///
/// Filtered reads return only suggestible profiles (handle and display name
/// present); `get_profile`/`get_profiles` return rows as stored.
pub trait IProfileStore: Send + Sync {
    fn get_profile(&self, id: &UserId) -> WeaveResult<Option<UserProfile>>;

    /// Batch lookup. Missing ids are silently dropped; order is unspecified.
    fn get_profiles(&self, ids: &[UserId]) -> WeaveResult<Vec<UserProfile>>;

    /// Suggestible profiles with `min <= follower_count <= max`, sorted by
    /// follower count descending, then id.
    fn profiles_by_follower_range(
        &self,
        min: u64,
        max: u64,
        limit: usize,
    ) -> WeaveResult<Vec<UserProfile>>;

    /// Suggestible profiles sorted by account creation descending, then id,
    /// optionally filtered by a location substring.
    fn recent_profiles(
        &self,
        location: Option<&str>,
        limit: usize,
    ) -> WeaveResult<Vec<UserProfile>>;

    /// Suggestible profiles whose location contains `location`, sorted by
    /// follower count descending, then id.
    fn profiles_by_location(&self, location: &str, limit: usize)
        -> WeaveResult<Vec<UserProfile>>;

    /// Insert or replace a profile (ingest path; not used by the engine).
    fn upsert_profile(&self, profile: &UserProfile) -> WeaveResult<()>;
}
