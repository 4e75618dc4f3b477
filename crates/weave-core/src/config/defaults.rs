//! Named default values shared between config structs and query defaults.

/// Default page size for suggestion calls.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Default upper bound for the popularity follower-count filter.
pub const DEFAULT_MAX_FOLLOWERS: u64 = 1_000_000;

/// Default number of read connections in the storage pool.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Score bonus for verified profiles.
pub const DEFAULT_VERIFIED_BONUS: f64 = 5.0;

/// Score added per mutual connection, applied to every strategy.
pub const DEFAULT_MUTUAL_WEIGHT: f64 = 15.0;

/// Score bonus for profiles with a non-trivial bio.
pub const DEFAULT_BIO_BONUS: f64 = 2.0;

/// Score bonus for profiles with an avatar.
pub const DEFAULT_AVATAR_BONUS: f64 = 1.0;

/// Extra per-mutual-connection weight applied on top for the mutual strategy.
pub const DEFAULT_MUTUAL_TOPUP_WEIGHT: f64 = 20.0;

/// Flat top-up for the proximity strategy.
pub const DEFAULT_PROXIMITY_TOPUP: f64 = 10.0;

/// Accounts newer than this many days earn a linearly shrinking recency bonus.
pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 30;
