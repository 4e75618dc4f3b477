use std::fmt;

use serde::{Deserialize, Serialize};

/// Candidate-generation strategy. Exactly one strategy runs per suggestion
/// call; the closed set keeps dispatch exhaustiveness checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Two-hop fan-in: people followed by the people you follow.
    Mutual,
    /// Follower-count range filter, most-followed first.
    #[default]
    Popularity,
    /// Newest accounts first, optional location filter.
    Recency,
    /// Same-location accounts, most-followed first. Falls back to
    /// popularity when no location is resolvable.
    Proximity,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mutual => "mutual",
            Self::Popularity => "popularity",
            Self::Recency => "recency",
            Self::Proximity => "proximity",
        };
        write!(f, "{name}")
    }
}
