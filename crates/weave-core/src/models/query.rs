use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::graph::UserId;
use crate::strategy::Strategy;

/// Caller-supplied parameters for one suggestion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionQuery {
    /// Page size.
    pub limit: usize,
    /// Page start, applied after scoring.
    pub offset: usize,
    /// Extra ids to exclude on top of the resolved exclusion set.
    pub exclude_ids: Vec<UserId>,
    /// When false, the mutual-connection enrichment pass is skipped.
    pub include_mutual: bool,
    pub strategy: Strategy,
    /// Location filter for the recency and proximity strategies.
    pub location: Option<String>,
    /// Inclusive follower-count bounds for the popularity strategy.
    pub min_followers: u64,
    pub max_followers: u64,
}

impl Default for SuggestionQuery {
    fn default() -> Self {
        Self {
            limit: defaults::DEFAULT_SUGGESTION_LIMIT,
            offset: 0,
            exclude_ids: Vec::new(),
            include_mutual: true,
            strategy: Strategy::default(),
            location: None,
            min_followers: 0,
            max_followers: defaults::DEFAULT_MAX_FOLLOWERS,
        }
    }
}

impl SuggestionQuery {
    /// Query for a specific strategy with all other parameters defaulted.
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}
