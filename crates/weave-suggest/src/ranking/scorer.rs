//! Composite relevance scorer.
//!
//! The generator assigns the base score; profile bonuses and the
//! per-strategy top-up land here. Mutual-derived candidates deliberately
//! accumulate two mutual-weighted terms (base and top-up) on top of the
//! shared mutual-count bonus.

use chrono::{DateTime, Utc};

use weave_core::config::ScoreWeights;
use weave_core::graph::UserProfile;
use weave_core::strategy::Strategy;

/// Bios at or under this length earn no bonus.
const BIO_LENGTH_FLOOR: usize = 10;

/// Score one candidate. Pure: same inputs, same score.
pub fn relevance_score(
    profile: &UserProfile,
    base_score: f64,
    mutual_count: u64,
    strategy: Strategy,
    now: DateTime<Utc>,
    weights: &ScoreWeights,
) -> f64 {
    let mut score = base_score;

    if profile.verified {
        score += weights.verified_bonus;
    }
    if mutual_count > 0 {
        score += mutual_count as f64 * weights.mutual_weight;
    }
    if profile
        .bio
        .as_deref()
        .is_some_and(|b| b.len() > BIO_LENGTH_FLOOR)
    {
        score += weights.bio_bonus;
    }
    if profile
        .avatar_url
        .as_deref()
        .is_some_and(|a| !a.is_empty())
    {
        score += weights.avatar_bonus;
    }

    score += match strategy {
        Strategy::Mutual => mutual_count as f64 * weights.mutual_topup_weight,
        Strategy::Proximity => weights.proximity_topup,
        Strategy::Recency => {
            let days = (now - profile.created_at).num_days().max(0);
            (weights.recency_window_days - days).max(0) as f64
        }
        Strategy::Popularity => 0.0,
    };

    score.max(0.0)
}
