use serde::{Deserialize, Serialize};

use super::defaults;

/// Suggestion subsystem configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub weights: ScoreWeights,
}

/// Weights for the composite relevance score. The per-strategy base score is
/// assigned at generation time; these cover the scoring stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub verified_bonus: f64,
    /// Added per mutual connection regardless of strategy.
    pub mutual_weight: f64,
    pub bio_bonus: f64,
    pub avatar_bonus: f64,
    /// Added per mutual connection, once more, for the mutual strategy.
    pub mutual_topup_weight: f64,
    pub proximity_topup: f64,
    /// Width of the new-account bonus window, in days.
    pub recency_window_days: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            verified_bonus: defaults::DEFAULT_VERIFIED_BONUS,
            mutual_weight: defaults::DEFAULT_MUTUAL_WEIGHT,
            bio_bonus: defaults::DEFAULT_BIO_BONUS,
            avatar_bonus: defaults::DEFAULT_AVATAR_BONUS,
            mutual_topup_weight: defaults::DEFAULT_MUTUAL_TOPUP_WEIGHT,
            proximity_topup: defaults::DEFAULT_PROXIMITY_TOPUP,
            recency_window_days: defaults::DEFAULT_RECENCY_WINDOW_DAYS,
        }
    }
}
