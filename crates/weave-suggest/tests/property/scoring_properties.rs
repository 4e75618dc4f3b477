//! Property tests over the pure scoring function.
//!
//! The domain `Strategy` enum is referred to by full path throughout; the
//! bare name would collide with proptest's `Strategy` trait.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use weave_core::config::ScoreWeights;
use weave_core::graph::{UserId, UserProfile};
use weave_suggest::ranking::scorer::relevance_score;

fn arb_strategy() -> impl Strategy<Value = weave_core::Strategy> {
    prop_oneof![
        Just(weave_core::Strategy::Mutual),
        Just(weave_core::Strategy::Popularity),
        Just(weave_core::Strategy::Recency),
        Just(weave_core::Strategy::Proximity),
    ]
}

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (
        "[a-z]{1,12}",
        any::<bool>(),
        proptest::option::of("[a-zA-Z ]{0,40}"),
        proptest::option::of("[a-z/.]{1,20}"),
        0u64..5_000_000,
        0i64..5_000,
    )
        .prop_map(|(id, verified, bio, avatar_url, follower_count, age_days)| {
            let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
            UserProfile {
                id: UserId::from(id.as_str()),
                handle: Some(format!("@{id}")),
                display_name: Some(id.clone()),
                bio,
                avatar_url,
                location: None,
                verified,
                follower_count,
                following_count: 0,
                created_at: now - Duration::days(age_days),
            }
        })
}

proptest! {
    #[test]
    fn score_is_never_negative(
        profile in arb_profile(),
        base in -1000.0f64..1000.0,
        mutuals in 0u64..500,
        strategy in arb_strategy(),
    ) {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let score = relevance_score(&profile, base, mutuals, strategy, now, &ScoreWeights::default());
        prop_assert!(score >= 0.0);
    }

    #[test]
    fn score_is_at_least_the_base_for_nonnegative_bases(
        profile in arb_profile(),
        base in 0.0f64..1000.0,
        mutuals in 0u64..500,
        strategy in arb_strategy(),
    ) {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let score = relevance_score(&profile, base, mutuals, strategy, now, &ScoreWeights::default());
        prop_assert!(score >= base, "bonuses only ever add: {} < {}", score, base);
    }

    #[test]
    fn verification_adds_exactly_the_configured_bonus(
        profile in arb_profile(),
        base in 0.0f64..1000.0,
        mutuals in 0u64..500,
        strategy in arb_strategy(),
    ) {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let weights = ScoreWeights::default();

        let mut unverified = profile.clone();
        unverified.verified = false;
        let mut verified = profile;
        verified.verified = true;

        let lo = relevance_score(&unverified, base, mutuals, strategy, now, &weights);
        let hi = relevance_score(&verified, base, mutuals, strategy, now, &weights);
        prop_assert!((hi - lo - weights.verified_bonus).abs() < 1e-9);
    }

    #[test]
    fn more_mutuals_never_lower_the_score(
        profile in arb_profile(),
        base in 0.0f64..1000.0,
        mutuals in 0u64..499,
        strategy in arb_strategy(),
    ) {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let weights = ScoreWeights::default();
        let lo = relevance_score(&profile, base, mutuals, strategy, now, &weights);
        let hi = relevance_score(&profile, base, mutuals + 1, strategy, now, &weights);
        prop_assert!(hi >= lo);
    }
}
