use std::collections::HashSet;

use chrono::Utc;
use test_fixtures::{
    follow_all, incomplete_profile, located_profile, popular_profile, profile, recent_profile,
    seed_profiles,
};
use weave_core::graph::UserId;
use weave_core::models::SuggestionQuery;
use weave_core::strategy::Strategy;
use weave_core::traits::IProfileStore;
use weave_storage::StorageEngine;
use weave_suggest::generators;

fn store() -> StorageEngine {
    StorageEngine::open_in_memory().expect("in-memory storage")
}

fn id(s: &str) -> UserId {
    UserId::from(s)
}

fn exclusions(user: &str, rest: &[&str]) -> HashSet<UserId> {
    std::iter::once(user)
        .chain(rest.iter().copied())
        .map(UserId::from)
        .collect()
}

#[test]
fn mutual_tallies_two_hop_fan_in() {
    let store = store();
    seed_profiles(&store, &["a", "b", "c", "d", "e"]).unwrap();
    follow_all(
        &store,
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("b", "e")],
    )
    .unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Mutual);
    let (candidates, used) = generators::generate(
        &store,
        &store,
        &id("a"),
        &query,
        &exclusions("a", &["b", "c"]),
        30,
    )
    .unwrap();

    assert_eq!(used, Strategy::Mutual);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].profile.id, id("d"));
    assert_eq!(candidates[0].mutual_count, 2);
    assert_eq!(candidates[0].base_score, 20.0);
    assert_eq!(candidates[1].profile.id, id("e"));
    assert_eq!(candidates[1].mutual_count, 1);
    assert_eq!(candidates[1].base_score, 10.0);
}

#[test]
fn mutual_skips_excluded_targets() {
    let store = store();
    seed_profiles(&store, &["a", "b", "d"]).unwrap();
    follow_all(&store, &[("a", "b"), ("b", "d")]).unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Mutual);
    let (candidates, _) = generators::generate(
        &store,
        &store,
        &id("a"),
        &query,
        &exclusions("a", &["b", "d"]),
        30,
    )
    .unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn mutual_without_connections_is_empty() {
    let store = store();
    seed_profiles(&store, &["a", "b"]).unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Mutual);
    let (candidates, _) =
        generators::generate(&store, &store, &id("a"), &query, &exclusions("a", &[]), 30).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn mutual_ties_break_by_candidate_id() {
    let store = store();
    seed_profiles(&store, &["a", "b", "x", "y"]).unwrap();
    follow_all(&store, &[("a", "b"), ("b", "y"), ("b", "x")]).unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Mutual);
    let (candidates, _) = generators::generate(
        &store,
        &store,
        &id("a"),
        &query,
        &exclusions("a", &["b"]),
        30,
    )
    .unwrap();
    let ids: Vec<_> = candidates.iter().map(|c| c.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y"]);
}

#[test]
fn popularity_scores_follower_count_tenth() {
    let store = store();
    store.upsert_profile(&popular_profile("big", 500)).unwrap();
    store.upsert_profile(&popular_profile("small", 40)).unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Popularity);
    let (candidates, used) =
        generators::generate(&store, &store, &id("me"), &query, &exclusions("me", &[]), 30)
            .unwrap();

    assert_eq!(used, Strategy::Popularity);
    assert_eq!(candidates[0].profile.id, id("big"));
    assert_eq!(candidates[0].base_score, 50.0);
    assert_eq!(candidates[1].base_score, 4.0);
}

#[test]
fn popularity_prunes_exclusions_after_the_store_read() {
    let store = store();
    store.upsert_profile(&popular_profile("big", 500)).unwrap();
    store.upsert_profile(&popular_profile("kept", 40)).unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Popularity);
    let (candidates, _) = generators::generate(
        &store,
        &store,
        &id("me"),
        &query,
        &exclusions("me", &["big"]),
        30,
    )
    .unwrap();
    let ids: Vec<_> = candidates.iter().map(|c| c.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["kept"]);
}

#[test]
fn recency_orders_newest_first_with_flat_base() {
    let store = store();
    let now = Utc::now();
    store.upsert_profile(&recent_profile("old", now, 60)).unwrap();
    store.upsert_profile(&recent_profile("new", now, 2)).unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Recency);
    let (candidates, used) =
        generators::generate(&store, &store, &id("me"), &query, &exclusions("me", &[]), 30)
            .unwrap();

    assert_eq!(used, Strategy::Recency);
    let ids: Vec<_> = candidates.iter().map(|c| c.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old"]);
    assert!(candidates.iter().all(|c| c.base_score == 5.0));
}

#[test]
fn recency_applies_location_filter() {
    let store = store();
    store
        .upsert_profile(&located_profile("berliner", "Berlin"))
        .unwrap();
    store
        .upsert_profile(&located_profile("parisian", "Paris"))
        .unwrap();

    let mut query = SuggestionQuery::for_strategy(Strategy::Recency);
    query.location = Some("Berlin".into());
    let (candidates, _) =
        generators::generate(&store, &store, &id("me"), &query, &exclusions("me", &[]), 30)
            .unwrap();
    let ids: Vec<_> = candidates.iter().map(|c| c.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["berliner"]);
}

#[test]
fn proximity_uses_explicit_location_parameter() {
    let store = store();
    let mut near = located_profile("near", "Lisbon");
    near.follower_count = 10;
    store.upsert_profile(&near).unwrap();
    store
        .upsert_profile(&located_profile("far", "Porto"))
        .unwrap();

    let mut query = SuggestionQuery::for_strategy(Strategy::Proximity);
    query.location = Some("Lisbon".into());
    let (candidates, used) =
        generators::generate(&store, &store, &id("me"), &query, &exclusions("me", &[]), 30)
            .unwrap();

    assert_eq!(used, Strategy::Proximity);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].profile.id, id("near"));
    assert_eq!(candidates[0].base_score, 8.0);
}

#[test]
fn proximity_falls_back_to_requesters_own_location() {
    let store = store();
    store
        .upsert_profile(&located_profile("me", "Lisbon"))
        .unwrap();
    store
        .upsert_profile(&located_profile("near", "Lisbon"))
        .unwrap();
    store
        .upsert_profile(&located_profile("far", "Porto"))
        .unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Proximity);
    let (candidates, used) =
        generators::generate(&store, &store, &id("me"), &query, &exclusions("me", &[]), 30)
            .unwrap();

    assert_eq!(used, Strategy::Proximity);
    let ids: Vec<_> = candidates.iter().map(|c| c.profile.id.as_str()).collect();
    assert_eq!(ids, vec!["near"]);
}

#[test]
fn proximity_without_any_location_runs_popularity() {
    let store = store();
    seed_profiles(&store, &["me"]).unwrap();
    store.upsert_profile(&popular_profile("pop", 100)).unwrap();

    let query = SuggestionQuery::for_strategy(Strategy::Proximity);
    let (candidates, used) =
        generators::generate(&store, &store, &id("me"), &query, &exclusions("me", &[]), 30)
            .unwrap();

    assert_eq!(used, Strategy::Popularity);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].profile.id, id("pop"));
    assert_eq!(candidates[0].base_score, 10.0);
}

#[test]
fn no_strategy_returns_profiles_missing_handle_or_display_name() {
    let store = store();
    seed_profiles(&store, &["a", "b"]).unwrap();
    let mut ghost = incomplete_profile("ghost");
    ghost.follower_count = 99_999;
    store.upsert_profile(&ghost).unwrap();
    follow_all(&store, &[("a", "b"), ("b", "ghost")]).unwrap();

    for strategy in [
        Strategy::Mutual,
        Strategy::Popularity,
        Strategy::Recency,
        Strategy::Proximity,
    ] {
        let query = SuggestionQuery::for_strategy(strategy);
        let (candidates, _) = generators::generate(
            &store,
            &store,
            &id("a"),
            &query,
            &exclusions("a", &["b"]),
            30,
        )
        .unwrap();
        assert!(
            candidates.iter().all(|c| c.profile.id != id("ghost")),
            "{strategy} surfaced an incomplete profile"
        );
    }
}
