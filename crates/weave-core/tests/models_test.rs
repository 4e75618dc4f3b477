use chrono::Utc;
use weave_core::graph::{ConnectionRequest, RequestRef, RequestStatus, UserId, UserProfile};
use weave_core::models::SuggestionQuery;
use weave_core::strategy::Strategy;

fn profile(id: &str) -> UserProfile {
    UserProfile {
        id: UserId::from(id),
        handle: Some(format!("@{id}")),
        display_name: Some(id.to_uppercase()),
        bio: None,
        avatar_url: None,
        location: None,
        verified: false,
        follower_count: 0,
        following_count: 0,
        created_at: Utc::now(),
    }
}

#[test]
fn complete_profile_is_suggestible() {
    assert!(profile("alice").is_suggestible());
}

#[test]
fn profile_without_display_name_is_not_suggestible() {
    let mut p = profile("alice");
    p.display_name = None;
    assert!(!p.is_suggestible());
}

#[test]
fn profile_with_empty_handle_is_not_suggestible() {
    let mut p = profile("alice");
    p.handle = Some(String::new());
    assert!(!p.is_suggestible());
}

#[test]
fn accepted_and_rejected_are_terminal() {
    assert!(!RequestStatus::Pending.is_terminal());
    assert!(RequestStatus::Accepted.is_terminal());
    assert!(RequestStatus::Rejected.is_terminal());
}

#[test]
fn pending_request_gets_fresh_id_and_pending_status() {
    let req = ConnectionRequest::pending(UserId::from("a"), UserId::from("b"));
    assert!(!req.id.is_empty());
    assert_eq!(req.status, RequestStatus::Pending);
    assert_eq!(req.requester_id, UserId::from("a"));
    assert_eq!(req.target_id, UserId::from("b"));
}

#[test]
fn request_ref_carries_id_status_and_timestamp() {
    let req = ConnectionRequest::pending(UserId::from("a"), UserId::from("b"));
    let r = RequestRef::from(&req);
    assert_eq!(r.id, req.id);
    assert_eq!(r.status, req.status);
    assert_eq!(r.created_at, req.created_at);
}

#[test]
fn strategy_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&Strategy::Mutual).unwrap(),
        "\"mutual\""
    );
    let s: Strategy = serde_json::from_str("\"proximity\"").unwrap();
    assert_eq!(s, Strategy::Proximity);
}

#[test]
fn request_status_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&RequestStatus::Pending).unwrap(),
        "\"pending\""
    );
    let s: RequestStatus = serde_json::from_str("\"rejected\"").unwrap();
    assert_eq!(s, RequestStatus::Rejected);
}

#[test]
fn query_defaults_match_documented_values() {
    let q = SuggestionQuery::default();
    assert_eq!(q.limit, 10);
    assert_eq!(q.offset, 0);
    assert!(q.exclude_ids.is_empty());
    assert!(q.include_mutual);
    assert_eq!(q.strategy, Strategy::Popularity);
    assert_eq!(q.min_followers, 0);
    assert_eq!(q.max_followers, 1_000_000);
}

#[test]
fn user_id_ordering_is_lexicographic() {
    let mut ids = vec![UserId::from("c"), UserId::from("a"), UserId::from("b")];
    ids.sort();
    assert_eq!(ids, vec!["a".into(), "b".into(), "c".into()]);
}
