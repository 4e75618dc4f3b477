use weave_core::config::{ScoreWeights, WeaveConfig};

#[test]
fn empty_toml_yields_full_defaults() {
    let cfg = WeaveConfig::from_toml_str("").unwrap();
    assert_eq!(cfg.storage.read_pool_size, 4);
    let w = &cfg.suggest.weights;
    assert_eq!(w.verified_bonus, 5.0);
    assert_eq!(w.mutual_weight, 15.0);
    assert_eq!(w.bio_bonus, 2.0);
    assert_eq!(w.avatar_bonus, 1.0);
    assert_eq!(w.mutual_topup_weight, 20.0);
    assert_eq!(w.proximity_topup, 10.0);
    assert_eq!(w.recency_window_days, 30);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let cfg = WeaveConfig::from_toml_str(
        r#"
        [storage]
        read_pool_size = 8

        [suggest.weights]
        verified_bonus = 7.5
        "#,
    )
    .unwrap();
    assert_eq!(cfg.storage.read_pool_size, 8);
    assert_eq!(cfg.suggest.weights.verified_bonus, 7.5);
    // Unnamed fields keep their defaults.
    assert_eq!(cfg.suggest.weights.mutual_weight, 15.0);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let err = WeaveConfig::from_toml_str("storage = [").unwrap_err();
    assert!(matches!(
        err,
        weave_core::errors::WeaveError::ConfigError { .. }
    ));
}

#[test]
fn score_weights_default_standalone() {
    let w = ScoreWeights::default();
    assert_eq!(w.recency_window_days, 30);
}
