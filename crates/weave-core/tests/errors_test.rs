use weave_core::errors::*;

#[test]
fn weave_error_profile_not_found_carries_id() {
    let err = WeaveError::ProfileNotFound {
        id: "user-42".into(),
    };
    assert!(
        err.to_string().contains("user-42"),
        "error should contain the profile id"
    );
}

#[test]
fn weave_error_config_carries_reason() {
    let err = WeaveError::ConfigError {
        reason: "bad toml".into(),
    };
    assert!(err.to_string().contains("bad toml"));
}

#[test]
fn storage_error_migration_carries_version() {
    let err = StorageError::MigrationFailed {
        version: 3,
        reason: "duplicate column".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains("duplicate column"));
}

#[test]
fn suggest_error_generation_carries_strategy() {
    let err = SuggestError::GenerationFailed {
        strategy: "mutual".into(),
        reason: "edge query failed".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("mutual"));
    assert!(msg.contains("edge query failed"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_weave_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let weave_err: WeaveError = storage_err.into();
    assert!(matches!(weave_err, WeaveError::StorageError(_)));
}

#[test]
fn suggest_error_converts_to_weave_error() {
    let suggest_err = SuggestError::ExclusionFailed {
        reason: "pending lookup failed".into(),
    };
    let weave_err: WeaveError = suggest_err.into();
    assert!(matches!(weave_err, WeaveError::SuggestError(_)));
}

#[test]
fn serde_json_error_converts_to_weave_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let weave_err: WeaveError = json_err.into();
    assert!(matches!(weave_err, WeaveError::SerializationError(_)));
}
