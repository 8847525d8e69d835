use learney_core::config::*;
use learney_core::errors::{ConfigError, LearneyError};
use learney_core::UserIdentity;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LearneyConfig::from_toml("").unwrap();

    // Session defaults
    assert!(config.session.user_id.is_none());
    assert!(config.session.map_uuid.is_nil());
    assert_eq!(config.session.identity(), UserIdentity::Anonymous);

    // Remote defaults
    assert!(config.remote.base_url.is_none());
    assert_eq!(config.remote.timeout_secs, 30);
    assert_eq!(config.remote.write_mode, WriteMode::Background);

    // Storage defaults
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.storage.db_path, "learney_progress.db");

    // Progress defaults
    assert_eq!(config.progress.merge_strategy, MergeStrategy::LocalWins);
    assert!(config.progress.legacy_cleanup);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[session]
user_id = "ada@example.com"
map_uuid = "5d2b1a0e-9f3c-4d6e-8a7b-1c2d3e4f5a6b"

[remote]
base_url = "https://app.example.com"
write_mode = "inline"

[progress]
merge_strategy = "union"
"#;
    let config = LearneyConfig::from_toml(toml).unwrap();
    assert_eq!(
        config.session.identity(),
        UserIdentity::Identified("ada@example.com".into())
    );
    assert_eq!(
        config.session.map_uuid.to_string(),
        "5d2b1a0e-9f3c-4d6e-8a7b-1c2d3e4f5a6b"
    );
    assert_eq!(config.remote.base_url.as_deref(), Some("https://app.example.com"));
    assert_eq!(config.remote.write_mode, WriteMode::Inline);
    // Non-overridden fields keep defaults
    assert_eq!(config.remote.timeout_secs, 30);
    assert_eq!(config.progress.merge_strategy, MergeStrategy::Union);
    assert!(config.progress.legacy_cleanup);
}

#[test]
fn config_rejects_unknown_enum_value() {
    let err = LearneyConfig::from_toml("[progress]\nmerge_strategy = \"coin_flip\"").unwrap_err();
    assert!(matches!(
        err,
        LearneyError::ConfigError(ConfigError::ParseError { .. })
    ));
}

#[test]
fn config_rejects_zero_timeout() {
    let err = LearneyConfig::from_toml("[remote]\ntimeout_secs = 0").unwrap_err();
    assert!(err.to_string().contains("remote.timeout_secs"));
}

#[test]
fn config_rejects_non_http_base_url() {
    let err = LearneyConfig::from_toml("[remote]\nbase_url = \"ftp://nope\"").unwrap_err();
    assert!(err.to_string().contains("remote.base_url"));
}

#[test]
fn config_serde_roundtrip() {
    let config = LearneyConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = LearneyConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(roundtripped.remote.timeout_secs, config.remote.timeout_secs);
}
