//! Wire bodies and endpoint construction for the remote progress API.

use learney_core::config::{RemoteConfig, SessionConfig};
use learney_core::{ProgressKind, ProgressMap};
use learney_progress::transport::{ProgressResponse, ProgressUpload};
use learney_progress::{HttpClientConfig, HttpProgressRemote};
use uuid::Uuid;

fn map_uuid() -> Uuid {
    Uuid::parse_str("6f1c4a8e-0d7e-4b8a-9c55-2f4e7f0a1b2c").unwrap()
}

#[test]
fn upload_carries_only_the_requested_mapping() {
    let upload = ProgressUpload::new(
        "u-1",
        map_uuid(),
        None,
        ProgressKind::Goal,
        &ProgressMap::from_ids(["c"]),
    );
    let json = serde_json::to_value(&upload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "user_id": "u-1",
            "map_uuid": "6f1c4a8e-0d7e-4b8a-9c55-2f4e7f0a1b2c",
            "goal_concepts": {"c": true}
        })
    );
}

#[test]
fn response_picks_field_for_kind() {
    let body: ProgressResponse =
        serde_json::from_str(r#"{"learned_concepts": {"a": true, "b": false}}"#).unwrap();
    assert!(body.clone().into_map(ProgressKind::Goal).is_none());

    let learned = body.into_map(ProgressKind::Learned).unwrap();
    assert_eq!(learned.get(&"b".into()), Some(false));
}

#[test]
fn endpoints_follow_the_api_prefix() {
    let remote = HttpProgressRemote::new(
        HttpClientConfig {
            base_url: "https://app.example.org".into(),
            ..HttpClientConfig::default()
        },
        "u-1",
        map_uuid(),
        None,
    )
    .unwrap();
    assert_eq!(remote.endpoint(ProgressKind::Learned), "https://app.example.org/api/v0/learned");
    assert_eq!(remote.endpoint(ProgressKind::Goal), "https://app.example.org/api/v0/goals");
}

#[test]
fn no_remote_for_anonymous_or_unconfigured_sessions() {
    let configured = RemoteConfig {
        base_url: Some("https://app.example.org/".into()),
        ..RemoteConfig::default()
    };
    let anonymous = SessionConfig::default();
    assert!(HttpProgressRemote::from_config(&configured, &anonymous).unwrap().is_none());

    let signed_in = SessionConfig {
        user_id: Some("u-1".into()),
        ..SessionConfig::default()
    };
    assert!(HttpProgressRemote::from_config(&RemoteConfig::default(), &signed_in)
        .unwrap()
        .is_none());
    assert!(HttpProgressRemote::from_config(&configured, &signed_in).unwrap().is_some());
}

#[cfg(not(feature = "remote"))]
#[test]
fn disabled_feature_reports_remote_disabled() {
    use learney_core::errors::{LearneyError, PersistenceError};
    use learney_core::traits::IProgressRemote;

    let remote = HttpProgressRemote::new(HttpClientConfig::default(), "u-1", map_uuid(), None).unwrap();
    let err = remote.fetch(ProgressKind::Learned).unwrap_err();
    assert!(matches!(
        err,
        LearneyError::PersistenceError(PersistenceError::RemoteDisabled { .. })
    ));
}
