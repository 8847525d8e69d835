use learney_core::errors::*;

#[test]
fn node_not_found_carries_id() {
    let err = LearneyError::NodeNotFound { id: "42".into() };
    assert!(err.to_string().contains("42"));
    assert!(err.is_recoverable());
}

#[test]
fn dangling_edge_names_missing_endpoint() {
    let err = GraphError::DanglingEdge {
        source_id: "1".into(),
        target_id: "9".into(),
        missing: "9".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("1 -> 9"));
    assert!(msg.contains("unknown node 9"));
}

#[test]
fn graph_error_converts_and_is_not_recoverable() {
    let err: LearneyError = GraphError::CycleDetected {
        path: "1 -> 2 -> 1".into(),
    }
    .into();
    assert!(err.to_string().contains("1 -> 2 -> 1"));
    assert!(!err.is_recoverable());
}

#[test]
fn persistence_error_converts_and_is_recoverable() {
    let err: LearneyError = PersistenceError::UnexpectedStatus {
        status: 500,
        body: "boom".into(),
    }
    .into();
    assert!(matches!(err, LearneyError::PersistenceError(_)));
    assert!(err.to_string().contains("500"));
    assert!(err.is_recoverable());
}

#[test]
fn serde_error_converts() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: LearneyError = serde_err.into();
    assert!(matches!(err, LearneyError::SerializationError(_)));
}
