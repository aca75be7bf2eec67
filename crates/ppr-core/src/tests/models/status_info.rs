use crate::StatusInfo;

#[test]
fn test_empty_body_decodes_to_defaults() {
    let info: StatusInfo = serde_json::from_str("{}").unwrap();

    assert_eq!(info.connected_clients, 0);
    assert_eq!(info.default_save_path, "N/A");
    assert!(info.default_preset.is_none());
    assert!(info.default_sequence.is_none());
    assert!(!info.has_connected_plugin());
}

#[test]
fn test_minimal_body_decodes() {
    let body = r#"{"connectedClients":1,"defaultSavePath":"/media/projects"}"#;

    let info: StatusInfo = serde_json::from_str(body).unwrap();

    assert_eq!(info.connected_clients, 1);
    assert_eq!(info.default_save_path, "/media/projects");
    assert!(info.has_connected_plugin());
}

#[test]
fn test_extended_body_decodes() {
    let body = r#"{"connectedClients":2,"defaultSavePath":"/media","defaultPreset":"Shorts","defaultSequence":"Main"}"#;

    let info: StatusInfo = serde_json::from_str(body).unwrap();

    assert_eq!(info.connected_clients, 2);
    assert_eq!(info.default_preset.as_deref(), Some("Shorts"));
    assert_eq!(info.default_sequence.as_deref(), Some("Main"));
}

#[test]
fn test_gate_requires_at_least_one_plugin() {
    let mut info = StatusInfo::default();
    assert!(!info.has_connected_plugin());

    info.connected_clients = 1;
    assert!(info.has_connected_plugin());
}
