use crate::CreateProjectResult;

#[test]
fn test_success_body_deserializes() {
    let body = r#"{"success":true,"projectName":"Foo","projectPath":"/a/Foo.prproj"}"#;

    let result: CreateProjectResult = serde_json::from_str(body).unwrap();

    assert!(result.success);
    assert_eq!(result.project_name.as_deref(), Some("Foo"));
    assert_eq!(result.project_path.as_deref(), Some("/a/Foo.prproj"));
    assert!(result.sequence_name.is_none());
    assert!(result.preset_used.is_none());
    assert!(result.error.is_none());
}

#[test]
fn test_extended_success_body_deserializes() {
    let body = r#"{"success":true,"projectName":"Foo","sequenceName":"Main","presetUsed":"Shorts","projectPath":"/a/Foo.prproj"}"#;

    let result: CreateProjectResult = serde_json::from_str(body).unwrap();

    assert!(result.success);
    assert_eq!(result.sequence_name.as_deref(), Some("Main"));
    assert_eq!(result.preset_used.as_deref(), Some("Shorts"));
}

#[test]
fn test_failure_body_deserializes() {
    let body = r#"{"success":false,"error":"disk full"}"#;

    let result: CreateProjectResult = serde_json::from_str(body).unwrap();

    assert!(!result.success);
    assert_eq!(result.error_message(), "disk full");
}

#[test]
fn test_error_message_falls_back_when_missing() {
    let body = r#"{"success":false}"#;

    let result: CreateProjectResult = serde_json::from_str(body).unwrap();

    assert_eq!(result.error_message(), "Unknown error");
}
