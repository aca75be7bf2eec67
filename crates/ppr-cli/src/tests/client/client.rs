use crate::Client;

use ppr_config::ClientConfig;
use ppr_core::{CreateProjectRequest, ProtocolVariant};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new(ClientConfig::with_server_url("http://localhost:3000/"));
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new(ClientConfig::with_server_url("http://localhost:3000"));
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_default_variant_is_extended() {
    let client = Client::new(ClientConfig::default());
    assert_eq!(client.variant(), ProtocolVariant::Extended);
}

#[test]
fn test_wire_request_strips_preset_for_minimal() {
    let config = ClientConfig {
        variant: ProtocolVariant::Minimal,
        ..Default::default()
    };
    let client = Client::new(config);

    let request = CreateProjectRequest::new(
        Some("Promo".to_string()),
        Some("Main".to_string()),
        Some("Shorts".to_string()),
    );

    let wire = client.wire_request(&request);
    assert_eq!(wire.project_name.as_deref(), Some("Promo"));
    assert_eq!(wire.sequence_name.as_deref(), Some("Main"));
    assert!(wire.preset_name.is_none());
}

#[test]
fn test_wire_request_keeps_preset_for_extended() {
    let client = Client::new(ClientConfig::default());

    let request = CreateProjectRequest::new(None, None, Some("Shorts".to_string()));

    assert_eq!(client.wire_request(&request), request);
}
