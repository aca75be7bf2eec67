use crate::ProtocolVariant;

use std::str::FromStr;

#[test]
fn test_from_str_valid_values() {
    assert_eq!(
        ProtocolVariant::from_str("minimal").unwrap(),
        ProtocolVariant::Minimal
    );
    assert_eq!(
        ProtocolVariant::from_str("extended").unwrap(),
        ProtocolVariant::Extended
    );
}

#[test]
fn test_from_str_invalid_value() {
    let result = ProtocolVariant::from_str("legacy");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("legacy"));
}

#[test]
fn test_default_is_extended() {
    assert_eq!(ProtocolVariant::default(), ProtocolVariant::Extended);
}

#[test]
fn test_supports_presets() {
    assert!(ProtocolVariant::Extended.supports_presets());
    assert!(!ProtocolVariant::Minimal.supports_presets());
}

#[test]
fn test_display_round_trips() {
    for variant in [ProtocolVariant::Minimal, ProtocolVariant::Extended] {
        assert_eq!(
            ProtocolVariant::from_str(variant.as_str()).unwrap(),
            variant
        );
    }
}
