use pretty_assertions::assert_eq;
use serde_json::json;
use stegocodec_client::{CodecResponse, LicenseInfo, LicenseType, Limits};

#[test]
fn full_login_envelope_parses() {
    let response: CodecResponse = serde_json::from_value(json!({
        "error": 0,
        "license": {
            "activationStatus": true,
            "userName": "Jan Kowalski",
            "type": 0,
            "usagesTotal": 500,
            "usagesCount": 123,
        },
        "limits": {
            "maxPasswordLen": 128,
            "maxMessageLen": -1,
            "maxFileSize": 10_485_760u64,
        },
    }))
    .unwrap();

    assert_eq!(response.error, 0);
    let license = response.license.unwrap();
    assert_eq!(license.user_name, "Jan Kowalski");
    assert_eq!(license.license_type, LicenseType::Personal);
    assert_eq!(license.usages_total, 500);
    assert_eq!(license.usages_count, 123);
}

#[test]
fn license_type_zero_is_personal_anything_else_company() {
    for (wire, expected) in [
        (0, LicenseType::Personal),
        (1, LicenseType::Company),
        (7, LicenseType::Company),
    ] {
        let license: LicenseInfo = serde_json::from_value(json!({
            "activationStatus": true,
            "userName": "x",
            "type": wire,
            "usagesTotal": 1,
            "usagesCount": 1,
        }))
        .unwrap();
        assert_eq!(license.license_type, expected);
    }
}

#[test]
fn negative_message_length_means_unlimited() {
    let limits: Limits = serde_json::from_value(json!({
        "maxPasswordLen": 128,
        "maxMessageLen": -1,
        "maxFileSize": 10_485_760u64,
    }))
    .unwrap();
    assert_eq!(limits.message_limit(), None);

    let limits: Limits = serde_json::from_value(json!({
        "maxPasswordLen": 8,
        "maxMessageLen": 16,
        "maxFileSize": 51_200u64,
    }))
    .unwrap();
    assert_eq!(limits.message_limit(), Some(16));
}

#[test]
fn unknown_envelope_fields_are_ignored() {
    let response: CodecResponse = serde_json::from_value(json!({
        "error": 0,
        "message": "hello",
        "someFutureField": { "nested": true },
    }))
    .unwrap();

    assert_eq!(response.message.as_deref(), Some("hello"));
}

#[test]
fn demo_license_without_optional_fields_parses() {
    let response: CodecResponse = serde_json::from_value(json!({
        "error": 0,
        "license": { "activationStatus": false },
    }))
    .unwrap();

    assert!(response.is_demo());
    let license = response.license.unwrap();
    assert!(!license.activation_status);
    assert_eq!(license.user_name, "");
}

#[test]
fn is_demo_without_license_block() {
    let response: CodecResponse = serde_json::from_value(json!({ "error": 0 })).unwrap();
    assert!(response.is_demo());
}

#[test]
fn is_demo_false_only_when_activated() {
    let response: CodecResponse = serde_json::from_value(json!({
        "error": 0,
        "license": { "activationStatus": true, "userName": "x" },
    }))
    .unwrap();
    assert!(!response.is_demo());
}

#[test]
fn license_type_serializes_back_to_wire_integers() {
    assert_eq!(serde_json::to_value(LicenseType::Personal).unwrap(), json!(0));
    assert_eq!(serde_json::to_value(LicenseType::Company).unwrap(), json!(1));
}

#[test]
fn error_message_field_uses_snake_case_on_the_wire() {
    let response: CodecResponse = serde_json::from_value(json!({
        "error": 0,
        "error_message": "diagnostic",
    }))
    .unwrap();
    assert_eq!(response.error_message.as_deref(), Some("diagnostic"));
}
