//! Shared test helpers: a fake codec service backed by wiremock.

#![allow(dead_code)]

use serde_json::{json, Value};
use stegocodec_client::CodecClient;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A few bytes with a PNG signature, good enough for a faked service.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52,
];

/// Starts a fake service answering every POST with `body`, plus a demo-mode
/// client pointed at it.
pub async fn spawn_api(body: Value) -> (MockServer, CodecClient) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    let client = CodecClient::new().with_endpoint(server.uri());
    (server, client)
}

/// Success envelope for `login` under a full license.
pub fn full_login_body() -> Value {
    json!({
        "error": 0,
        "license": {
            "activationStatus": true,
            "userName": "Test User",
            "type": 1,
            "usagesTotal": 1000,
            "usagesCount": 997,
        },
        "limits": {
            "maxPasswordLen": 128,
            "maxMessageLen": -1,
            "maxFileSize": 10_485_760u64,
        },
    })
}

/// Success envelope for `login` in demo mode.
pub fn demo_login_body() -> Value {
    json!({
        "error": 0,
        "license": { "activationStatus": false },
        "limits": {
            "maxPasswordLen": 8,
            "maxMessageLen": 16,
            "maxFileSize": 51_200u64,
        },
    })
}

/// Success envelope for `encode`, hiding the given output image bytes.
pub fn encode_body(image: &[u8]) -> Value {
    use base64::{engine::general_purpose::STANDARD, Engine};
    json!({
        "error": 0,
        "encodedImage": STANDARD.encode(image),
        "license": { "activationStatus": false },
        "limits": {
            "maxPasswordLen": 8,
            "maxMessageLen": 16,
            "maxFileSize": 51_200u64,
        },
    })
}

/// Success envelope for `decode` carrying the recovered message.
pub fn decode_body(message: &str) -> Value {
    json!({
        "error": 0,
        "message": message,
        "license": { "activationStatus": false },
    })
}

/// Failure envelope with a taxonomy code and server message.
pub fn error_body(code: i32, message: &str) -> Value {
    json!({ "error": code, "error_message": message })
}
