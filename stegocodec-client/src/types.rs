//! Wire types for the codec service response envelope.
//!
//! The service answers every command with a JSON object carrying a numeric
//! `error` field (0 = success) plus command-specific payload fields and the
//! caller's current license and limits. Field names on the wire are
//! camelCase; unknown fields are ignored so the client stays compatible
//! with additive server changes.

use serde::{Deserialize, Serialize};

/// License tier, `0` on the wire for personal, anything else for company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum LicenseType {
    /// Personal license.
    Personal,
    /// Company license.
    Company,
}

impl From<i32> for LicenseType {
    fn from(value: i32) -> Self {
        if value == 0 {
            Self::Personal
        } else {
            Self::Company
        }
    }
}

impl From<LicenseType> for i32 {
    fn from(value: LicenseType) -> Self {
        match value {
            LicenseType::Personal => 0,
            LicenseType::Company => 1,
        }
    }
}

/// Activation status and usage credits for the presented key.
///
/// Only populated with meaningful values when the activation key resolves
/// to a full license; in demo mode `activation_status` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    /// Whether the activation key resolved to a full license.
    pub activation_status: bool,
    /// Name the license is registered to.
    #[serde(default)]
    pub user_name: String,
    /// Personal or company license.
    #[serde(rename = "type", default = "default_license_type")]
    pub license_type: LicenseType,
    /// Total number of purchased usage credits.
    #[serde(default)]
    pub usages_total: i64,
    /// Remaining number of usage credits.
    #[serde(default)]
    pub usages_count: i64,
}

fn default_license_type() -> LicenseType {
    LicenseType::Personal
}

/// Operating limits for the current mode (demo limits are much lower).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    /// Maximum password length in characters.
    pub max_password_len: i64,
    /// Maximum message length in characters, `-1` meaning unlimited.
    pub max_message_len: i64,
    /// Maximum input image file size in bytes.
    pub max_file_size: u64,
}

impl Limits {
    /// Returns the message length limit, or `None` when unlimited.
    #[must_use]
    pub fn message_limit(&self) -> Option<u64> {
        if self.max_message_len < 0 {
            None
        } else {
            Some(self.max_message_len as u64)
        }
    }
}

/// Parsed response envelope for a successful command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodecResponse {
    /// Wire error code; always 0 for a response returned as a success value.
    pub error: i32,
    /// Recovered hidden message (decode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Base64 of the output PNG with the embedded message (encode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_image: Option<String>,
    /// Server-supplied diagnostic message on failure envelopes.
    #[serde(rename = "error_message", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// License information for the presented key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseInfo>,
    /// Limits for the current operating mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<Limits>,
}

impl CodecResponse {
    /// Returns true when the service is operating in demo mode, i.e. the
    /// presented key did not resolve to an activated license.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        !self
            .license
            .as_ref()
            .is_some_and(|license| license.activation_status)
    }
}
