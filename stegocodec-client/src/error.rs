//! Error types for the codec client.
//!
//! The service reports failures through a numeric code in the response
//! envelope. `ApiCode` mirrors that wire taxonomy; `CodecError` adds the
//! client-side failure modes (transport, malformed response, local I/O)
//! under the same numbering so callers can branch on `code()` regardless
//! of where a failure originated.

use serde_json::Value;
use thiserror::Error;

use crate::types::CodecResponse;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Service-reported error codes (the nonzero values of the `error` field).
///
/// Codes the service may add in the future are preserved verbatim as
/// `Other`, never collapsed into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiCode {
    /// Unknown error.
    Unknown,
    /// Message is too long for the selected image file.
    MessageTooLong,
    /// Image file exceeds the service-side size limit.
    ImageTooBig,
    /// Input file is invalid or missing.
    InvalidInput,
    /// Image file format is not supported.
    UnsupportedFormat,
    /// Image file is malformed; cannot embed or extract a message.
    ImageMalformed,
    /// Provided password is invalid.
    InvalidPassword,
    /// Message exceeds the license-tier length limit.
    MessageLimit,
    /// Password exceeds the license-tier length limit.
    PasswordLimit,
    /// License key is invalid or expired (no usage credits left).
    InvalidLicense,
    /// Any other nonzero code, carried unchanged.
    Other(i32),
}

impl ApiCode {
    /// Maps a nonzero wire code to its taxonomy member.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Unknown,
            2 => Self::MessageTooLong,
            3 => Self::ImageTooBig,
            4 => Self::InvalidInput,
            5 => Self::UnsupportedFormat,
            6 => Self::ImageMalformed,
            7 => Self::InvalidPassword,
            9 => Self::MessageLimit,
            10 => Self::PasswordLimit,
            100 => Self::InvalidLicense,
            other => Self::Other(other),
        }
    }

    /// Returns the numeric wire code.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Unknown => 1,
            Self::MessageTooLong => 2,
            Self::ImageTooBig => 3,
            Self::InvalidInput => 4,
            Self::UnsupportedFormat => 5,
            Self::ImageMalformed => 6,
            Self::InvalidPassword => 7,
            Self::MessageLimit => 9,
            Self::PasswordLimit => 10,
            Self::InvalidLicense => 100,
            Self::Other(code) => *code,
        }
    }

    /// Fallback message used when the service omits `error_message`.
    #[must_use]
    pub fn default_message(&self) -> String {
        match self {
            Self::Unknown => "unknown error".to_string(),
            Self::MessageTooLong => {
                "message is too long for the selected image file".to_string()
            }
            Self::ImageTooBig => "image file is too big".to_string(),
            Self::InvalidInput => "image file is invalid".to_string(),
            Self::UnsupportedFormat => "image file format is not supported".to_string(),
            Self::ImageMalformed => {
                "image file is malformed, cannot embed or extract a message".to_string()
            }
            Self::InvalidPassword => "provided password is invalid".to_string(),
            Self::MessageLimit => "message exceeds the license length limit".to_string(),
            Self::PasswordLimit => "password exceeds the license length limit".to_string(),
            Self::InvalidLicense => {
                "license key is invalid or expired (no usage credits left)".to_string()
            }
            Self::Other(code) => format!("API error code {code}"),
        }
    }
}

impl std::fmt::Display for ApiCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by [`CodecClient`](crate::CodecClient) operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Cannot reach the web API (network failure, timeout, or non-2xx status).
    #[error("web API connection failed: {0}")]
    Connection(String),

    /// Response body was not JSON or lacked the mandatory `error` field.
    #[error("malformed API response: {message}")]
    MalformedResponse {
        /// What went wrong while interpreting the body.
        message: String,
        /// The parsed body, when it was at least valid JSON.
        raw: Option<Value>,
    },

    /// A local precondition failed; no request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The service rejected the request with a taxonomy code.
    #[error("API error {code}: {message}")]
    Api {
        /// The exact service-reported code.
        code: ApiCode,
        /// Server-supplied message, or the code's default.
        message: String,
        /// Full raw response envelope for diagnostics.
        raw: Value,
    },

    /// The service succeeded but the output file could not be written.
    ///
    /// A usage credit has already been consumed server-side; the successful
    /// response is carried here so the encoded payload stays recoverable.
    #[error("cannot write output file: {message}")]
    OutputFile {
        /// The underlying write or decode failure.
        message: String,
        /// The full successful response from the service.
        response: CodecResponse,
    },
}

impl CodecError {
    /// Returns the numeric taxonomy code for this error.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Connection(_) => -1,
            Self::MalformedResponse { .. } => 1,
            Self::InvalidInput(_) => 4,
            Self::Api { code, .. } => code.code(),
            Self::OutputFile { .. } => 99,
        }
    }
}
