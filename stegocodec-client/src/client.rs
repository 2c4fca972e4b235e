//! The codec service client.
//!
//! All three commands (`login`, `encode`, `decode`) go through one
//! transport path: a single multipart POST to the service endpoint, with
//! the activation key attached to every request and the JSON envelope
//! interpreted by one helper. Embedding, encryption and image handling all
//! happen server-side; this client only moves bytes.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{ApiCode, CodecError, CodecResult};
use crate::image::ImageSource;
use crate::types::CodecResponse;

/// Default production endpoint of the codec web API.
pub const DEFAULT_API_URL: &str = "https://api.stegocodec.io/v1";

/// Client for the steganography web service.
///
/// Holds the activation key (or none for demo mode) and is immutable after
/// construction, so one instance can serve concurrent calls. The key is not
/// verified at construction; the service checks it on first use.
///
/// ```no_run
/// use stegocodec_client::CodecClient;
///
/// # async fn run() -> stegocodec_client::CodecResult<()> {
/// let client = CodecClient::with_key("YOUR-WEB-API-KEY");
/// client
///     .encode("input.jpg", "Secret message", "Pa$$word", "output.png")
///     .await?;
/// let result = client.decode("output.png", "Pa$$word").await?;
/// assert_eq!(result.message.as_deref(), Some("Secret message"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CodecClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl Default for CodecClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecClient {
    /// Creates a client without an activation key (demo-tier limits).
    #[must_use]
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a client using the given activation key.
    #[must_use]
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self::build(Some(api_key.into()))
    }

    fn build(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_API_URL.to_string(),
            api_key,
        }
    }

    /// Overrides the endpoint URL, for tests and self-hosted deployments.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Returns the endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Logs in to the service and returns the current license and limits.
    ///
    /// # Errors
    ///
    /// Any taxonomy error from the transport layer.
    pub async fn login(&self) -> CodecResult<CodecResponse> {
        debug!("logging in to the codec service");
        self.post(Form::new().text("command", "login")).await
    }

    /// Returns true when the presented key does not resolve to an activated
    /// license, i.e. the service applies demo-tier limits.
    pub async fn is_demo(&self) -> CodecResult<bool> {
        Ok(self.login().await?.is_demo())
    }

    /// Encrypts `message_to_hide` with `password`, hides it inside
    /// `input_image` and writes the resulting PNG to `output_image_path`
    /// (overwriting any existing file).
    ///
    /// Returns the full response envelope, only after the output file has
    /// been written.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidInput`] before any request when an argument is
    /// empty or the image is unreadable; any service taxonomy error;
    /// [`CodecError::OutputFile`] when the service succeeded but the local
    /// write failed (the successful response rides along in the error).
    pub async fn encode(
        &self,
        input_image: impl Into<ImageSource>,
        message_to_hide: &str,
        password: &str,
        output_image_path: impl AsRef<Path>,
    ) -> CodecResult<CodecResponse> {
        let input_image = input_image.into();
        let output_image_path = output_image_path.as_ref();

        if message_to_hide.is_empty() {
            return Err(CodecError::InvalidInput(
                "message_to_hide is required".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(CodecError::InvalidInput("password is required".to_string()));
        }
        if output_image_path.as_os_str().is_empty() {
            return Err(CodecError::InvalidInput(
                "output_image_path is required".to_string(),
            ));
        }

        let image = input_image.read().await?;
        debug!(bytes = image.len(), "uploading image for encoding");

        let form = Form::new()
            .text("command", "encode")
            .text("message", message_to_hide.to_string())
            .text("password", password.to_string())
            .part("image", Part::bytes(image).file_name(input_image.file_name()));

        let response = self.post(form).await?;
        self.write_output(&response, output_image_path).await?;
        Ok(response)
    }

    /// Retrieves the hidden message from an image previously produced by
    /// [`encode`](Self::encode), using the same password.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidInput`] before any request when an argument is
    /// empty or the image is unreadable; wrong password, foreign image and
    /// other service failures surface with their exact taxonomy code.
    pub async fn decode(
        &self,
        input_image: impl Into<ImageSource>,
        password: &str,
    ) -> CodecResult<CodecResponse> {
        let input_image = input_image.into();

        if password.is_empty() {
            return Err(CodecError::InvalidInput("password is required".to_string()));
        }

        let image = input_image.read().await?;
        debug!(bytes = image.len(), "uploading image for decoding");

        let form = Form::new()
            .text("command", "decode")
            .text("password", password.to_string())
            .part("image", Part::bytes(image).file_name(input_image.file_name()));

        self.post(form).await
    }

    /// Sends one multipart POST to the endpoint and interprets the JSON
    /// envelope. Single attempt, no retry or backoff.
    ///
    /// The activation key is attached to every request; demo mode sends an
    /// empty `key` field.
    async fn post(&self, form: Form) -> CodecResult<CodecResponse> {
        let form = form.text("key", self.api_key.clone().unwrap_or_default());

        debug!(endpoint = %self.endpoint, "sending multipart request");
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| CodecError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CodecError::Connection(format!("HTTP {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CodecError::Connection(e.to_string()))?;

        let raw: Value =
            serde_json::from_slice(&body).map_err(|e| CodecError::MalformedResponse {
                message: format!("response body is not JSON: {e}"),
                raw: None,
            })?;

        let Some(code) = raw.get("error").and_then(Value::as_i64) else {
            return Err(CodecError::MalformedResponse {
                message: "missing numeric `error` field".to_string(),
                raw: Some(raw),
            });
        };

        if code != 0 {
            let code = ApiCode::from_code(code as i32);
            let message = raw
                .get("error_message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| code.default_message());
            warn!(code = code.code(), %message, "service reported an error");
            return Err(CodecError::Api { code, message, raw });
        }

        serde_json::from_value(raw.clone()).map_err(|e| CodecError::MalformedResponse {
            message: format!("unexpected success envelope shape: {e}"),
            raw: Some(raw),
        })
    }

    /// Decodes the base64 image payload and writes it to `path`.
    ///
    /// Runs only on an already-successful response; any failure here is an
    /// [`CodecError::OutputFile`] that keeps the response recoverable, since
    /// the server-side operation (and any usage credit) already went through.
    async fn write_output(&self, response: &CodecResponse, path: &Path) -> CodecResult<()> {
        let output_file = |message: String| CodecError::OutputFile {
            message,
            response: response.clone(),
        };

        let encoded = response
            .encoded_image
            .as_deref()
            .ok_or_else(|| output_file("response carries no encodedImage field".to_string()))?;

        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| output_file(format!("invalid base64 image payload: {e}")))?;

        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| output_file(format!("{}: {e}", path.display())))?;

        info!(path = %path.display(), bytes = bytes.len(), "wrote encoded image");
        Ok(())
    }
}
