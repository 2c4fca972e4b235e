//! Input image sources.
//!
//! Commands that upload an image accept either a filesystem path or an
//! in-memory byte buffer. The two are a sum type resolved once at the API
//! boundary, so the transport layer only ever sees bytes.

use std::path::{Path, PathBuf};

use crate::error::{CodecError, CodecResult};

/// Fallback multipart filename for in-memory buffers.
const BUFFER_FILE_NAME: &str = "image";

/// A source of image bytes: a path to read, or the bytes themselves.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Read the image from this path at request time.
    Path(PathBuf),
    /// Upload these bytes as-is.
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Resolves the source to its byte payload.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidInput`] when the path cannot be read or
    /// the byte buffer is empty. Raised before any request is sent.
    pub async fn read(&self) -> CodecResult<Vec<u8>> {
        match self {
            Self::Path(path) => tokio::fs::read(path).await.map_err(|e| {
                CodecError::InvalidInput(format!("cannot read {}: {e}", path.display()))
            }),
            Self::Bytes(bytes) => {
                if bytes.is_empty() {
                    return Err(CodecError::InvalidInput(
                        "input image buffer is empty".to_string(),
                    ));
                }
                Ok(bytes.clone())
            }
        }
    }

    /// Filename to attach to the multipart image part.
    #[must_use]
    pub fn file_name(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| BUFFER_FILE_NAME.to_string()),
            Self::Bytes(_) => BUFFER_FILE_NAME.to_string(),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<String> for ImageSource {
    fn from(path: String) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageSource {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}
