//! Client SDK for the stegocodec steganography web service.
//!
//! The service hides a password-encrypted message inside an image (AES with
//! a PBKDF2-derived key) and extracts it again; all embedding, encryption
//! and image manipulation happen server-side. This crate handles:
//! - Multipart request construction and upload
//! - Response envelope parsing and the numeric error taxonomy
//! - Local file I/O (reading source images, writing the encoded PNG)
//!
//! # Operations
//!
//! - [`CodecClient::login`] — license and limit information for the key
//! - [`CodecClient::encode`] — hide an encrypted message in an image
//! - [`CodecClient::decode`] — recover a hidden message
//!
//! An absent activation key means demo mode with reduced limits.

mod client;
mod error;
mod image;
mod types;
mod units;

pub use client::{CodecClient, DEFAULT_API_URL};
pub use error::{ApiCode, CodecError, CodecResult};
pub use image::ImageSource;
pub use types::{CodecResponse, LicenseInfo, LicenseType, Limits};
pub use units::convert_size;
