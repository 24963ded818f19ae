//! Error types for wgmodel
//!
//! This module defines the error types used throughout the crate. We use
//! `thiserror` for ergonomic error definitions; callers embedding these
//! types into an application stack can wrap them however they like.

use thiserror::Error;

/// Main error type for wgmodel operations
#[derive(Error, Debug)]
pub enum WgModelError {
    /// Key construction from a byte slice of the wrong length
    #[error("Invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Malformed base64 while parsing a key's text form
    #[error("Invalid base64 key encoding: {0}")]
    KeyDecode(#[from] base64::DecodeError),

    /// Configuration change-set validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key file permission errors
    #[error("Permission denied: {0}")]
    Permission(String),

    /// Key file I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using WgModelError
pub type Result<T> = std::result::Result<T, WgModelError>;
