//! Domain error types

use thiserror::Error;

/// Error when decoding an encoded still image
#[derive(Debug, Clone, Error)]
pub enum ImageDataError {
    #[error("Unsupported image type: \"{0}\". Supported: png, jpeg, jpg, webp")]
    UnsupportedMimeType(String),

    #[error("Invalid base64 image payload: {0}")]
    InvalidEncoding(String),

    #[error("Image payload is empty")]
    Empty,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
