use std::io;

use thiserror::Error;

/// Library-wide error type for petitions operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Request could not complete (connectivity, DNS, TLS, timeout).
    #[error("Network request failed: {0}")]
    Network(String),

    /// Response received but the status code indicates failure.
    #[error("Petitions endpoint returned HTTP {0}")]
    HttpStatus(u16),

    /// Response body does not match the petitions schema.
    #[error("Failed to decode petitions response: {0}")]
    Decode(String),

    /// No petition with the requested id in the fetched batch.
    #[error("Petition '{0}' not found")]
    PetitionNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
