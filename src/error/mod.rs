//! Error types and Result aliases for keygate.
//!
//! This module defines the error hierarchy used throughout the crate.
//! Startup and serving return `Result<T>`. The header extractor returns
//! the narrower [`AuthError`] so callers can branch on the two failure
//! kinds directly.

use thiserror::Error;

/// Result type alias using keygate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for keygate operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Server/API error.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to extract an API key from an `Authorization` header.
///
/// There are exactly two kinds. Callers map them to protocol responses;
/// the HTTP layer answers `401` for a missing header and `400` for a
/// malformed one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    /// No `Authorization` header, or an empty one.
    #[error("no authorization header included")]
    MissingAuthHeader,

    /// Header present but not of the form `ApiKey <key>`.
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Server/API errors.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("failed to bind to {address}: {reason}")]
    BindFailed { address: String, reason: String },
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl AuthError {
    /// Short stable label, used for metric labels and log fields.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::MissingAuthHeader => "missing",
            Self::MalformedAuthHeader => "malformed",
        }
    }
}
