//! Error handling for the hashing module

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// `update` or `finish` was called on a context that already produced its digest
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// A caller supplied unusable input at the boundary (e.g. no inputs at all)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text could not be decoded as a 32-byte hex digest
    #[error("Invalid hex digest: {0}")]
    InvalidHex(String),

    /// A computed digest did not match the expected one
    #[error("Hash verification failed")]
    VerificationFailed,

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `invalid_argument` error
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Whether this error means the context must be replaced or reset
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
