//! Shared error type across gaugekit crates.

use thiserror::Error;

use crate::value::NumericKind;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Metric key not present in the store.
    NotFound,
    /// `add` on a key whose stored kind differs from the incoming one.
    KindMismatch,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::KindMismatch => "KIND_MISMATCH",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GaugeError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum GaugeError {
    #[error("gauge metric '{0}' not found")]
    NotFound(String),
    #[error("kind mismatch for metric `{key}`: stored {stored}, got {incoming}")]
    KindMismatch {
        key: String,
        stored: NumericKind,
        incoming: NumericKind,
    },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl GaugeError {
    /// Map the error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GaugeError::NotFound(_) => ErrorCode::NotFound,
            GaugeError::KindMismatch { .. } => ErrorCode::KindMismatch,
            GaugeError::BadConfig(_) => ErrorCode::BadConfig,
            GaugeError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            GaugeError::Internal(_) => ErrorCode::Internal,
        }
    }
}
