//! Shared error type across reqmetrics crates.

use thiserror::Error;

/// Stable error kinds (safe to match on or log).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller broke the start/end pairing contract.
    IllegalState,
    /// Interval end precedes its start.
    InvalidInterval,
    /// Unsupported config document version.
    UnsupportedVersion,
    /// Config could not be read, parsed, or validated.
    Config,
}

impl ErrorKind {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::IllegalState => "ILLEGAL_STATE",
            ErrorKind::InvalidInterval => "INVALID_INTERVAL",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorKind::Config => "CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and report crates.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("illegal state: {0}")]
    IllegalState(String),
    #[error("invalid interval: end {end} precedes start {start}")]
    InvalidInterval { start: i64, end: i64 },
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("config: {0}")]
    Config(String),
}

impl MetricsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricsError::IllegalState(_) => ErrorKind::IllegalState,
            MetricsError::InvalidInterval { .. } => ErrorKind::InvalidInterval,
            MetricsError::UnsupportedVersion => ErrorKind::UnsupportedVersion,
            MetricsError::Config(_) => ErrorKind::Config,
        }
    }
}
