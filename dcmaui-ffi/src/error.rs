//! Error types for the C ABI layer.
//!
//! These never cross the boundary. Every export turns them into the
//! soft-failure status (`0`) or a dropped event.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FfiError {
    /// A null or malformed argument from the caller.
    #[error(transparent)]
    Argument(#[from] dcmaui_types::Error),

    /// Logging configuration JSON did not parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type for FFI helpers.
pub type FfiResult<T> = Result<T, FfiError>;
