//! Core type definitions for the DCMAUI native bridge.
//!
//! Everything that crosses the bridge is either an opaque, borrowed C string
//! or a small integer status:
//! - [`ViewId`], [`ViewType`], [`EventType`] and [`Payload`] wrap `&CStr`
//!   borrowed for the duration of one call
//! - [`Status`] is the ABI-level `int8_t` result of a command
//! - [`CommandOutcome`] tells a Rust caller whether a handler ran at all
//! - [`Operation`] names the eight command kinds in registration order
//!
//! None of these types inspect their contents. Interpretation of view types
//! and JSON payloads belongs to the native layer or the managed runtime.

mod ids;
mod operation;
mod status;

pub use ids::{EventType, Payload, ViewId, ViewType};
pub use operation::Operation;
pub use status::{CommandOutcome, Status};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when adapting raw bridge arguments.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("null pointer passed for `{argument}`")]
    NullPointer { argument: &'static str },

    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
