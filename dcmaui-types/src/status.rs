//! Command results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ABI-level result of a command: `0` means not handled, anything else
/// means handled. The raw value a handler returns is preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Status(i8);

impl Status {
    /// Failure, or no handler registered.
    pub const NOT_HANDLED: Self = Self(0);
    /// Canonical success value.
    pub const HANDLED: Self = Self(1);

    #[must_use]
    pub const fn from_raw(raw: i8) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> i8 {
        self.0
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 != 0
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::NOT_HANDLED
    }
}

impl From<bool> for Status {
    fn from(handled: bool) -> Self {
        if handled { Self::HANDLED } else { Self::NOT_HANDLED }
    }
}

impl From<Status> for i8 {
    fn from(status: Status) -> Self {
        status.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened to a command on the Rust side of the bridge.
///
/// The C ABI cannot tell "no handler" apart from "handler said no"; both
/// become [`Status::NOT_HANDLED`]. Rust callers get the distinction here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "status", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// The slot for this operation was empty; nothing was invoked.
    Unregistered,
    /// A handler ran and returned this status.
    Completed(Status),
}

impl CommandOutcome {
    /// Collapses the outcome to the status reported across the ABI.
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::Unregistered => Status::NOT_HANDLED,
            Self::Completed(status) => status,
        }
    }

    #[must_use]
    pub const fn is_registered(self) -> bool {
        matches!(self, Self::Completed(_))
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        self.status().is_success()
    }
}

impl From<CommandOutcome> for Status {
    fn from(outcome: CommandOutcome) -> Self {
        outcome.status()
    }
}
