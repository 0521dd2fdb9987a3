//! Log subscriber setup for hosts that embed the bridge.
//!
//! The bridge crates only emit `tracing` events. Installing a subscriber is
//! left to the host, which can do it through [`dcmaui_init_logging`].

use std::ffi::c_char;

use dcmaui_types::Payload;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::{FfiError, FfiResult};

/// Environment variable consulted for the default filter.
pub const LOG_ENV_VAR: &str = "DCMAUI_LOG";

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `"dcmaui_bridge=trace,info"`.
    pub filter: String,
    pub ansi: bool,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            ansi: false,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Defaults, with the filter taken from `DCMAUI_LOG` when it is set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_filter_override(std::env::var(LOG_ENV_VAR).ok())
    }

    fn with_filter_override(filter: Option<String>) -> Self {
        match filter {
            Some(filter) if !filter.trim().is_empty() => Self {
                filter,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Parses a config; missing fields take their defaults.
    pub fn from_json(json: &str) -> FfiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Installs a global fmt subscriber. Fails if one is already installed.
    pub fn install(&self) -> FfiResult<()> {
        let filter =
            EnvFilter::try_new(&self.filter).map_err(|e| FfiError::Logging(e.to_string()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(self.ansi)
            .with_target(self.with_target)
            .compact()
            .try_init()
            .map_err(|e| FfiError::Logging(e.to_string()))
    }
}

/// Installs the bridge's log subscriber.
///
/// `config_json` is a [`LogConfig`] as JSON, or null for
/// [`LogConfig::from_env`]. Missing JSON fields take the fixed defaults. Returns
/// `1` on success and `0` if the config is invalid or a subscriber already
/// exists.
///
/// # Safety
/// `config_json` must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_init_logging(config_json: *const c_char) -> i8 {
    match unsafe { init_logging_inner(config_json) } {
        Ok(()) => {
            debug!("Bridge logging initialized");
            1
        }
        Err(e) => {
            eprintln!("dcmaui: {e}");
            0
        }
    }
}

unsafe fn init_logging_inner(config_json: *const c_char) -> FfiResult<()> {
    let config = if config_json.is_null() {
        LogConfig::from_env()
    } else {
        let json = unsafe { Payload::from_ptr(config_json) }?;
        LogConfig::from_json(json.to_str()?)?
    };
    config.install()
}
