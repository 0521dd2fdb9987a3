//! C ABI exports for the DCMAUI native bridge.
//!
//! The managed runtime calls the `dcmaui_*` command functions; the native
//! layer registers its implementations once at startup with
//! [`dcmaui_register_swift_functions`] and reports UI events with
//! [`dcmaui_send_event`]. Symbol names and signatures match
//! `include/dcmaui_native_bridge.h`.
//!
//! All string arguments are borrowed, null-terminated and valid only for the
//! duration of the call. They are forwarded as the same pointers and never
//! retained. A null string argument makes a command return `0` without
//! reaching its handler, and makes an event drop.
//!
//! # Status codes
//! `0` means not handled: either no handler is registered or the handler
//! failed. Any other value is whatever the native handler returned.

mod callbacks;
mod commands;
mod error;
mod events;
mod logging;
mod status;

use std::sync::LazyLock;

use dcmaui_bridge::Bridge;

pub use callbacks::{
    AttachViewCallback, CreateViewCallback, DeleteViewCallback, EventCallback,
    EventListenersCallback, InitializeCallback, NativeCallbacks, SetChildrenCallback,
    UpdateViewCallback,
};
pub use commands::*;
pub use error::{FfiError, FfiResult};
pub use events::*;
pub use logging::{dcmaui_init_logging, LogConfig, LOG_ENV_VAR};
pub use status::{dcmaui_bridge_status, dcmaui_free_string, BridgeStatus};

/// The process-wide bridge behind the exported symbols.
static BRIDGE: LazyLock<Bridge> = LazyLock::new(Bridge::new);

/// Returns the bridge the C entry points dispatch through.
pub fn bridge() -> &'static Bridge {
    &BRIDGE
}
