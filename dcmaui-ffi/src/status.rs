//! Registration and traffic report for hosts that want to tell "not wired
//! up yet" apart from "native layer said no".

use std::ffi::{c_char, CString};

use dcmaui_bridge::{Bridge, BridgeState, Operation, StatsSnapshot};
use serde::{Deserialize, Serialize};

use crate::bridge;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeStatus {
    pub state: BridgeState,
    pub generation: u64,
    pub registered_operations: Vec<Operation>,
    pub event_sink_registered: bool,
    pub stats: StatsSnapshot,
}

impl BridgeStatus {
    pub fn of(bridge: &Bridge) -> Self {
        let registry = bridge.registry();
        Self {
            state: registry.state(),
            generation: registry.generation(),
            registered_operations: registry.snapshot().registered(),
            event_sink_registered: registry.has_event_sink(),
            stats: bridge.stats(),
        }
    }
}

/// Returns the bridge status as a JSON string.
///
/// The returned pointer must be freed with [`dcmaui_free_string`].
#[unsafe(no_mangle)]
pub extern "C" fn dcmaui_bridge_status() -> *mut c_char {
    let json = serde_json::to_string(&BridgeStatus::of(bridge()))
        .unwrap_or_else(|_| r#"{"error":"Failed to serialize bridge status"}"#.to_string());
    CString::new(json).unwrap_or_default().into_raw()
}

/// Frees a string returned by this library.
///
/// # Safety
/// `ptr` must be null or a pointer obtained from this library that has not
/// been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}
