//! The native layer's upward path.

use std::ffi::c_char;

use dcmaui_types::{EventType, Payload, ViewId};
use tracing::debug;

use crate::bridge;
use crate::callbacks::{self, EventCallback};
use crate::error::FfiResult;

/// Sets the managed runtime's event callback. Null clears it.
///
/// # Safety
/// A non-null `callback` must stay callable until it is replaced or cleared.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_set_event_callback(callback: Option<EventCallback>) {
    let sink = callback.map(|callback| unsafe { callbacks::event_sink(callback) });
    bridge().set_event_sink(sink);
}

/// Reports a UI event. Fire-and-forget: with no callback registered, or
/// with any null argument, the event is dropped.
///
/// # Safety
/// Each argument must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_send_event(
    view_id: *const c_char,
    event_type: *const c_char,
    event_data_json: *const c_char,
) {
    if let Err(e) = unsafe { send_event_inner(view_id, event_type, event_data_json) } {
        debug!("Event dropped: {e}");
    }
}

unsafe fn send_event_inner(
    view_id: *const c_char,
    event_type: *const c_char,
    event_data_json: *const c_char,
) -> FfiResult<()> {
    let view_id = unsafe { ViewId::from_ptr(view_id) }?;
    let event_type = unsafe { EventType::from_ptr(event_type) }?;
    let data = unsafe { Payload::from_ptr(event_data_json) }?;
    bridge().events().send_event(view_id, event_type, data);
    Ok(())
}
