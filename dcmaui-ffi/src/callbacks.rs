//! Adapters from raw native function pointers to bridge handlers.
//!
//! Each adapter forwards the caller's original pointers unchanged, so the
//! native layer receives exactly the bytes the managed runtime passed.

use std::ffi::c_char;

use dcmaui_bridge::{CommandHandlers, EventSink, Status};
use dcmaui_types::{EventType, Payload, ViewId};

pub type InitializeCallback = unsafe extern "C" fn() -> i8;
pub type CreateViewCallback =
    unsafe extern "C" fn(view_id: *const c_char, view_type: *const c_char, props_json: *const c_char) -> i8;
pub type UpdateViewCallback = unsafe extern "C" fn(view_id: *const c_char, props_json: *const c_char) -> i8;
pub type DeleteViewCallback = unsafe extern "C" fn(view_id: *const c_char) -> i8;
pub type AttachViewCallback =
    unsafe extern "C" fn(child_id: *const c_char, parent_id: *const c_char, index: i32) -> i8;
pub type SetChildrenCallback =
    unsafe extern "C" fn(view_id: *const c_char, children_json: *const c_char) -> i8;
pub type EventListenersCallback =
    unsafe extern "C" fn(view_id: *const c_char, events_json: *const c_char) -> i8;
pub type EventCallback =
    unsafe extern "C" fn(view_id: *const c_char, event_type: *const c_char, event_data_json: *const c_char);

/// The eight native command callbacks, any of which may be null.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCallbacks {
    pub initialize: Option<InitializeCallback>,
    pub create_view: Option<CreateViewCallback>,
    pub update_view: Option<UpdateViewCallback>,
    pub delete_view: Option<DeleteViewCallback>,
    pub attach_view: Option<AttachViewCallback>,
    pub set_children: Option<SetChildrenCallback>,
    pub add_event_listeners: Option<EventListenersCallback>,
    pub remove_event_listeners: Option<EventListenersCallback>,
}

impl NativeCallbacks {
    /// Wraps every non-null callback; null callbacks stay unregistered.
    ///
    /// # Safety
    /// Every non-null callback must be safe to call with valid
    /// null-terminated strings for as long as it stays registered, from any
    /// thread the managed runtime issues commands on.
    pub unsafe fn into_handlers(self) -> CommandHandlers {
        let mut handlers = CommandHandlers::new();
        // SAFETY (all closures below): the registrant guarantees the callback
        // contract above, and every pointer comes from a live `&CStr`.
        if let Some(callback) = self.initialize {
            handlers = handlers.with_initialize(move || Status::from_raw(unsafe { callback() }));
        }
        if let Some(callback) = self.create_view {
            handlers = handlers.with_create_view(move |id, ty, props| {
                Status::from_raw(unsafe { callback(id.as_ptr(), ty.as_ptr(), props.as_ptr()) })
            });
        }
        if let Some(callback) = self.update_view {
            handlers = handlers.with_update_view(move |id, props| {
                Status::from_raw(unsafe { callback(id.as_ptr(), props.as_ptr()) })
            });
        }
        if let Some(callback) = self.delete_view {
            handlers = handlers
                .with_delete_view(move |id| Status::from_raw(unsafe { callback(id.as_ptr()) }));
        }
        if let Some(callback) = self.attach_view {
            handlers = handlers.with_attach_view(move |child, parent, index| {
                Status::from_raw(unsafe { callback(child.as_ptr(), parent.as_ptr(), index) })
            });
        }
        if let Some(callback) = self.set_children {
            handlers = handlers.with_set_children(move |id, children| {
                Status::from_raw(unsafe { callback(id.as_ptr(), children.as_ptr()) })
            });
        }
        if let Some(callback) = self.add_event_listeners {
            handlers = handlers.with_add_event_listeners(move |id, events| {
                Status::from_raw(unsafe { callback(id.as_ptr(), events.as_ptr()) })
            });
        }
        if let Some(callback) = self.remove_event_listeners {
            handlers = handlers.with_remove_event_listeners(move |id, events| {
                Status::from_raw(unsafe { callback(id.as_ptr(), events.as_ptr()) })
            });
        }
        handlers
    }
}

/// Event sink that calls back into the managed runtime.
struct CallbackSink(EventCallback);

impl EventSink for CallbackSink {
    fn deliver(&self, view_id: ViewId<'_>, event_type: EventType<'_>, data: Payload<'_>) {
        // SAFETY: guaranteed by the registrant of the callback.
        unsafe { (self.0)(view_id.as_ptr(), event_type.as_ptr(), data.as_ptr()) }
    }
}

/// Boxes an event callback as a sink.
///
/// # Safety
/// `callback` must be safe to call with valid null-terminated strings from
/// any thread the native layer reports events on.
pub unsafe fn event_sink(callback: EventCallback) -> Box<dyn EventSink> {
    Box::new(CallbackSink(callback))
}
