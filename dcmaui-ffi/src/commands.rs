//! Command entry points called by the managed runtime, plus the native
//! layer's registration call.

use std::ffi::c_char;

use dcmaui_bridge::Status;
use dcmaui_types::{Operation, Payload, ViewId, ViewType};
use tracing::debug;

use crate::bridge;
use crate::callbacks::{
    AttachViewCallback, CreateViewCallback, DeleteViewCallback, EventListenersCallback,
    InitializeCallback, NativeCallbacks, SetChildrenCallback, UpdateViewCallback,
};
use crate::error::FfiResult;

/// Registers the native implementations of all eight commands at once.
///
/// Replaces any previous registration entirely: a null callback here leaves
/// that command unregistered even if an earlier call set it.
///
/// # Safety
/// Every non-null callback must stay callable for as long as it is
/// registered and must accept valid null-terminated strings.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn dcmaui_register_swift_functions(
    init: Option<InitializeCallback>,
    create: Option<CreateViewCallback>,
    update: Option<UpdateViewCallback>,
    delete: Option<DeleteViewCallback>,
    attach: Option<AttachViewCallback>,
    set_children: Option<SetChildrenCallback>,
    add_listeners: Option<EventListenersCallback>,
    remove_listeners: Option<EventListenersCallback>,
) {
    let callbacks = NativeCallbacks {
        initialize: init,
        create_view: create,
        update_view: update,
        delete_view: delete,
        attach_view: attach,
        set_children,
        add_event_listeners: add_listeners,
        remove_event_listeners: remove_listeners,
    };
    let handlers = unsafe { callbacks.into_handlers() };
    bridge().register_commands(handlers);
}

/// Asks the native layer to prepare itself.
#[unsafe(no_mangle)]
pub extern "C" fn dcmaui_initialize() -> i8 {
    bridge().commands().initialize().status().raw()
}

/// Creates a native view.
///
/// # Safety
/// Each argument must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_create_view(
    view_id: *const c_char,
    view_type: *const c_char,
    props_json: *const c_char,
) -> i8 {
    let result = unsafe { create_view_inner(view_id, view_type, props_json) };
    settle(Operation::CreateView, result)
}

unsafe fn create_view_inner(
    view_id: *const c_char,
    view_type: *const c_char,
    props_json: *const c_char,
) -> FfiResult<Status> {
    let view_id = unsafe { ViewId::from_ptr(view_id) }?;
    let view_type = unsafe { ViewType::from_ptr(view_type) }?;
    let props = unsafe { Payload::from_ptr(props_json) }?;
    Ok(bridge().commands().create_view(view_id, view_type, props).status())
}

/// Updates a view's properties.
///
/// # Safety
/// Each argument must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_update_view(view_id: *const c_char, props_json: *const c_char) -> i8 {
    let result = unsafe { update_view_inner(view_id, props_json) };
    settle(Operation::UpdateView, result)
}

unsafe fn update_view_inner(view_id: *const c_char, props_json: *const c_char) -> FfiResult<Status> {
    let view_id = unsafe { ViewId::from_ptr(view_id) }?;
    let props = unsafe { Payload::from_ptr(props_json) }?;
    Ok(bridge().commands().update_view(view_id, props).status())
}

/// Removes a view.
///
/// # Safety
/// `view_id` must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_delete_view(view_id: *const c_char) -> i8 {
    let result = unsafe { ViewId::from_ptr(view_id) }
        .map(|view_id| bridge().commands().delete_view(view_id).status())
        .map_err(Into::into);
    settle(Operation::DeleteView, result)
}

/// Places a child view under a parent at `index`.
///
/// # Safety
/// `child_id` and `parent_id` must be null or valid null-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_attach_view(
    child_id: *const c_char,
    parent_id: *const c_char,
    index: i32,
) -> i8 {
    let result = unsafe { attach_view_inner(child_id, parent_id, index) };
    settle(Operation::AttachView, result)
}

unsafe fn attach_view_inner(
    child_id: *const c_char,
    parent_id: *const c_char,
    index: i32,
) -> FfiResult<Status> {
    let child = unsafe { ViewId::from_ptr(child_id) }?;
    let parent = unsafe { ViewId::from_ptr(parent_id) }?;
    Ok(bridge().commands().attach_view(child, parent, index).status())
}

/// Replaces the ordered child list of a view.
///
/// # Safety
/// Each argument must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_set_children(view_id: *const c_char, children_json: *const c_char) -> i8 {
    let result = unsafe { view_payload(view_id, children_json) }
        .map(|(view_id, children)| bridge().commands().set_children(view_id, children).status());
    settle(Operation::SetChildren, result)
}

/// Subscribes a view to the event names in `events_json`.
///
/// # Safety
/// Each argument must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_add_event_listeners(
    view_id: *const c_char,
    events_json: *const c_char,
) -> i8 {
    let result = unsafe { view_payload(view_id, events_json) }
        .map(|(view_id, events)| bridge().commands().add_event_listeners(view_id, events).status());
    settle(Operation::AddEventListeners, result)
}

/// Unsubscribes a view from the event names in `events_json`.
///
/// # Safety
/// Each argument must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dcmaui_remove_event_listeners(
    view_id: *const c_char,
    events_json: *const c_char,
) -> i8 {
    let result = unsafe { view_payload(view_id, events_json) }.map(|(view_id, events)| {
        bridge()
            .commands()
            .remove_event_listeners(view_id, events)
            .status()
    });
    settle(Operation::RemoveEventListeners, result)
}

unsafe fn view_payload<'a>(
    view_id: *const c_char,
    payload: *const c_char,
) -> FfiResult<(ViewId<'a>, Payload<'a>)> {
    let view_id = unsafe { ViewId::from_ptr(view_id) }?;
    let payload = unsafe { Payload::from_ptr(payload) }?;
    Ok((view_id, payload))
}

fn settle(op: Operation, result: FfiResult<Status>) -> i8 {
    match result {
        Ok(status) => status.raw(),
        Err(e) => {
            debug!(operation = %op, "Command rejected: {e}");
            Status::NOT_HANDLED.raw()
        }
    }
}
