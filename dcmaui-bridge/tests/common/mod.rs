//! Shared test helpers for gateway tests.

#![allow(dead_code)]

use dcmaui_bridge::{CommandHandlers, NativeBackend, Status};
use dcmaui_types::{EventType, Payload, ViewId, ViewType};
use std::sync::{Arc, Mutex};

/// One observed handler invocation, with every string argument copied out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Initialize,
    CreateView { view_id: String, view_type: String, props: String },
    UpdateView { view_id: String, props: String },
    DeleteView { view_id: String },
    AttachView { child: String, parent: String, index: i32 },
    SetChildren { view_id: String, children: String },
    AddEventListeners { view_id: String, events: String },
    RemoveEventListeners { view_id: String, events: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedEvent {
    pub view_id: String,
    pub event_type: String,
    pub data: String,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;
pub type EventLog = Arc<Mutex<Vec<ObservedEvent>>>;

pub fn new_log<T>() -> Arc<Mutex<Vec<T>>> {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn own(token: impl std::fmt::Display) -> String {
    token.to_string()
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

/// A handler set that logs every call and returns `status`.
pub fn recording_handlers(log: &CallLog, status: Status) -> CommandHandlers {
    let l0 = Arc::clone(log);
    let l1 = Arc::clone(log);
    let l2 = Arc::clone(log);
    let l3 = Arc::clone(log);
    let l4 = Arc::clone(log);
    let l5 = Arc::clone(log);
    let l6 = Arc::clone(log);
    let l7 = Arc::clone(log);

    CommandHandlers::new()
        .with_initialize(move || {
            l0.lock().unwrap().push(Call::Initialize);
            status
        })
        .with_create_view(move |id, ty, props| {
            l1.lock().unwrap().push(Call::CreateView {
                view_id: own(id),
                view_type: own(ty),
                props: own(props),
            });
            status
        })
        .with_update_view(move |id, props| {
            l2.lock().unwrap().push(Call::UpdateView { view_id: own(id), props: own(props) });
            status
        })
        .with_delete_view(move |id| {
            l3.lock().unwrap().push(Call::DeleteView { view_id: own(id) });
            status
        })
        .with_attach_view(move |child, parent, index| {
            l4.lock().unwrap().push(Call::AttachView {
                child: own(child),
                parent: own(parent),
                index,
            });
            status
        })
        .with_set_children(move |id, children| {
            l5.lock().unwrap().push(Call::SetChildren {
                view_id: own(id),
                children: own(children),
            });
            status
        })
        .with_add_event_listeners(move |id, events| {
            l6.lock().unwrap().push(Call::AddEventListeners {
                view_id: own(id),
                events: own(events),
            });
            status
        })
        .with_remove_event_listeners(move |id, events| {
            l7.lock().unwrap().push(Call::RemoveEventListeners {
                view_id: own(id),
                events: own(events),
            });
            status
        })
}

/// A sink closure that logs every event.
pub fn recording_sink(
    log: &EventLog,
) -> impl Fn(ViewId<'_>, EventType<'_>, Payload<'_>) + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |view_id: ViewId<'_>, event_type: EventType<'_>, data: Payload<'_>| {
        log.lock().unwrap().push(ObservedEvent {
            view_id: own(view_id),
            event_type: own(event_type),
            data: own(data),
        });
    }
}

/// Backend that accepts everything and counts calls.
#[derive(Default)]
pub struct CountingBackend {
    pub log: Mutex<Vec<Call>>,
}

impl NativeBackend for CountingBackend {
    fn initialize(&self) -> Status {
        self.log.lock().unwrap().push(Call::Initialize);
        Status::HANDLED
    }

    fn create_view(&self, view_id: ViewId<'_>, view_type: ViewType<'_>, props: Payload<'_>) -> Status {
        self.log.lock().unwrap().push(Call::CreateView {
            view_id: own(view_id),
            view_type: own(view_type),
            props: own(props),
        });
        Status::HANDLED
    }

    fn update_view(&self, view_id: ViewId<'_>, props: Payload<'_>) -> Status {
        self.log.lock().unwrap().push(Call::UpdateView { view_id: own(view_id), props: own(props) });
        Status::HANDLED
    }

    fn delete_view(&self, view_id: ViewId<'_>) -> Status {
        self.log.lock().unwrap().push(Call::DeleteView { view_id: own(view_id) });
        Status::HANDLED
    }

    fn attach_view(&self, child: ViewId<'_>, parent: ViewId<'_>, index: i32) -> Status {
        self.log.lock().unwrap().push(Call::AttachView {
            child: own(child),
            parent: own(parent),
            index,
        });
        Status::HANDLED
    }

    fn set_children(&self, view_id: ViewId<'_>, children: Payload<'_>) -> Status {
        self.log.lock().unwrap().push(Call::SetChildren {
            view_id: own(view_id),
            children: own(children),
        });
        Status::HANDLED
    }

    fn add_event_listeners(&self, view_id: ViewId<'_>, events: Payload<'_>) -> Status {
        self.log.lock().unwrap().push(Call::AddEventListeners {
            view_id: own(view_id),
            events: own(events),
        });
        Status::HANDLED
    }

    fn remove_event_listeners(&self, view_id: ViewId<'_>, events: Payload<'_>) -> Status {
        self.log.lock().unwrap().push(Call::RemoveEventListeners {
            view_id: own(view_id),
            events: own(events),
        });
        Status::HANDLED
    }
}
