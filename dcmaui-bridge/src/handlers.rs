//! Native-side command handlers.

use std::fmt;
use std::sync::Arc;

use dcmaui_types::{CommandOutcome, Operation, Payload, Status, ViewId, ViewType};

type InitializeFn = dyn Fn() -> Status + Send + Sync;
type CreateViewFn = dyn Fn(ViewId<'_>, ViewType<'_>, Payload<'_>) -> Status + Send + Sync;
type ViewPayloadFn = dyn Fn(ViewId<'_>, Payload<'_>) -> Status + Send + Sync;
type DeleteViewFn = dyn Fn(ViewId<'_>) -> Status + Send + Sync;
type AttachViewFn = dyn Fn(ViewId<'_>, ViewId<'_>, i32) -> Status + Send + Sync;

/// A platform's implementation of the eight view commands.
///
/// Arguments are borrowed for the duration of the call. Implementations that
/// need to keep a view id or payload must copy it.
pub trait NativeBackend: Send + Sync {
    /// Prepares the native layer. Expected once, before any other command.
    fn initialize(&self) -> Status;

    fn create_view(&self, view_id: ViewId<'_>, view_type: ViewType<'_>, props: Payload<'_>)
    -> Status;

    fn update_view(&self, view_id: ViewId<'_>, props: Payload<'_>) -> Status;

    fn delete_view(&self, view_id: ViewId<'_>) -> Status;

    /// Places `child` under `parent` at `index`. Index semantics are the
    /// backend's to define.
    fn attach_view(&self, child: ViewId<'_>, parent: ViewId<'_>, index: i32) -> Status;

    /// Replaces the full ordered child list of `view_id`.
    fn set_children(&self, view_id: ViewId<'_>, children: Payload<'_>) -> Status;

    fn add_event_listeners(&self, view_id: ViewId<'_>, events: Payload<'_>) -> Status;

    fn remove_event_listeners(&self, view_id: ViewId<'_>, events: Payload<'_>) -> Status;
}

/// One complete, immutable set of command slots.
///
/// A set is registered as a whole. Slots left unset report
/// [`CommandOutcome::Unregistered`] when dispatched, even if an earlier set
/// had a handler there.
#[derive(Default)]
pub struct CommandHandlers {
    initialize: Option<Box<InitializeFn>>,
    create_view: Option<Box<CreateViewFn>>,
    update_view: Option<Box<ViewPayloadFn>>,
    delete_view: Option<Box<DeleteViewFn>>,
    attach_view: Option<Box<AttachViewFn>>,
    set_children: Option<Box<ViewPayloadFn>>,
    add_event_listeners: Option<Box<ViewPayloadFn>>,
    remove_event_listeners: Option<Box<ViewPayloadFn>>,
}

impl CommandHandlers {
    /// Creates a set with every slot unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every slot from a backend implementation.
    pub fn from_backend<B: NativeBackend + 'static>(backend: Arc<B>) -> Self {
        let initialize = Arc::clone(&backend);
        let create = Arc::clone(&backend);
        let update = Arc::clone(&backend);
        let delete = Arc::clone(&backend);
        let attach = Arc::clone(&backend);
        let set_children = Arc::clone(&backend);
        let add_listeners = Arc::clone(&backend);
        let remove_listeners = backend;

        Self::new()
            .with_initialize(move || initialize.initialize())
            .with_create_view(move |id, ty, props| create.create_view(id, ty, props))
            .with_update_view(move |id, props| update.update_view(id, props))
            .with_delete_view(move |id| delete.delete_view(id))
            .with_attach_view(move |child, parent, index| attach.attach_view(child, parent, index))
            .with_set_children(move |id, children| set_children.set_children(id, children))
            .with_add_event_listeners(move |id, events| add_listeners.add_event_listeners(id, events))
            .with_remove_event_listeners(move |id, events| {
                remove_listeners.remove_event_listeners(id, events)
            })
    }

    #[must_use]
    pub fn with_initialize<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> Status + Send + Sync + 'static,
    {
        self.initialize = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_create_view<F>(mut self, handler: F) -> Self
    where
        F: Fn(ViewId<'_>, ViewType<'_>, Payload<'_>) -> Status + Send + Sync + 'static,
    {
        self.create_view = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_update_view<F>(mut self, handler: F) -> Self
    where
        F: Fn(ViewId<'_>, Payload<'_>) -> Status + Send + Sync + 'static,
    {
        self.update_view = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_delete_view<F>(mut self, handler: F) -> Self
    where
        F: Fn(ViewId<'_>) -> Status + Send + Sync + 'static,
    {
        self.delete_view = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_attach_view<F>(mut self, handler: F) -> Self
    where
        F: Fn(ViewId<'_>, ViewId<'_>, i32) -> Status + Send + Sync + 'static,
    {
        self.attach_view = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_set_children<F>(mut self, handler: F) -> Self
    where
        F: Fn(ViewId<'_>, Payload<'_>) -> Status + Send + Sync + 'static,
    {
        self.set_children = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_add_event_listeners<F>(mut self, handler: F) -> Self
    where
        F: Fn(ViewId<'_>, Payload<'_>) -> Status + Send + Sync + 'static,
    {
        self.add_event_listeners = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_remove_event_listeners<F>(mut self, handler: F) -> Self
    where
        F: Fn(ViewId<'_>, Payload<'_>) -> Status + Send + Sync + 'static,
    {
        self.remove_event_listeners = Some(Box::new(handler));
        self
    }

    /// Whether the slot for `op` holds a handler.
    #[must_use]
    pub fn is_set(&self, op: Operation) -> bool {
        match op {
            Operation::Initialize => self.initialize.is_some(),
            Operation::CreateView => self.create_view.is_some(),
            Operation::UpdateView => self.update_view.is_some(),
            Operation::DeleteView => self.delete_view.is_some(),
            Operation::AttachView => self.attach_view.is_some(),
            Operation::SetChildren => self.set_children.is_some(),
            Operation::AddEventListeners => self.add_event_listeners.is_some(),
            Operation::RemoveEventListeners => self.remove_event_listeners.is_some(),
        }
    }

    /// Operations with a handler, in registration order.
    #[must_use]
    pub fn registered(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| self.is_set(*op))
            .collect()
    }

    // ── Dispatch ────────────────────────────────────────────────
    //
    // Each call invokes the slot at most once and touches nothing else.

    pub fn initialize(&self) -> CommandOutcome {
        dispatch(self.initialize.as_deref(), |h| h())
    }

    pub fn create_view(
        &self,
        view_id: ViewId<'_>,
        view_type: ViewType<'_>,
        props: Payload<'_>,
    ) -> CommandOutcome {
        dispatch(self.create_view.as_deref(), |h| h(view_id, view_type, props))
    }

    pub fn update_view(&self, view_id: ViewId<'_>, props: Payload<'_>) -> CommandOutcome {
        dispatch(self.update_view.as_deref(), |h| h(view_id, props))
    }

    pub fn delete_view(&self, view_id: ViewId<'_>) -> CommandOutcome {
        dispatch(self.delete_view.as_deref(), |h| h(view_id))
    }

    pub fn attach_view(&self, child: ViewId<'_>, parent: ViewId<'_>, index: i32) -> CommandOutcome {
        dispatch(self.attach_view.as_deref(), |h| h(child, parent, index))
    }

    pub fn set_children(&self, view_id: ViewId<'_>, children: Payload<'_>) -> CommandOutcome {
        dispatch(self.set_children.as_deref(), |h| h(view_id, children))
    }

    pub fn add_event_listeners(&self, view_id: ViewId<'_>, events: Payload<'_>) -> CommandOutcome {
        dispatch(self.add_event_listeners.as_deref(), |h| h(view_id, events))
    }

    pub fn remove_event_listeners(
        &self,
        view_id: ViewId<'_>,
        events: Payload<'_>,
    ) -> CommandOutcome {
        dispatch(self.remove_event_listeners.as_deref(), |h| h(view_id, events))
    }
}

fn dispatch<H: ?Sized>(slot: Option<&H>, call: impl FnOnce(&H) -> Status) -> CommandOutcome {
    match slot {
        Some(handler) => CommandOutcome::Completed(call(handler)),
        None => CommandOutcome::Unregistered,
    }
}

impl fmt::Debug for CommandHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHandlers")
            .field("registered", &self.registered())
            .finish()
    }
}
