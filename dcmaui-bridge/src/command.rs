//! Entry points the managed runtime calls to drive the native view tree.

use std::sync::Arc;

use dcmaui_types::{CommandOutcome, Operation, Payload, ViewId, ViewType};
use tracing::trace;

use crate::registry::HandlerRegistry;
use crate::stats::{BridgeStats, StatsSnapshot};

/// Forwards each command to the handler currently registered for it.
///
/// The gateway does not enforce ordering (for example that `initialize`
/// comes first), hold per-view state, or retry. A call with no registered
/// handler returns [`CommandOutcome::Unregistered`] and has no other effect.
#[derive(Debug, Clone)]
pub struct CommandGateway {
    registry: Arc<HandlerRegistry>,
    stats: Arc<BridgeStats>,
}

impl CommandGateway {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self::with_stats(registry, Arc::new(BridgeStats::new()))
    }

    pub fn with_stats(registry: Arc<HandlerRegistry>, stats: Arc<BridgeStats>) -> Self {
        Self { registry, stats }
    }

    /// Counters recorded by this gateway.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn initialize(&self) -> CommandOutcome {
        let outcome = self.registry.commands().initialize();
        self.record(Operation::Initialize, outcome)
    }

    pub fn create_view(
        &self,
        view_id: ViewId<'_>,
        view_type: ViewType<'_>,
        props: Payload<'_>,
    ) -> CommandOutcome {
        let outcome = self
            .registry
            .commands()
            .create_view(view_id, view_type, props);
        self.record(Operation::CreateView, outcome)
    }

    pub fn update_view(&self, view_id: ViewId<'_>, props: Payload<'_>) -> CommandOutcome {
        let outcome = self.registry.commands().update_view(view_id, props);
        self.record(Operation::UpdateView, outcome)
    }

    pub fn delete_view(&self, view_id: ViewId<'_>) -> CommandOutcome {
        let outcome = self.registry.commands().delete_view(view_id);
        self.record(Operation::DeleteView, outcome)
    }

    pub fn attach_view(&self, child: ViewId<'_>, parent: ViewId<'_>, index: i32) -> CommandOutcome {
        let outcome = self.registry.commands().attach_view(child, parent, index);
        self.record(Operation::AttachView, outcome)
    }

    pub fn set_children(&self, view_id: ViewId<'_>, children: Payload<'_>) -> CommandOutcome {
        let outcome = self.registry.commands().set_children(view_id, children);
        self.record(Operation::SetChildren, outcome)
    }

    pub fn add_event_listeners(&self, view_id: ViewId<'_>, events: Payload<'_>) -> CommandOutcome {
        let outcome = self.registry.commands().add_event_listeners(view_id, events);
        self.record(Operation::AddEventListeners, outcome)
    }

    pub fn remove_event_listeners(
        &self,
        view_id: ViewId<'_>,
        events: Payload<'_>,
    ) -> CommandOutcome {
        let outcome = self
            .registry
            .commands()
            .remove_event_listeners(view_id, events);
        self.record(Operation::RemoveEventListeners, outcome)
    }

    fn record(&self, op: Operation, outcome: CommandOutcome) -> CommandOutcome {
        if !outcome.is_registered() {
            trace!(operation = %op, "No native handler registered");
        }
        self.stats.record_command(op, outcome);
        outcome
    }
}
