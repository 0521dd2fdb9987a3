use std::sync::Arc;

use dcmaui_types::{EventType, Payload, ViewId};

use crate::command::CommandGateway;
use crate::event::EventGateway;
use crate::handlers::{CommandHandlers, NativeBackend};
use crate::registry::{BridgeState, HandlerRegistry};
use crate::sink::EventSink;
use crate::stats::{BridgeStats, StatsSnapshot};

/// One bridge instance: a registry shared by a command gateway and an
/// event gateway.
///
/// Nothing here is global. Hosts that need a process-wide bridge keep one
/// `Bridge` in a static of their own.
#[derive(Debug)]
pub struct Bridge {
    registry: Arc<HandlerRegistry>,
    stats: Arc<BridgeStats>,
    commands: CommandGateway,
    events: EventGateway,
}

impl Bridge {
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Arc::new(HandlerRegistry::new()))
    }

    /// Builds gateways around an existing registry.
    #[must_use]
    pub fn with_registry(registry: Arc<HandlerRegistry>) -> Self {
        let stats = Arc::new(BridgeStats::new());
        Self {
            commands: CommandGateway::with_stats(Arc::clone(&registry), Arc::clone(&stats)),
            events: EventGateway::with_stats(Arc::clone(&registry), Arc::clone(&stats)),
            registry,
            stats,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<HandlerRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn commands(&self) -> &CommandGateway {
        &self.commands
    }

    #[must_use]
    pub fn events(&self) -> &EventGateway {
        &self.events
    }

    pub fn register_commands(&self, handlers: CommandHandlers) {
        self.registry.register_commands(handlers);
    }

    /// Registers every command slot from one backend.
    pub fn register_backend<B: NativeBackend + 'static>(&self, backend: Arc<B>) {
        self.registry
            .register_commands(CommandHandlers::from_backend(backend));
    }

    pub fn set_event_sink(&self, sink: Option<Box<dyn EventSink>>) {
        self.registry.set_event_sink(sink);
    }

    /// Installs a closure as the event sink.
    pub fn on_event<F>(&self, sink: F)
    where
        F: Fn(ViewId<'_>, EventType<'_>, Payload<'_>) + Send + Sync + 'static,
    {
        self.registry.set_event_sink(Some(Box::new(sink)));
    }

    #[must_use]
    pub fn state(&self) -> BridgeState {
        self.registry.state()
    }

    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}
