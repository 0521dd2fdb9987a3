//! Process-lifetime registry of native handlers.
//!
//! Readers load an immutable snapshot and never take a lock. Writers publish
//! a complete replacement, so a reader sees either the whole old handler set
//! or the whole new one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::{ArcSwap, ArcSwapOption, Guard};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::handlers::CommandHandlers;
use crate::sink::EventSink;

/// Lifecycle of the registry. There is no way back to `Unready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeState {
    /// No command set has been registered yet.
    Unready,
    /// At least one command set has been registered.
    Ready,
}

/// Sized holder so the sink trait object can live behind `ArcSwapOption`.
pub(crate) struct SinkSlot(Box<dyn EventSink>);

impl SinkSlot {
    pub(crate) fn sink(&self) -> &dyn EventSink {
        self.0.as_ref()
    }
}

/// Current command handlers and event sink.
pub struct HandlerRegistry {
    commands: ArcSwap<CommandHandlers>,
    event_sink: ArcSwapOption<SinkSlot>,
    generation: AtomicU64,
}

impl HandlerRegistry {
    /// Creates an empty registry: every slot unset, no sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: ArcSwap::from_pointee(CommandHandlers::new()),
            event_sink: ArcSwapOption::empty(),
            generation: AtomicU64::new(0),
        }
    }

    /// Replaces the entire command set.
    ///
    /// Slots unset in `handlers` become unregistered even if the previous
    /// set filled them.
    pub fn register_commands(&self, handlers: CommandHandlers) {
        let registered = handlers.registered();
        self.commands.store(Arc::new(handlers));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        info!(
            generation,
            registered = registered.len(),
            operations = ?registered,
            "Native command handlers registered"
        );
    }

    /// Sets the event sink, or clears it with `None`.
    pub fn set_event_sink(&self, sink: Option<Box<dyn EventSink>>) {
        let installed = sink.is_some();
        self.event_sink.store(sink.map(|sink| Arc::new(SinkSlot(sink))));
        if installed {
            info!("Event sink registered");
        } else {
            info!("Event sink cleared");
        }
    }

    /// Pins the current command set.
    ///
    /// Every dispatch through the returned snapshot sees the same
    /// generation, regardless of concurrent registrations.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CommandHandlers> {
        self.commands.load_full()
    }

    pub(crate) fn commands(&self) -> Guard<Arc<CommandHandlers>> {
        self.commands.load()
    }

    pub(crate) fn event_sink(&self) -> Guard<Option<Arc<SinkSlot>>> {
        self.event_sink.load()
    }

    #[must_use]
    pub fn has_event_sink(&self) -> bool {
        self.event_sink.load().is_some()
    }

    /// Number of command registrations so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn state(&self) -> BridgeState {
        if self.generation() == 0 {
            BridgeState::Unready
        } else {
            BridgeState::Ready
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("state", &self.state())
            .field("generation", &self.generation())
            .field("commands", &*self.commands.load())
            .field("event_sink", &self.has_event_sink())
            .finish()
    }
}
