//! The single upward path: native layer to managed runtime.

use std::sync::Arc;

use dcmaui_types::{EventType, Payload, ViewId};
use tracing::trace;

use crate::registry::HandlerRegistry;
use crate::stats::{BridgeStats, StatsSnapshot};

/// Forwards native UI events to the registered sink.
#[derive(Debug, Clone)]
pub struct EventGateway {
    registry: Arc<HandlerRegistry>,
    stats: Arc<BridgeStats>,
}

impl EventGateway {
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

    /// Delivers one event synchronously.
    ///
    /// Returns `false` when no sink is registered and the event was dropped.
    /// Dropping is not an error and nothing is retried.
    pub fn send_event(
        &self,
        view_id: ViewId<'_>,
        event_type: EventType<'_>,
        data: Payload<'_>,
    ) -> bool {
        let slot = self.registry.event_sink();
        let delivered = match &*slot {
            Some(slot) => {
                slot.sink().deliver(view_id, event_type, data);
                true
            }
            None => {
                trace!(view_id = %view_id, event_type = %event_type, "Event dropped, no sink");
                false
            }
        };
        self.stats.record_event(delivered);
        delivered
    }
}
