//! Dispatch counters.
//!
//! Counting is observational only: it never changes what is forwarded.

use std::sync::atomic::{AtomicU64, Ordering};

use dcmaui_types::{CommandOutcome, Operation};
use serde::{Deserialize, Serialize};

const OPERATION_COUNT: usize = Operation::ALL.len();

#[derive(Debug, Default)]
pub struct BridgeStats {
    forwarded: [AtomicU64; OPERATION_COUNT],
    unregistered: [AtomicU64; OPERATION_COUNT],
    events_delivered: AtomicU64,
    events_dropped: AtomicU64,
}

impl BridgeStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_command(&self, op: Operation, outcome: CommandOutcome) {
        let counters = if outcome.is_registered() {
            &self.forwarded
        } else {
            &self.unregistered
        };
        counters[op.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_event(&self, delivered: bool) {
        let counter = if delivered {
            &self.events_delivered
        } else {
            &self.events_dropped
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        let operations = Operation::ALL
            .into_iter()
            .map(|operation| OperationStats {
                operation,
                forwarded: self.forwarded[operation.index()].load(Ordering::Relaxed),
                unregistered: self.unregistered[operation.index()].load(Ordering::Relaxed),
            })
            .collect();
        StatsSnapshot {
            operations,
            events_delivered: self.events_delivered.load(Ordering::Relaxed),
            events_dropped: self.events_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub operations: Vec<OperationStats>,
    pub events_delivered: u64,
    pub events_dropped: u64,
}

impl StatsSnapshot {
    /// Counters for one operation, if the snapshot carries an entry for it.
    #[must_use]
    pub fn operation(&self, op: Operation) -> Option<&OperationStats> {
        self.operations.iter().find(|entry| entry.operation == op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationStats {
    pub operation: Operation,
    /// Calls that reached a handler, whatever it returned.
    pub forwarded: u64,
    /// Calls made while the slot was empty.
    pub unregistered: u64,
}
