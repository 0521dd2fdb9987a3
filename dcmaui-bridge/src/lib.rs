//! Dispatch core of the DCMAUI native bridge.
//!
//! The managed runtime drives a native view tree through eight commands; the
//! native layer reports UI events back. This crate is the synchronous
//! indirection between the two:
//! - [`HandlerRegistry`] holds the current [`CommandHandlers`] and event sink
//!   as atomically swapped immutable snapshots
//! - [`CommandGateway`] forwards commands to the registered handlers
//! - [`EventGateway`] forwards events to the registered sink, or drops them
//! - [`Bridge`] owns one registry and both gateways
//!
//! There is no queue and no background thread. Every call runs on the
//! caller's thread and returns when the handler returns. Missing handlers are
//! a soft failure ([`CommandOutcome::Unregistered`]), never a panic.
//!
//! ```
//! use dcmaui_bridge::{Bridge, CommandHandlers, CommandOutcome, Status};
//! use dcmaui_types::{Payload, ViewId, ViewType};
//!
//! let bridge = Bridge::new();
//! bridge.register_commands(CommandHandlers::new().with_create_view(|id, ty, _props| {
//!     Status::from(!id.as_bytes().is_empty() && ty.as_bytes() == b"button")
//! }));
//!
//! let outcome = bridge.commands().create_view(
//!     ViewId::new(c"v1"),
//!     ViewType::new(c"button"),
//!     Payload::new(c"{\"text\":\"hi\"}"),
//! );
//! assert_eq!(outcome, CommandOutcome::Completed(Status::HANDLED));
//! assert_eq!(bridge.commands().initialize(), CommandOutcome::Unregistered);
//! ```

mod bridge;
mod command;
mod event;
mod handlers;
mod registry;
mod sink;
mod stats;

pub use bridge::Bridge;
pub use command::CommandGateway;
pub use event::EventGateway;
pub use handlers::{CommandHandlers, NativeBackend};
pub use registry::{BridgeState, HandlerRegistry};
pub use sink::EventSink;
pub use stats::{BridgeStats, OperationStats, StatsSnapshot};

pub use dcmaui_types::{CommandOutcome, Operation, Status};
