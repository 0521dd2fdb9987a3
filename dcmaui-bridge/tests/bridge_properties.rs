//! Property tests for forwarding fidelity and event fan-out.

mod common;

use common::{calls, new_log, recording_handlers, recording_sink, Call, CallLog, EventLog, ObservedEvent};
use dcmaui_bridge::{Bridge, CommandOutcome, Status};
use dcmaui_types::{EventType, Payload, ViewId, ViewType};
use proptest::prelude::*;
use std::ffi::CString;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

/// Any text without interior nul, including non-ASCII.
fn token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\\x00]{0,40}").unwrap()
}

fn status_strategy() -> impl Strategy<Value = Status> {
    any::<i8>().prop_map(Status::from_raw)
}

fn c(s: &str) -> CString {
    CString::new(s).unwrap()
}

// =============================================================================
// COMMAND FORWARDING
// =============================================================================

proptest! {
    #[test]
    fn create_forwards_arguments_and_status(
        view_id in token_strategy(),
        view_type in token_strategy(),
        props in token_strategy(),
        status in status_strategy(),
    ) {
        let bridge = Bridge::new();
        let log: CallLog = new_log();
        bridge.register_commands(recording_handlers(&log, status));

        let (id_c, ty_c, props_c) = (c(&view_id), c(&view_type), c(&props));
        let outcome = bridge.commands().create_view(
            ViewId::new(&id_c),
            ViewType::new(&ty_c),
            Payload::new(&props_c),
        );

        prop_assert_eq!(outcome, CommandOutcome::Completed(status));
        prop_assert_eq!(calls(&log), vec![Call::CreateView { view_id, view_type, props }]);
    }

    #[test]
    fn attach_forwards_arguments_and_status(
        child in token_strategy(),
        parent in token_strategy(),
        index in any::<i32>(),
        status in status_strategy(),
    ) {
        let bridge = Bridge::new();
        let log: CallLog = new_log();
        bridge.register_commands(recording_handlers(&log, status));

        let (child_c, parent_c) = (c(&child), c(&parent));
        let outcome = bridge.commands().attach_view(ViewId::new(&child_c), ViewId::new(&parent_c), index);

        prop_assert_eq!(outcome.status(), status);
        prop_assert_eq!(calls(&log), vec![Call::AttachView { child, parent, index }]);
    }

    #[test]
    fn view_payload_commands_forward_arguments(
        view_id in token_strategy(),
        payload in token_strategy(),
    ) {
        let bridge = Bridge::new();
        let log: CallLog = new_log();
        bridge.register_commands(recording_handlers(&log, Status::HANDLED));

        let (id_c, payload_c) = (c(&view_id), c(&payload));
        let id = ViewId::new(&id_c);
        let body = Payload::new(&payload_c);
        let gateway = bridge.commands();
        gateway.update_view(id, body);
        gateway.set_children(id, body);
        gateway.add_event_listeners(id, body);
        gateway.remove_event_listeners(id, body);
        gateway.delete_view(id);

        prop_assert_eq!(calls(&log), vec![
            Call::UpdateView { view_id: view_id.clone(), props: payload.clone() },
            Call::SetChildren { view_id: view_id.clone(), children: payload.clone() },
            Call::AddEventListeners { view_id: view_id.clone(), events: payload.clone() },
            Call::RemoveEventListeners { view_id: view_id.clone(), events: payload },
            Call::DeleteView { view_id },
        ]);
    }

    #[test]
    fn unregistered_bridge_never_succeeds(view_id in token_strategy(), index in any::<i32>()) {
        let bridge = Bridge::new();
        let id_c = c(&view_id);
        let id = ViewId::new(&id_c);
        prop_assert_eq!(bridge.commands().delete_view(id), CommandOutcome::Unregistered);
        prop_assert_eq!(bridge.commands().attach_view(id, id, index), CommandOutcome::Unregistered);
    }
}

// =============================================================================
// EVENT FAN-OUT
// =============================================================================

proptest! {
    #[test]
    fn every_event_delivered_once_in_order(
        events in prop::collection::vec(
            (token_strategy(), token_strategy(), token_strategy()),
            0..40,
        ),
    ) {
        let bridge = Bridge::new();
        let log: EventLog = new_log();
        bridge.on_event(recording_sink(&log));

        for (view_id, event_type, data) in &events {
            let (id_c, ty_c, data_c) = (c(view_id), c(event_type), c(data));
            let delivered = bridge.events().send_event(
                ViewId::new(&id_c),
                EventType::new(&ty_c),
                Payload::new(&data_c),
            );
            prop_assert!(delivered);
        }

        let expected: Vec<ObservedEvent> = events
            .into_iter()
            .map(|(view_id, event_type, data)| ObservedEvent { view_id, event_type, data })
            .collect();
        prop_assert_eq!(log.lock().unwrap().clone(), expected);
    }
}
