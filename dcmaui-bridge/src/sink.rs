use dcmaui_types::{EventType, Payload, ViewId};

/// Receiver for UI events reported by the native layer.
///
/// Delivery is fire-and-forget: the native side gets no acknowledgment and
/// the sink cannot reject an event. Arguments are borrowed for the call.
pub trait EventSink: Send + Sync {
    fn deliver(&self, view_id: ViewId<'_>, event_type: EventType<'_>, data: Payload<'_>);
}

impl<F> EventSink for F
where
    F: Fn(ViewId<'_>, EventType<'_>, Payload<'_>) + Send + Sync,
{
    fn deliver(&self, view_id: ViewId<'_>, event_type: EventType<'_>, data: Payload<'_>) {
        self(view_id, event_type, data);
    }
}
