use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use dcmaui_bridge::{Bridge, CommandHandlers, Status};
use dcmaui_types::{EventType, Payload, ViewId, ViewType};

fn bench_commands(c: &mut Criterion) {
    let unregistered = Bridge::new();
    let registered = Bridge::new();
    registered.register_commands(
        CommandHandlers::new()
            .with_create_view(|id, _, _| Status::from(!id.as_bytes().is_empty()))
            .with_update_view(|_, _| Status::HANDLED),
    );

    let id = ViewId::new(c"view-42");
    let ty = ViewType::new(c"View");
    let props = Payload::new(c"{\"style\":{\"width\":100,\"height\":40}}");

    c.bench_function("create_view_registered", |b| {
        b.iter(|| registered.commands().create_view(black_box(id), black_box(ty), black_box(props)))
    });

    c.bench_function("create_view_unregistered", |b| {
        b.iter(|| unregistered.commands().create_view(black_box(id), black_box(ty), black_box(props)))
    });

    c.bench_function("update_view_registered", |b| {
        b.iter(|| registered.commands().update_view(black_box(id), black_box(props)))
    });
}

fn bench_events(c: &mut Criterion) {
    let bridge = Bridge::new();
    bridge.on_event(|view_id, _, _| {
        black_box(view_id);
    });

    let id = ViewId::new(c"view-42");
    let event_type = EventType::new(c"onPress");
    let data = Payload::new(c"{}");

    c.bench_function("send_event_delivered", |b| {
        b.iter(|| bridge.events().send_event(black_box(id), black_box(event_type), black_box(data)))
    });
}

criterion_group!(benches, bench_commands, bench_events);
criterion_main!(benches);
