use dcmaui_types::Operation;
use pretty_assertions::assert_eq;

#[test]
fn registration_order() {
    let names: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "initialize",
            "create_view",
            "update_view",
            "delete_view",
            "attach_view",
            "set_children",
            "add_event_listeners",
            "remove_event_listeners",
        ]
    );
}

#[test]
fn index_matches_position() {
    for (position, op) in Operation::ALL.iter().enumerate() {
        assert_eq!(op.index(), position);
    }
}

#[test]
fn display_uses_snake_case_name() {
    assert_eq!(Operation::SetChildren.to_string(), "set_children");
}

#[test]
fn serializes_as_name() {
    let json = serde_json::to_string(&Operation::AttachView).unwrap();
    assert_eq!(json, "\"attach_view\"");
    let back: Operation = serde_json::from_str("\"remove_event_listeners\"").unwrap();
    assert_eq!(back, Operation::RemoveEventListeners);
}
