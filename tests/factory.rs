use container_intents::containers::{
    add_container, check_visibility, receive_container, remove_container, set_container_meta,
    set_container_meta_field, set_container_ui, set_container_ui_field, set_meta, set_ui,
    setup_container, submit_form, teardown_container, validate_all_containers,
    validate_container, ContainerIntent, ContainerMapping, FieldMap, IntentKind,
};
use serde_json::{json, Value};

fn wire(intent: &ContainerIntent) -> Value {
    serde_json::to_value(intent).expect("intent serializes")
}

fn fields(value: Value) -> FieldMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn sample_mappings() -> Vec<ContainerMapping> {
    let mut multi = ContainerMapping::new();
    multi.insert("c1", fields(json!({ "label": "x", "count": 2 })));
    multi.insert("c2", fields(json!({ "nested": { "a": [1, 2] }, "flag": null })));

    let mut empty_fields = ContainerMapping::new();
    empty_fields.insert("c3", FieldMap::new());

    vec![ContainerMapping::new(), ContainerMapping::single("c1", "label", "x"), multi, empty_fields]
}

#[test]
fn setup_container_wraps_id_meta_and_ui() {
    let intent = setup_container("c1", fields(json!({ "label": "x" })), fields(json!({ "open": true })));
    assert_eq!(
        wire(&intent),
        json!({
            "kind": "containers/SETUP_CONTAINER",
            "payload": { "containerId": "c1", "meta": { "label": "x" }, "ui": { "open": true } }
        })
    );
}

#[test]
fn teardown_container_wraps_id() {
    assert_eq!(
        wire(&teardown_container("c1")),
        json!({ "kind": "containers/TEARDOWN_CONTAINER", "payload": { "containerId": "c1" } })
    );
}

#[test]
fn validate_container_wraps_id_and_event() {
    assert_eq!(
        wire(&validate_container("c1", json!({ "type": "blur" }))),
        json!({
            "kind": "containers/VALIDATE_CONTAINER",
            "payload": { "containerId": "c1", "event": { "type": "blur" } }
        })
    );
}

#[test]
fn submit_form_wraps_event() {
    assert_eq!(
        wire(&submit_form(json!({ "type": "submit" }))),
        json!({ "kind": "containers/SUBMIT_FORM", "payload": { "event": { "type": "submit" } } })
    );
}

#[test]
fn passthrough_creators_emit_argument_as_payload() {
    let cases = [
        (check_visibility("c1"), "containers/CHECK_VISIBILITY", json!("c1")),
        (remove_container("c1"), "containers/REMOVE_CONTAINER", json!("c1")),
        (
            add_container(json!({ "id": "c1", "type": "box" })),
            "containers/ADD_CONTAINER",
            json!({ "id": "c1", "type": "box" }),
        ),
        (receive_container("<raw>"), "containers/RECEIVE_CONTAINER", json!("<raw>")),
        (
            validate_all_containers(json!({ "type": "submit" })),
            "containers/VALIDATE_ALL_CONTAINERS",
            json!({ "type": "submit" }),
        ),
    ];

    for (intent, kind, payload) in cases {
        assert_eq!(wire(&intent), json!({ "kind": kind, "payload": payload }));
    }
}

#[test]
fn normalizing_creator_is_noop_on_canonical_input() {
    for mapping in sample_mappings() {
        assert_eq!(set_meta(mapping.clone()), set_container_meta(mapping.clone()));
        assert_eq!(set_ui(mapping.clone()), set_container_ui(mapping));
    }
}

#[test]
fn shorthand_synthesizes_single_entry_mapping() {
    let values = [json!("x"), json!(1), json!(null), json!([1, 2]), json!({ "deep": true })];

    for value in values {
        let expected = json!({ "c1": { "label": value.clone() } });
        let meta = wire(&set_container_meta(("c1", "label", value.clone())));
        let ui = wire(&set_container_ui_field("c1", "label", value.clone()));

        assert_eq!(meta, json!({ "kind": "containers/SET_META", "payload": expected.clone() }));
        assert_eq!(ui, json!({ "kind": "containers/SET_UI", "payload": expected }));
    }
}

#[test]
fn renormalizing_output_is_idempotent() {
    let first = set_container_meta_field("c1", "label", "x");
    let ContainerIntent::SetMeta(mapping) = first.clone() else {
        panic!("expected SetMeta");
    };
    assert_eq!(set_container_meta(mapping), first);

    let first = set_container_ui(("c2", "open", false));
    let ContainerIntent::SetUi(mapping) = first.clone() else {
        panic!("expected SetUi");
    };
    assert_eq!(set_container_ui(mapping), first);
}

#[test]
fn raw_and_normalizing_variants_share_kind() {
    let mapping = ContainerMapping::single("c1", "k", "v");
    assert_eq!(set_meta(mapping.clone()).kind(), IntentKind::SetMeta);
    assert_eq!(set_container_meta(mapping.clone()).kind(), IntentKind::SetMeta);
    assert_eq!(set_ui(mapping.clone()).kind(), IntentKind::SetUi);
    assert_eq!(set_container_ui(mapping).kind(), IntentKind::SetUi);
}

#[test]
fn intents_decode_back_from_json() {
    let intents = [
        setup_container("c1", FieldMap::new(), FieldMap::new()),
        set_container_meta_field("c1", "label", "x"),
        set_container_ui_field("c1", "open", true),
        validate_container("c1", json!({ "type": "blur" })),
        submit_form(json!({ "type": "submit" })),
    ];

    for intent in intents {
        let decoded: ContainerIntent = serde_json::from_value(wire(&intent)).unwrap();
        assert_eq!(decoded, intent);
    }
}
