//! Tests for saving and restoring the layout record

mod common;

use common::{layout, reachable_states, test_model, test_model_with};
use documint_layout::messages::{DragMsg, Msg};
use documint_layout::panel::{LayoutState, PanelId, PanelMode};
use documint_layout::persistence::{
    deserialize_layout, load_layout, save_layout, serialize_layout, FileStore, KeyValueStore,
    MemoryStore, LAYOUT_STORAGE_KEY,
};
use documint_layout::update::update;
use documint_layout::Cmd;

use PanelMode::{Expanded, Minimized, Normal};

/// Run messages, executing SaveLayout commands against the store like a host would
fn run(store: &mut dyn KeyValueStore, msgs: Vec<Msg>) -> LayoutState {
    let mut model = test_model();
    for msg in msgs {
        if let Some(cmd) = update(&mut model, msg) {
            for cmd in cmd.into_vec() {
                if let Cmd::SaveLayout(state) = cmd {
                    save_layout(store, LAYOUT_STORAGE_KEY, &state).unwrap();
                }
            }
        }
    }
    model.layout
}

#[test]
fn test_roundtrip_every_reachable_state() {
    for state in reachable_states() {
        let raw = serialize_layout(&state).unwrap();
        assert_eq!(deserialize_layout(&raw).unwrap(), state, "{raw}");
    }
}

#[test]
fn test_roundtrip_after_drags() {
    let mut store = MemoryStore::new();
    let final_state = run(
        &mut store,
        vec![
            Msg::minimize(PanelId::Document),
            Msg::Drag(DragMsg::Begin {
                divider_index: 0,
                x: 500.0,
            }),
            Msg::Drag(DragMsg::Move { x: 640.0 }),
            Msg::Drag(DragMsg::End),
        ],
    );

    assert_eq!(load_layout(&store, LAYOUT_STORAGE_KEY), final_state);
    assert_eq!(final_state.mode(PanelId::Document), Minimized);
}

#[test]
fn test_restart_restores_last_saved_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let state = run(
        &mut store,
        vec![Msg::minimize(PanelId::Qa), Msg::expand(PanelId::Document)],
    );

    let reopened = FileStore::new(dir.path());
    assert_eq!(load_layout(&reopened, LAYOUT_STORAGE_KEY), state);
    assert_eq!(state.expanded(), Some(PanelId::Document));
}

#[test]
fn test_corrupt_records_fall_back_to_default() {
    let records = [
        "",
        "not json",
        "[]",
        r#"{"modes":{},"widths":{}}"#,
        r#"{"modes":{"document":"normal","insights":"normal","qa":"normal"}}"#,
        r#"{"modes":{"document":"NORMAL","insights":"normal","qa":"normal"},
            "widths":{"document":33.33,"insights":33.33,"qa":33.34}}"#,
        r#"{"modes":{"document":"normal","insights":"normal","qa":"normal"},
            "widths":{"document":"wide","insights":33.33,"qa":33.34}}"#,
        r#"{"modes":{"document":"normal","insights":"normal","qa":"normal"},
            "widths":{"document":150,"insights":-25,"qa":-25}}"#,
        r#"{"modes":{"document":"expanded","insights":"expanded","qa":"normal"},
            "widths":{"document":33.33,"insights":33.33,"qa":33.34}}"#,
        r#"{"modes":{"document":"normal","insights":"normal","qa":"normal"},
            "widths":{"document":0,"insights":0,"qa":0}}"#,
        r#"{"modes":{"document":"normal","insights":"normal","qa":"normal"},
            "widths":{"document":0,"insights":50,"qa":50}}"#,
        r#"{"modes":{"document":"normal","insights":"normal","qa":"minimized"},
            "widths":{"document":15,"insights":85,"qa":33.34}}"#,
    ];

    for raw in records {
        let mut store = MemoryStore::new();
        store.set(LAYOUT_STORAGE_KEY, raw).unwrap();
        assert_eq!(
            load_layout(&store, LAYOUT_STORAGE_KEY),
            LayoutState::default(),
            "record was not rejected: {raw}"
        );
    }
}

#[test]
fn test_zero_width_record_does_not_pin_the_first_divider() {
    let mut store = MemoryStore::new();
    let raw = r#"{"modes":{"document":"normal","insights":"normal","qa":"normal"},
                  "widths":{"document":0,"insights":50,"qa":50}}"#;
    store.set(LAYOUT_STORAGE_KEY, raw).unwrap();

    let mut model = test_model_with(load_layout(&store, LAYOUT_STORAGE_KEY));
    assert_eq!(model.layout, LayoutState::default());

    update(
        &mut model,
        Msg::Drag(DragMsg::Begin {
            divider_index: 0,
            x: 333.3,
        }),
    );
    update(&mut model, Msg::Drag(DragMsg::Move { x: 400.0 }));
    assert!((model.layout.width(PanelId::Document) - 40.0).abs() < 0.01);
}

#[test]
fn test_partially_valid_record_is_not_repaired() {
    // Valid modes with one bad width still discards everything
    let raw = r#"{"modes":{"document":"minimized","insights":"normal","qa":"normal"},
                  "widths":{"document":33.33,"insights":50,"qa":1000}}"#;
    let mut store = MemoryStore::new();
    store.set(LAYOUT_STORAGE_KEY, raw).unwrap();
    let restored = load_layout(&store, LAYOUT_STORAGE_KEY);
    assert_eq!(restored.mode(PanelId::Document), Normal);
    assert_eq!(restored, LayoutState::default());
}

#[test]
fn test_hand_edited_record_with_unnormalized_widths_loads() {
    let state = layout([Normal, Normal, Expanded], [10.0, 10.0, 10.0]);
    let raw = serialize_layout(&state).unwrap();
    assert_eq!(deserialize_layout(&raw).unwrap(), state);
}

#[test]
fn test_drag_moves_write_nothing() {
    let mut store = MemoryStore::new();
    run(
        &mut store,
        vec![
            Msg::Drag(DragMsg::Begin {
                divider_index: 0,
                x: 333.3,
            }),
            Msg::Drag(DragMsg::Move { x: 400.0 }),
            Msg::Drag(DragMsg::Move { x: 450.0 }),
        ],
    );
    assert!(store.is_empty());
}
