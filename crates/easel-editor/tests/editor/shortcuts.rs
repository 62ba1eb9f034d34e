use easel_core::ToolKind;
use easel_editor::{CanvasStore, KeyChord, ShortcutAction, ShortcutMap};

use crate::common::{rect_at, store};

fn press(store: &mut CanvasStore, chord: &str) -> bool {
    let action = KeyChord::parse(chord)
        .and_then(|c| c.resolve())
        .unwrap_or_else(|| panic!("unbound chord {}", chord));
    store.execute_shortcut(action)
}

#[test]
fn test_select_all_then_delete() {
    let mut store = store();
    store.add_element(rect_at(0.0, 0.0));
    store.add_element(rect_at(10.0, 0.0));

    assert!(press(&mut store, "ctrl+a"));
    assert!(press(&mut store, "Delete"));
    assert!(store.is_empty());
}

#[test]
fn test_copy_paste_undo_redo_chords() {
    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0));
    store.select_element(&id, false);

    assert!(press(&mut store, "cmd+c"));
    assert!(press(&mut store, "cmd+v"));
    assert_eq!(store.element_count(), 2);

    assert!(press(&mut store, "ctrl+z"));
    assert_eq!(store.element_count(), 1);
    assert!(press(&mut store, "ctrl+shift+z"));
    assert_eq!(store.element_count(), 2);
    assert!(press(&mut store, "ctrl+z"));
    assert!(press(&mut store, "ctrl+y"));
    assert_eq!(store.element_count(), 2);
}

#[test]
fn test_cut_chord() {
    let mut store = store();
    store.add_element(rect_at(0.0, 0.0));
    let id = store.add_element(rect_at(10.0, 0.0));
    store.select_element(&id, false);

    assert!(press(&mut store, "ctrl+x"));
    assert_eq!(store.element_count(), 1);
    assert!(store.can_paste());
}

#[test]
fn test_boundary_shortcuts_report_no_change() {
    let mut store = store();
    assert!(!store.execute_shortcut(ShortcutAction::Undo));
    assert!(!store.execute_shortcut(ShortcutAction::Redo));
    assert!(!store.execute_shortcut(ShortcutAction::Delete));
    assert!(!store.execute_shortcut(ShortcutAction::Paste));
    assert!(!store.execute_shortcut(ShortcutAction::Save));
}

#[test]
fn test_view_shortcuts() {
    let mut store = store();
    assert!(press(&mut store, "ctrl+="));
    assert!(store.viewport().zoom > 1.0);
    assert!(press(&mut store, "ctrl+1"));
    assert_eq!(store.viewport().zoom, 1.0);
    assert!(press(&mut store, "ctrl+0"));
    assert_eq!(store.viewport().zoom, 0.8);
}

#[test]
fn test_escape_deselects() {
    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0));
    store.select_element(&id, false);
    assert_eq!(
        ShortcutMap::resolve("Escape", false, false, false, false),
        Some(ShortcutAction::Deselect)
    );
    assert!(store.execute_shortcut(ShortcutAction::Deselect));
    assert!(!store.has_selection());
}

#[test]
fn test_modified_delete_still_deletes() {
    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0));
    store.select_element(&id, false);

    assert!(press(&mut store, "ctrl+Backspace"));
    assert!(store.is_empty());
}

#[test]
fn test_tool_keys_switch_tools() {
    let mut store = store();
    store.tool_mut().set_drawing_state(true);

    assert!(press(&mut store, "r"));
    assert_eq!(store.tool().current_tool(), ToolKind::Rect);
    assert!(!store.tool().is_drawing());

    assert!(!press(&mut store, "r"));
    assert!(press(&mut store, "v"));
    assert_eq!(store.tool().current_tool(), ToolKind::Select);
}
