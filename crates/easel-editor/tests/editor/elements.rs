use easel_core::{
    CanvasEvent, ElementEvent, ElementId, ElementType, ElementUpdate, EventCategory, EventFilter,
    HistoryActionType, NewElement,
};

use crate::common::{rect_at, store, Recorder};

#[test]
fn test_add_element_applies_defaults() {
    let mut store = store();
    let id = store.add_element(NewElement::circle(5.0, 6.0, 20.0, 20.0));

    let el = store.get_element(&id).unwrap();
    assert_eq!(el.element_type, ElementType::Circle);
    assert_eq!(el.rotation, 0.0);
    assert_eq!(el.opacity, 1.0);
    assert_eq!(el.z_index, 1);
    assert!(!el.is_locked);
    assert!(!el.is_selected);
    assert_eq!(el.created_at, el.updated_at);
    assert!(id.as_str().starts_with("el_"));
}

#[test]
fn test_new_elements_stack_on_top() {
    let mut store = store();
    let ids: Vec<ElementId> = (0..3).map(|i| store.add_element(rect_at(i as f64, 0.0))).collect();
    let z: Vec<i64> = ids
        .iter()
        .map(|id| store.get_element(id).unwrap().z_index)
        .collect();
    assert_eq!(z, vec![1, 2, 3]);
    assert_eq!(store.max_z_index(), Some(3));
    assert_eq!(store.min_z_index(), Some(1));
}

#[test]
fn test_add_records_history() {
    let mut store = store();
    store.add_element(rect_at(0.0, 0.0));
    let record = store.history().current_record().unwrap();
    assert_eq!(record.action_type, HistoryActionType::Add);
    assert!(record.prev_state.is_empty());
    assert_eq!(record.next_state.len(), 1);
}

#[test]
fn test_update_merges_and_refreshes_timestamp() {
    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0));
    let before = store.get_element(&id).unwrap().clone();

    std::thread::sleep(std::time::Duration::from_millis(2));
    assert!(store.update_element(&id, &ElementUpdate::size(80.0, 90.0)));

    let after = store.get_element(&id).unwrap();
    assert_eq!((after.width, after.height), (80.0, 90.0));
    assert_eq!((after.x, after.y), (before.x, before.y));
    assert!(after.updated_at > before.updated_at);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(
        store.history().current_record().unwrap().action_type,
        HistoryActionType::Resize
    );
}

#[test]
fn test_update_missing_element_is_noop() {
    let mut store = store();
    store.add_element(rect_at(0.0, 0.0));
    let len = store.history().len();

    assert!(!store.update_element(&ElementId::from("el_missing"), &ElementUpdate::position(1.0, 1.0)));
    assert_eq!(store.history().len(), len);
}

#[test]
fn test_empty_update_is_noop() {
    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0));
    let len = store.history().len();
    assert!(!store.update_element(&id, &ElementUpdate::new()));
    assert_eq!(store.history().len(), len);
}

#[test]
fn test_update_event_carries_old_new_and_changes() {
    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0));
    let recorder = Recorder::attach(store.event_bus(), EventFilter::category(EventCategory::Element));

    store.update_element(&id, &ElementUpdate::new().with_opacity(0.5));

    let events = recorder.take();
    assert_eq!(events.len(), 1);
    match &events[0] {
        CanvasEvent::Element(ElementEvent::Updated {
            element,
            old_element,
            changes,
        }) => {
            assert_eq!(element.opacity, 0.5);
            assert_eq!(old_element.opacity, 1.0);
            assert_eq!(changes.opacity, Some(0.5));
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_delete_element() {
    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0));
    store.select_element(&id, false);

    assert!(store.delete_element(&id));
    assert!(store.get_element(&id).is_none());
    assert!(!store.has_selection());
    assert!(!store.delete_element(&id));
}

#[test]
fn test_delete_selected_is_one_undo_step() {
    let mut store = store();
    let ids: Vec<ElementId> = (0..4).map(|i| store.add_element(rect_at(i as f64, 0.0))).collect();
    store.select_multiple(&ids[1..]);
    let len = store.history().len();

    assert_eq!(store.delete_selected_elements(), 3);
    assert_eq!(store.history().len(), len + 1);
    assert_eq!(store.element_count(), 1);

    assert!(store.undo());
    assert_eq!(store.element_count(), 4);
}

#[test]
fn test_delete_selected_with_empty_selection() {
    let mut store = store();
    store.add_element(rect_at(0.0, 0.0));
    let len = store.history().len();
    assert_eq!(store.delete_selected_elements(), 0);
    assert_eq!(store.history().len(), len);
}

#[test]
fn test_elements_sorted_by_z() {
    let mut store = store();
    let a = store.add_element(rect_at(0.0, 0.0));
    let b = store.add_element(rect_at(0.0, 0.0));
    store.update_element(&a, &ElementUpdate::new().with_z_index(10));

    let order: Vec<&ElementId> = store.elements_sorted().iter().map(|el| &el.id).collect();
    assert_eq!(order, vec![&b, &a]);
}

#[test]
fn test_equal_z_paints_oldest_first() {
    let now = chrono::Utc::now();
    let older = rect_at(0.0, 0.0).into_element(ElementId::from("el_z"), 3, now);
    let newer = rect_at(0.0, 0.0).into_element(
        ElementId::from("el_a"),
        3,
        now + chrono::Duration::seconds(1),
    );
    let twin = rect_at(0.0, 0.0).into_element(
        ElementId::from("el_b"),
        3,
        now + chrono::Duration::seconds(1),
    );

    let mut store = store();
    store.load_elements(
        [older, twin, newer]
            .into_iter()
            .map(|el| (el.id.clone(), el))
            .collect(),
    );

    let order: Vec<&str> = store
        .elements_sorted()
        .iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(order, vec!["el_z", "el_a", "el_b"]);
}

#[test]
fn test_locked_elements_remain_editable() {
    let mut store = store();
    let id = store.add_element(rect_at(0.0, 0.0).locked());
    assert!(store.get_element(&id).unwrap().is_locked);
    assert!(store.update_element(&id, &ElementUpdate::new().with_x(3.0)));
}
