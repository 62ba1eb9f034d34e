use easel_core::ElementId;
use easel_editor::CanvasStore;

use crate::common::{rect_at, store};

fn three(store: &mut CanvasStore) -> Vec<ElementId> {
    (0..3).map(|i| store.add_element(rect_at(i as f64 * 10.0, 0.0))).collect()
}

fn z(store: &CanvasStore, id: &ElementId) -> i64 {
    store.get_element(id).unwrap().z_index
}

#[test]
fn test_bring_to_front() {
    let mut store = store();
    let ids = three(&mut store);
    store.select_element(&ids[0], false);

    assert_eq!(store.bring_to_front(), 1);
    assert_eq!(z(&store, &ids[0]), 4);
    assert_eq!(z(&store, &ids[1]), 2);
    assert_eq!(z(&store, &ids[2]), 3);
}

#[test]
fn test_send_to_back() {
    let mut store = store();
    let ids = three(&mut store);
    store.select_element(&ids[2], false);

    assert_eq!(store.send_to_back(), 1);
    assert_eq!(z(&store, &ids[2]), 0);
    assert_eq!(z(&store, &ids[0]), 1);
    assert_eq!(z(&store, &ids[1]), 2);
}

#[test]
fn test_batch_follows_selection_order() {
    let mut store = store();
    let ids = three(&mut store);
    store.select_multiple(&[ids[1].clone(), ids[0].clone()]);

    assert_eq!(store.bring_to_front(), 2);
    assert_eq!(z(&store, &ids[1]), 4);
    assert_eq!(z(&store, &ids[0]), 5);

    assert_eq!(store.send_to_back(), 2);
    assert_eq!(z(&store, &ids[1]), 2);
    assert_eq!(z(&store, &ids[0]), 1);
}

#[test]
fn test_layering_is_one_undo_step() {
    let mut store = store();
    let ids = three(&mut store);
    store.select_multiple(&ids[..2]);
    let len = store.history().len();

    store.bring_to_front();
    assert_eq!(store.history().len(), len + 1);

    assert!(store.undo());
    assert_eq!(z(&store, &ids[0]), 1);
    assert_eq!(z(&store, &ids[1]), 2);
}

#[test]
fn test_layering_refreshes_updated_at() {
    let mut store = store();
    let ids = three(&mut store);
    let before = store.get_element(&ids[0]).unwrap().updated_at;
    std::thread::sleep(std::time::Duration::from_millis(2));
    store.select_element(&ids[0], false);
    store.bring_to_front();
    assert!(store.get_element(&ids[0]).unwrap().updated_at > before);
}

#[test]
fn test_empty_selection_is_noop() {
    let mut store = store();
    three(&mut store);
    let len = store.history().len();
    assert_eq!(store.bring_to_front(), 0);
    assert_eq!(store.send_to_back(), 0);
    assert_eq!(store.history().len(), len);
}

#[test]
fn test_painting_order_after_restack() {
    let mut store = store();
    let ids = three(&mut store);
    store.select_element(&ids[0], false);
    store.bring_to_front();

    let order: Vec<&ElementId> = store.elements_sorted().iter().map(|el| &el.id).collect();
    assert_eq!(order, vec![&ids[1], &ids[2], &ids[0]]);
}
