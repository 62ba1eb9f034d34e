use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use easel_core::{CanvasEvent, ElementUpdate, EventBus, EventFilter, HistoryEvent};
use easel_editor::CanvasStore;

use crate::common::{rect_at, Recorder};

#[test]
fn test_add_notifies_after_recording() {
    let bus = EventBus::shared();
    let recorder = Recorder::attach(&bus, EventFilter::All);
    let mut store = CanvasStore::new(bus);

    store.add_element(rect_at(0.0, 0.0));

    let events = recorder.descriptions();
    assert_eq!(events.len(), 3);
    assert!(events[0].starts_with("History record added: Add rect"));
    assert_eq!(events[1], "History changed: undo=false redo=false");
    assert!(events[2].starts_with("Element added: el_"));
}

#[test]
fn test_undo_emits_history_flags_then_selection() {
    let bus = EventBus::shared();
    let mut store = CanvasStore::new(bus.clone());
    let id = store.add_element(rect_at(0.0, 0.0));
    store.update_element(&id, &ElementUpdate::position(5.0, 5.0));

    let recorder = Recorder::attach(&bus, EventFilter::All);
    store.undo();

    let events = recorder.take();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        CanvasEvent::History(HistoryEvent::Changed {
            can_undo: false,
            can_redo: true
        })
    ));
    assert_eq!(events[1].description(), "Selection cleared");
}

#[test]
fn test_panicking_observer_does_not_corrupt_store() {
    let bus = EventBus::shared();
    bus.subscribe(EventFilter::All, |_| panic!("observer failure"));
    let delivered = Arc::new(AtomicUsize::new(0));
    let d = delivered.clone();
    bus.subscribe(EventFilter::All, move |_| {
        d.fetch_add(1, Ordering::SeqCst);
    });

    let mut store = CanvasStore::new(bus);
    let id = store.add_element(rect_at(0.0, 0.0));
    store.update_element(&id, &ElementUpdate::new().with_x(9.0));

    assert_eq!(store.get_element(&id).unwrap().x, 9.0);
    assert_eq!(store.history().len(), 2);
    assert!(delivered.load(Ordering::SeqCst) >= 6);
}

#[test]
fn test_stores_on_separate_buses_are_isolated() {
    let bus_a = EventBus::shared();
    let bus_b = EventBus::shared();
    let recorder_b = Recorder::attach(&bus_b, EventFilter::All);

    let mut store_a = CanvasStore::new(bus_a);
    let _store_b = CanvasStore::new(bus_b);
    store_a.add_element(rect_at(0.0, 0.0));

    assert!(recorder_b.take().is_empty());
}
