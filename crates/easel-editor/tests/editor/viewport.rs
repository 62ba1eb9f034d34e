use easel_core::{
    CanvasEvent, EventBus, EventCategory, EventFilter, NewElement, ViewportEvent, ViewportState,
    ViewportUpdate,
};
use easel_editor::CanvasStore;
use easel_settings::Config;

use crate::common::{store, Recorder};

#[test]
fn test_partial_update_keeps_other_fields() {
    let mut store = store();
    assert!(store.update_viewport(ViewportUpdate::pan(30.0, -10.0)));
    assert!(store.update_viewport(ViewportUpdate::zoom(2.0)));
    assert_eq!(store.viewport(), ViewportState::new(2.0, 30.0, -10.0));
}

#[test]
fn test_invalid_zoom_is_rejected() {
    let mut store = store();
    assert!(!store.update_viewport(ViewportUpdate::zoom(0.0)));
    assert!(!store.update_viewport(ViewportUpdate::zoom(-1.5)));
    assert!(!store.update_viewport(ViewportUpdate::zoom(f64::NAN)));
    assert!(!store.update_viewport(ViewportUpdate::pan(f64::INFINITY, 0.0)));
    assert_eq!(store.viewport(), ViewportState::default());
}

#[test]
fn test_zoom_is_clamped() {
    let mut store = store();
    store.update_viewport(ViewportUpdate::zoom(500.0));
    assert_eq!(store.viewport().zoom, 50.0);
    store.update_viewport(ViewportUpdate::zoom(0.001));
    assert_eq!(store.viewport().zoom, 0.1);
}

#[test]
fn test_configured_zoom_limits() {
    let mut config = Config::default();
    config.viewport.max_zoom = 4.0;
    let mut store = CanvasStore::with_config(EventBus::shared(), &config);
    store.update_viewport(ViewportUpdate::zoom(10.0));
    assert_eq!(store.viewport().zoom, 4.0);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let mut config = Config::default();
    config.viewport.min_zoom = 5.0;
    config.viewport.max_zoom = 1.0;
    config.history.max_size = 0;
    let mut store = CanvasStore::with_config(EventBus::shared(), &config);

    assert!(store.update_viewport(ViewportUpdate::zoom(2.0)));
    assert_eq!(store.viewport().zoom, 2.0);
    store.update_viewport(ViewportUpdate::zoom(500.0));
    assert_eq!(store.viewport().zoom, 50.0);
    assert_eq!(store.history().max_size(), 50);
}

#[test]
fn test_unchanged_update_is_quiet() {
    let mut store = store();
    let recorder = Recorder::attach(
        store.event_bus(),
        EventFilter::category(EventCategory::Viewport),
    );
    assert!(!store.update_viewport(ViewportUpdate::zoom(1.0)));
    assert!(!store.reset_viewport());
    assert!(recorder.take().is_empty());
}

#[test]
fn test_change_event_carries_both_states() {
    let mut store = store();
    let recorder = Recorder::attach(
        store.event_bus(),
        EventFilter::category(EventCategory::Viewport),
    );
    store.update_viewport(ViewportUpdate::zoom(2.0));

    let events = recorder.take();
    assert_eq!(events.len(), 1);
    match &events[0] {
        CanvasEvent::Viewport(ViewportEvent::Changed { old, new }) => {
            assert_eq!(*old, ViewportState::default());
            assert_eq!(new.zoom, 2.0);
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_reset_viewport() {
    let mut store = store();
    store.update_viewport(ViewportUpdate {
        zoom: Some(3.0),
        x: Some(12.0),
        y: Some(8.0),
    });
    assert!(store.reset_viewport());
    assert_eq!(store.viewport(), ViewportState::default());
}

#[test]
fn test_zoom_to_fit_empty_canvas() {
    let mut store = store();
    assert!(store.zoom_to_fit());
    assert_eq!(store.viewport(), ViewportState::new(0.8, 50.0, 50.0));
}

#[test]
fn test_zoom_to_fit_frames_content() {
    let mut store = store();
    store.add_element(NewElement::rect(100.0, 100.0, 200.0, 150.0));
    store.add_element(NewElement::circle(400.0, 150.0, 120.0, 120.0));
    assert!(store.zoom_to_fit());

    let vp = store.viewport();
    let (left, top) = vp.canvas_to_screen(100.0, 100.0);
    let (right, bottom) = vp.canvas_to_screen(520.0, 270.0);
    let eps = 1e-6;
    assert!(left >= 50.0 - eps && top >= 50.0 - eps);
    assert!(right <= 1150.0 + eps && bottom <= 750.0 + eps);
    // The limiting axis touches the padding on both sides
    assert!((left - 50.0).abs() < eps && (right - 1150.0).abs() < eps);
}

#[test]
fn test_viewport_is_not_recorded() {
    let mut store = store();
    store.update_viewport(ViewportUpdate::zoom(2.0));
    store.zoom_to_fit();
    assert!(store.history().is_empty());
}
