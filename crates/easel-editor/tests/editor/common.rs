#![allow(dead_code)]

use std::sync::Arc;

use easel_core::{CanvasEvent, EventBus, EventFilter, NewElement};
use easel_editor::CanvasStore;
use parking_lot::Mutex;

/// Store on a fresh bus
pub fn store() -> CanvasStore {
    CanvasStore::new(EventBus::shared())
}

pub fn rect_at(x: f64, y: f64) -> NewElement {
    NewElement::rect(x, y, 50.0, 50.0)
}

/// Collects every event matching a filter
pub struct Recorder {
    events: Arc<Mutex<Vec<CanvasEvent>>>,
}

impl Recorder {
    pub fn attach(bus: &EventBus, filter: EventFilter) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        bus.subscribe(filter, move |event| sink.lock().push(event.clone()));
        Self { events }
    }

    pub fn take(&self) -> Vec<CanvasEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.take().iter().map(CanvasEvent::description).collect()
    }
}
