//! Z-order changes for the selection.

use chrono::Utc;
use easel_core::{CanvasEvent, ElementEvent, ElementId, ElementUpdate, HistoryActionType};

use super::CanvasStore;

impl CanvasStore {
    /// Stack the selected elements above everything else
    ///
    /// Selected elements receive consecutive z-indices above the current
    /// maximum, in selection order. Returns the number of elements moved.
    pub fn bring_to_front(&mut self) -> usize {
        let Some(max) = self.max_z_index() else {
            return 0;
        };
        let targets: Vec<(ElementId, i64)> = self
            .selection
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), max + 1 + i as i64))
            .collect();
        self.restack(targets, "Bring to front")
    }

    /// Stack the selected elements below everything else
    ///
    /// Selected elements receive consecutive z-indices below the current
    /// minimum, in selection order. Returns the number of elements moved.
    pub fn send_to_back(&mut self) -> usize {
        let Some(min) = self.min_z_index() else {
            return 0;
        };
        let targets: Vec<(ElementId, i64)> = self
            .selection
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), min - 1 - i as i64))
            .collect();
        self.restack(targets, "Send to back")
    }

    fn restack(&mut self, targets: Vec<(ElementId, i64)>, description: &str) -> usize {
        if targets.is_empty() {
            return 0;
        }

        let prev = self.snapshot();
        let now = Utc::now();
        let mut events = Vec::with_capacity(targets.len());
        for (id, z_index) in targets {
            let Some(element) = self.elements.get_mut(&id) else {
                continue;
            };
            let old_element = element.clone();
            element.z_index = z_index;
            element.updated_at = now;
            events.push(ElementEvent::Updated {
                element: element.clone(),
                old_element,
                changes: ElementUpdate::new().with_z_index(z_index),
            });
        }

        let count = events.len();
        self.record(
            format!("{} ({} element(s))", description, count),
            &prev,
            HistoryActionType::Update,
        );
        for event in events {
            self.emit(CanvasEvent::Element(event));
        }
        count
    }
}
