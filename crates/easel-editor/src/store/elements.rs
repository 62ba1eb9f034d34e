//! Element creation, update, deletion and queries.

use chrono::Utc;
use easel_core::{
    CanvasEvent, Element, ElementEvent, ElementId, ElementMap, ElementUpdate, HistoryActionType,
    NewElement,
};

use super::CanvasStore;

impl CanvasStore {
    /// Add an element on top of the stack and return its id
    pub fn add_element(&mut self, new: NewElement) -> ElementId {
        let prev = self.snapshot();
        let id = ElementId::generate();
        let z_index = self.max_z_index().unwrap_or(0) + 1;
        let element = new.into_element(id.clone(), z_index, Utc::now());
        let description = format!("Add {}", element.element_type);

        self.elements.insert(id.clone(), element.clone());
        self.record(description, &prev, HistoryActionType::Add);

        tracing::debug!("Added element {} at z {}", id, z_index);
        self.emit(CanvasEvent::Element(ElementEvent::Added { element }));
        id
    }

    /// Merge `changes` into the element with `id`
    ///
    /// Returns false when the element does not exist or the update is empty.
    pub fn update_element(&mut self, id: &ElementId, changes: &ElementUpdate) -> bool {
        if !self.elements.contains_key(id) {
            tracing::warn!("Cannot update missing element {}", id);
            return false;
        }
        if changes.is_empty() {
            tracing::debug!("Empty update for element {}", id);
            return false;
        }

        let prev = self.snapshot();
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        let old_element = element.clone();
        changes.apply(element);
        element.updated_at = Utc::now();
        let updated = element.clone();

        let kind = changes.action_type();
        self.record(
            format!("Update {} ({})", updated.element_type, changes.summary()),
            &prev,
            kind,
        );

        self.emit(CanvasEvent::Element(ElementEvent::Updated {
            element: updated,
            old_element,
            changes: changes.clone(),
        }));
        true
    }

    /// Remove the element with `id`
    ///
    /// Returns false when it does not exist.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        if !self.elements.contains_key(id) {
            tracing::warn!("Cannot delete missing element {}", id);
            return false;
        }

        let prev = self.snapshot();
        let Some(element) = self.elements.remove(id) else {
            return false;
        };
        let was_selected = self.selection.contains(id);
        self.selection.retain(|s| s != id);
        self.record(
            format!("Delete {}", element.element_type),
            &prev,
            HistoryActionType::Delete,
        );

        self.emit(CanvasEvent::Element(ElementEvent::Deleted { element }));
        if was_selected {
            self.emit_selection();
        }
        true
    }

    /// Remove every selected element as one undo step
    ///
    /// Returns the number of elements removed.
    pub fn delete_selected_elements(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        let prev = self.snapshot();
        let ids = std::mem::take(&mut self.selection);
        let removed: Vec<Element> = ids
            .iter()
            .filter_map(|id| self.elements.remove(id))
            .collect();

        self.record(
            format!("Delete {} element(s)", removed.len()),
            &prev,
            HistoryActionType::Delete,
        );

        let count = removed.len();
        for element in removed {
            self.emit(CanvasEvent::Element(ElementEvent::Deleted { element }));
        }
        self.emit_selection();
        count
    }

    pub fn get_element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// The live collection, keyed by id
    pub fn elements(&self) -> &ElementMap {
        &self.elements
    }

    /// Elements in painting order (z-index ascending, stable)
    pub fn elements_sorted(&self) -> Vec<&Element> {
        let mut sorted: Vec<&Element> = self.elements.values().collect();
        sorted.sort_by(|a, b| {
            a.z_index
                .cmp(&b.z_index)
                .then(a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        sorted
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn max_z_index(&self) -> Option<i64> {
        self.elements.values().map(|el| el.z_index).max()
    }

    pub fn min_z_index(&self) -> Option<i64> {
        self.elements.values().map(|el| el.z_index).min()
    }
}
