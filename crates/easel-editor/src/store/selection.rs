//! Selection operations.
//!
//! The selection is an ordered list of ids that always resolve to live
//! elements. Each element's `is_selected` flag mirrors membership and is
//! recomputed after every selection change.

use easel_core::{CanvasEvent, Element, ElementId, SelectionEvent};

use super::CanvasStore;

impl CanvasStore {
    /// Select `id`, replacing the selection unless `add_to_selection` is set
    ///
    /// Returns false when the element does not exist.
    pub fn select_element(&mut self, id: &ElementId, add_to_selection: bool) -> bool {
        if !self.elements.contains_key(id) {
            tracing::warn!("Cannot select missing element {}", id);
            return false;
        }

        if add_to_selection {
            if !self.selection.contains(id) {
                self.selection.push(id.clone());
            }
        } else {
            self.selection = vec![id.clone()];
        }
        self.emit_selection();
        true
    }

    /// Replace the selection with the ids that exist, in the given order
    ///
    /// Returns the number of ids selected.
    pub fn select_multiple(&mut self, ids: &[ElementId]) -> usize {
        let mut selection: Vec<ElementId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !self.elements.contains_key(id) {
                tracing::debug!("Skipping missing element {} in selection", id);
                continue;
            }
            if !selection.contains(id) {
                selection.push(id.clone());
            }
        }
        self.selection = selection;
        self.emit_selection();
        self.selection.len()
    }

    /// Select every element in painting order
    pub fn select_all(&mut self) -> usize {
        let ids: Vec<ElementId> = self
            .elements_sorted()
            .into_iter()
            .map(|el| el.id.clone())
            .collect();
        self.select_multiple(&ids)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.emit_selection();
    }

    /// Add `id` to the selection, or remove it if already selected
    pub fn toggle_element_selection(&mut self, id: &ElementId) -> bool {
        if self.selection.contains(id) {
            let remaining: Vec<ElementId> = self
                .selection
                .iter()
                .filter(|s| *s != id)
                .cloned()
                .collect();
            self.select_multiple(&remaining);
            true
        } else {
            self.select_element(id, true)
        }
    }

    /// Selected ids in selection order
    pub fn selected_ids(&self) -> &[ElementId] {
        &self.selection
    }

    /// Selected elements in selection order
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.selection
            .iter()
            .filter_map(|id| self.elements.get(id))
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selection.contains(id)
    }

    /// The selected element when exactly one is selected
    pub fn single_selected_element(&self) -> Option<&Element> {
        match self.selection.as_slice() {
            [id] => self.elements.get(id),
            _ => None,
        }
    }

    /// Recompute `is_selected` flags and publish the current selection
    pub(super) fn emit_selection(&mut self) {
        self.selection.retain(|id| self.elements.contains_key(id));
        for element in self.elements.values_mut() {
            element.is_selected = false;
        }
        for id in &self.selection {
            if let Some(element) = self.elements.get_mut(id) {
                element.is_selected = true;
            }
        }

        let selected: Vec<Element> = self.selected_elements().into_iter().cloned().collect();
        self.emit(CanvasEvent::Selection(SelectionEvent::Changed { selected }));
    }
}
