//! Copy, cut and paste of the selection.

use easel_core::{CanvasEvent, Element, ElementEvent, ElementId, HistoryActionType};

use super::CanvasStore;
use crate::clipboard::Clipboard;

impl CanvasStore {
    fn selected_clones(&self) -> Vec<Element> {
        self.selected_elements().into_iter().cloned().collect()
    }

    /// Copy the selection to the clipboard
    ///
    /// Returns false when nothing is selected.
    pub fn copy_selected_elements(&mut self) -> bool {
        let selected = self.selected_clones();
        self.clipboard.copy(&selected)
    }

    /// Copy the selection to the clipboard and delete it
    ///
    /// The deletion is one undo step. Returns the number of elements removed.
    pub fn cut_selected_elements(&mut self) -> usize {
        let selected = self.selected_clones();
        if !self.clipboard.cut(&selected) {
            return 0;
        }
        self.delete_selected_elements()
    }

    /// Insert the clipboard contents and select them
    ///
    /// Pasted elements are stacked above everything else, keeping their
    /// order. Returns the ids of the new elements; empty when the clipboard
    /// is empty.
    pub fn paste_elements(&mut self) -> Vec<ElementId> {
        let mut pasted = self.clipboard.paste();
        if pasted.is_empty() {
            return Vec::new();
        }

        let prev = self.snapshot();
        let base = self.max_z_index().unwrap_or(0);
        pasted.sort_by_key(|el| el.z_index);
        let mut ids = Vec::with_capacity(pasted.len());
        for (i, element) in pasted.iter_mut().enumerate() {
            element.z_index = base + 1 + i as i64;
            ids.push(element.id.clone());
            self.elements.insert(element.id.clone(), element.clone());
        }

        self.record(
            format!("Paste {} element(s)", ids.len()),
            &prev,
            HistoryActionType::Add,
        );
        for element in pasted {
            self.emit(CanvasEvent::Element(ElementEvent::Added { element }));
        }
        self.select_multiple(&ids);
        ids
    }

    pub fn can_paste(&self) -> bool {
        self.clipboard.has_data()
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }
}
