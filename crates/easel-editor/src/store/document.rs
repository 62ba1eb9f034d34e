//! Whole-document operations: load, save, clear and sample content.

use easel_core::{
    CanvasEvent, DocumentEvent, ElementMap, ElementStyle, HistoryActionType, NewElement,
};

use super::CanvasStore;
use crate::storage::DocumentStore;

impl CanvasStore {
    /// Replace the collection with `elements`
    ///
    /// Selection and history are reset; loading is not undoable.
    pub fn load_elements(&mut self, elements: ElementMap) {
        let count = elements.len();
        self.elements = elements;
        self.selection.clear();
        self.history.clear_history();
        self.emit_selection();
        self.emit(CanvasEvent::Document(DocumentEvent::Loaded {
            element_count: count,
        }));
    }

    /// Remove every element as one undo step
    ///
    /// Returns false when the canvas is already empty.
    pub fn clear_canvas(&mut self) -> bool {
        if self.elements.is_empty() {
            return false;
        }
        let prev = self.snapshot();
        self.elements.clear();
        self.selection.clear();
        self.record("Clear canvas", &prev, HistoryActionType::Delete);
        self.emit(CanvasEvent::Document(DocumentEvent::Cleared));
        self.emit_selection();
        true
    }

    /// Persist the collection through `store`
    pub fn save_to(&self, store: &dyn DocumentStore) -> anyhow::Result<()> {
        store.save(&self.elements)?;
        self.emit(CanvasEvent::Document(DocumentEvent::Saved {
            element_count: self.elements.len(),
        }));
        Ok(())
    }

    /// Load the collection from `store`
    ///
    /// Returns false, leaving the canvas untouched, when nothing was stored.
    pub fn load_from(&mut self, store: &dyn DocumentStore) -> anyhow::Result<bool> {
        match store.load()? {
            Some(elements) => {
                self.load_elements(elements);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Seed the canvas with a rectangle, a circle and a text block
    pub fn initialize_with_sample_data(&mut self) {
        self.elements.clear();
        self.selection.clear();
        self.emit_selection();
        self.add_element(
            NewElement::rect(100.0, 100.0, 200.0, 150.0)
                .with_style(ElementStyle::filled("#3498db", "#2980b9", 2.0))
                .with_name("Rectangle"),
        );
        self.add_element(
            NewElement::circle(400.0, 150.0, 120.0, 120.0)
                .with_style(ElementStyle::filled("#e74c3c", "#c0392b", 1.0))
                .with_name("Circle"),
        );
        self.add_element(
            NewElement::text(200.0, 300.0, 150.0, 40.0, "Hello Canvas Editor")
                .with_style(ElementStyle::text(16.0, "Arial", "#2c3e50"))
                .with_name("Text"),
        );
        tracing::info!("Initialized canvas with sample data");
    }
}
