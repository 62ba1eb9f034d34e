//! Undo and redo against the element collection.

use easel_core::deep_clone;

use super::CanvasStore;
use crate::history::UndoRedoManager;

impl CanvasStore {
    /// Revert the most recent applied transition
    ///
    /// The selection is cleared afterwards. Returns false at the start of
    /// the timeline.
    pub fn undo(&mut self) -> bool {
        let Some(state) = self.history.undo() else {
            tracing::debug!("Nothing to undo");
            return false;
        };
        self.elements = deep_clone(state);
        self.clear_selection();
        true
    }

    /// Re-apply the next transition
    ///
    /// The selection is cleared afterwards. Returns false at the end of the
    /// timeline.
    pub fn redo(&mut self) -> bool {
        let Some(state) = self.history.redo() else {
            tracing::debug!("Nothing to redo");
            return false;
        };
        self.elements = deep_clone(state);
        self.clear_selection();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear_history();
    }

    pub fn history(&self) -> &UndoRedoManager {
        &self.history
    }
}
