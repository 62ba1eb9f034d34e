//! Canvas element store.
//!
//! Owns the element collection and everything derived from it: selection,
//! viewport, clipboard, tool state and the undo/redo timeline. Every mutation of the
//! collection follows the same sequence: snapshot, mutate, record, notify.
//!
//! The implementation is split into submodules by concern:
//! - `elements`: add, update, delete, queries
//! - `selection`: selection set and `is_selected` flags
//! - `layering`: bring to front / send to back
//! - `clipboard`: copy, cut, paste
//! - `history`: undo and redo
//! - `viewport`: zoom and pan
//! - `document`: load, save, clear, sample content

mod clipboard;
mod document;
mod elements;
mod history;
mod layering;
mod selection;
mod viewport;

use std::sync::Arc;

use easel_core::{
    deep_clone, CanvasEvent, ElementId, ElementMap, EventBus, HistoryActionType, ViewportState,
};
use easel_settings::{Config, ToolSettings, ViewportSettings};

use crate::clipboard::{Clipboard, DEFAULT_PASTE_OFFSET};
use crate::history::{UndoRedoManager, DEFAULT_MAX_HISTORY};
use crate::tool::ToolState;

/// State of a single canvas document
pub struct CanvasStore {
    elements: ElementMap,
    /// Selected ids in selection order
    selection: Vec<ElementId>,
    viewport: ViewportState,
    viewport_settings: ViewportSettings,
    clipboard: Clipboard,
    history: UndoRedoManager,
    tool: ToolState,
    bus: Arc<EventBus>,
}

impl CanvasStore {
    /// Create an empty store with default settings
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            elements: ElementMap::new(),
            selection: Vec::new(),
            viewport: ViewportState::default(),
            viewport_settings: ViewportSettings::default(),
            clipboard: Clipboard::new(DEFAULT_PASTE_OFFSET, bus.clone()),
            history: UndoRedoManager::new(DEFAULT_MAX_HISTORY, bus.clone()),
            tool: ToolState::new(&ToolSettings::default(), bus.clone()),
            bus,
        }
    }

    /// Create an empty store using the history, clipboard, viewport and tool settings
    ///
    /// A config that fails validation is replaced by the defaults.
    pub fn with_config(bus: Arc<EventBus>, config: &Config) -> Self {
        let defaults;
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Invalid editor config, using defaults: {}", e);
                defaults = Config::default();
                &defaults
            }
        };
        Self {
            elements: ElementMap::new(),
            selection: Vec::new(),
            viewport: ViewportState::default(),
            viewport_settings: config.viewport.clone(),
            clipboard: Clipboard::new(config.clipboard.paste_offset, bus.clone()),
            history: UndoRedoManager::new(config.history.max_size, bus.clone()),
            tool: ToolState::new(&config.tool, bus.clone()),
            bus,
        }
    }

    /// The bus this store publishes on
    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    /// Tool state, for switching tools and tracking gestures
    pub fn tool_mut(&mut self) -> &mut ToolState {
        &mut self.tool
    }

    fn emit(&self, event: CanvasEvent) {
        self.bus.publish(event);
    }

    /// Record the transition from `prev` to the live collection
    fn record(&mut self, description: impl Into<String>, prev: &ElementMap, kind: HistoryActionType) {
        self.history
            .push_history(description, prev, &self.elements, kind);
    }

    /// Copy of the live collection, taken before a mutation
    fn snapshot(&self) -> ElementMap {
        deep_clone(&self.elements)
    }
}

impl std::fmt::Debug for CanvasStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasStore")
            .field("elements", &self.elements.len())
            .field("selected", &self.selection.len())
            .field("viewport", &self.viewport)
            .field("history", &self.history)
            .field("clipboard", &self.clipboard)
            .field("tool", &self.tool)
            .finish()
    }
}
