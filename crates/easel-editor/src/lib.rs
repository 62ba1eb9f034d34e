//! # Easel Editor
//!
//! The state layer of the canvas editor: a [`CanvasStore`] holding the
//! element collection together with selection, z-order layering, viewport,
//! clipboard, tool state and a bounded undo/redo timeline of full snapshots.
//!
//! All components publish on an [`easel_core::EventBus`] handed to them at
//! construction.
//!
//! ```rust
//! use easel_core::{ElementUpdate, EventBus, NewElement};
//! use easel_editor::CanvasStore;
//!
//! let mut store = CanvasStore::new(EventBus::shared());
//! let id = store.add_element(NewElement::rect(0.0, 0.0, 100.0, 50.0));
//! store.update_element(&id, &ElementUpdate::new().with_x(50.0));
//! ```

pub mod clipboard;
pub mod history;
pub mod shortcuts;
pub mod storage;
pub mod store;
pub mod tool;

pub use clipboard::{Clipboard, ClipboardAction, DEFAULT_PASTE_OFFSET};
pub use history::{UndoRedoManager, DEFAULT_MAX_HISTORY};
pub use shortcuts::{KeyChord, ShortcutAction, ShortcutMap};
pub use storage::{DocumentFile, DocumentMetadata, DocumentStore, JsonFileStore, MemoryStore};
pub use store::CanvasStore;
pub use tool::ToolState;
