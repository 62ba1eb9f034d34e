//! Event type definitions for the event bus.
//!
//! The set of events is closed: every notification the canvas emits is one
//! of the variants below, grouped by category. Events are cloneable and
//! serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::data::{Element, ElementUpdate, HistoryRecord, ToolKind, ViewportState};
use crate::id::ElementId;

/// Root event enum for all canvas events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// Element lifecycle
    Element(ElementEvent),
    /// Selection changes
    Selection(SelectionEvent),
    /// Zoom and pan
    Viewport(ViewportEvent),
    /// Undo/redo bookkeeping
    History(HistoryEvent),
    /// Copy, cut and paste
    Clipboard(ClipboardEvent),
    /// Whole-document load, save and clear
    Document(DocumentEvent),
    /// Active tool switches
    Tool(ToolEvent),
}

impl CanvasEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            CanvasEvent::Element(_) => EventCategory::Element,
            CanvasEvent::Selection(_) => EventCategory::Selection,
            CanvasEvent::Viewport(_) => EventCategory::Viewport,
            CanvasEvent::History(_) => EventCategory::History,
            CanvasEvent::Clipboard(_) => EventCategory::Clipboard,
            CanvasEvent::Document(_) => EventCategory::Document,
            CanvasEvent::Tool(_) => EventCategory::Tool,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            CanvasEvent::Element(e) => e.description(),
            CanvasEvent::Selection(e) => e.description(),
            CanvasEvent::Viewport(e) => e.description(),
            CanvasEvent::History(e) => e.description(),
            CanvasEvent::Clipboard(e) => e.description(),
            CanvasEvent::Document(e) => e.description(),
            CanvasEvent::Tool(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Element added, updated or deleted.
    Element,
    /// Selection changed.
    Selection,
    /// Viewport changed.
    Viewport,
    /// History record added or undo/redo availability changed.
    History,
    /// Clipboard copy, cut or paste.
    Clipboard,
    /// Document loaded, saved or cleared.
    Document,
    /// Active tool changed.
    Tool,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Element => write!(f, "Element"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Viewport => write!(f, "Viewport"),
            EventCategory::History => write!(f, "History"),
            EventCategory::Clipboard => write!(f, "Clipboard"),
            EventCategory::Document => write!(f, "Document"),
            EventCategory::Tool => write!(f, "Tool"),
        }
    }
}

/// Element lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ElementEvent {
    /// An element was inserted.
    Added {
        /// The element as stored.
        element: Element,
    },
    /// An element was changed in place.
    Updated {
        /// The element after the change.
        element: Element,
        /// The element before the change.
        old_element: Element,
        /// The fields that were applied.
        changes: ElementUpdate,
    },
    /// An element was removed.
    Deleted {
        /// The element as it was before removal.
        element: Element,
    },
}

impl ElementEvent {
    fn description(&self) -> String {
        match self {
            ElementEvent::Added { element } => format!("Element added: {}", element.id),
            ElementEvent::Updated {
                element, changes, ..
            } => format!("Element updated: {} ({})", element.id, changes.summary()),
            ElementEvent::Deleted { element } => format!("Element deleted: {}", element.id),
        }
    }
}

/// Selection events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The selection set changed.
    Changed {
        /// Currently selected elements in selection order; empty when cleared.
        selected: Vec<Element>,
    },
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::Changed { selected } if selected.is_empty() => {
                "Selection cleared".to_string()
            }
            SelectionEvent::Changed { selected } => {
                format!("Selection changed: {} element(s)", selected.len())
            }
        }
    }
}

/// Viewport events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViewportEvent {
    /// Zoom or pan changed.
    Changed {
        /// Viewport before the change.
        old: ViewportState,
        /// Viewport after the change.
        new: ViewportState,
    },
}

impl ViewportEvent {
    fn description(&self) -> String {
        match self {
            ViewportEvent::Changed { new, .. } => format!(
                "Viewport changed: zoom {:.2} at ({:.1}, {:.1})",
                new.zoom, new.x, new.y
            ),
        }
    }
}

/// History events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// Undo/redo availability after a history mutation.
    Changed {
        /// Whether an undo is possible.
        can_undo: bool,
        /// Whether a redo is possible.
        can_redo: bool,
    },
    /// A record was pushed.
    RecordAdded {
        /// The new record.
        record: HistoryRecord,
    },
}

impl HistoryEvent {
    fn description(&self) -> String {
        match self {
            HistoryEvent::Changed { can_undo, can_redo } => {
                format!("History changed: undo={} redo={}", can_undo, can_redo)
            }
            HistoryEvent::RecordAdded { record } => {
                format!("History record added: {} ({})", record.description, record.action_type)
            }
        }
    }
}

/// Clipboard events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClipboardEvent {
    /// Elements were copied.
    Copied {
        /// Number of elements on the clipboard.
        element_count: usize,
    },
    /// Elements were cut.
    Cut {
        /// Number of elements on the clipboard.
        element_count: usize,
        /// Ids of the source elements.
        element_ids: Vec<ElementId>,
    },
    /// Clipboard contents were materialised.
    Pasted {
        /// The fresh elements produced by the paste.
        elements: Vec<Element>,
    },
}

impl ClipboardEvent {
    fn description(&self) -> String {
        match self {
            ClipboardEvent::Copied { element_count } => {
                format!("Copied {} element(s)", element_count)
            }
            ClipboardEvent::Cut { element_count, .. } => {
                format!("Cut {} element(s)", element_count)
            }
            ClipboardEvent::Pasted { elements } => {
                format!("Pasted {} element(s)", elements.len())
            }
        }
    }
}

/// Document events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// A document replaced the element collection.
    Loaded {
        /// Number of elements loaded.
        element_count: usize,
    },
    /// The element collection was persisted.
    Saved {
        /// Number of elements saved.
        element_count: usize,
    },
    /// The canvas was emptied.
    Cleared,
}

impl DocumentEvent {
    fn description(&self) -> String {
        match self {
            DocumentEvent::Loaded { element_count } => {
                format!("Document loaded: {} element(s)", element_count)
            }
            DocumentEvent::Saved { element_count } => {
                format!("Document saved: {} element(s)", element_count)
            }
            DocumentEvent::Cleared => "Document cleared".to_string(),
        }
    }
}

/// Tool events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ToolEvent {
    /// A tool was activated; published even when it was already active.
    Changed {
        /// Tool before the switch.
        old: ToolKind,
        /// Tool after the switch.
        new: ToolKind,
    },
}

impl ToolEvent {
    fn description(&self) -> String {
        match self {
            ToolEvent::Changed { old, new } => format!("Tool changed: {} -> {}", old, new),
        }
    }
}
