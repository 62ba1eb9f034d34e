//! # Easel Core
//!
//! Core types and utilities for the Easel canvas editor.
//! Provides the element data model, identifier generation, snapshot
//! copies, the event bus, and the shared error types.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod id;
pub mod snapshot;

pub use data::{
    Bounds, Element, ElementMap, ElementStyle, ElementType, ElementUpdate, FilterConfig,
    FilterKind, FontStyle, FontWeight, HistoryActionType, HistoryRecord, LineCap, NewElement,
    TextDecoration, ToolKind, ViewportState, ViewportUpdate,
};

pub use error::{ConfigError, Error, Result, StorageError};

pub use event_bus::{
    CanvasEvent, ClipboardEvent, DocumentEvent, ElementEvent, EventBus, EventBusConfig,
    EventCategory, EventFilter, HistoryEvent, SelectionEvent, SubscriptionId, ToolEvent,
    ViewportEvent,
};

pub use id::{new_element_id, new_history_id, ElementId, HistoryId};
pub use snapshot::deep_clone;
