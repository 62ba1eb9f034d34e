//! Data models for the canvas: elements, viewport, tools and history records.

pub mod element;
pub mod history;
pub mod tool;
pub mod viewport;

use std::collections::BTreeMap;

use crate::id::ElementId;

pub use element::{
    Element, ElementStyle, ElementType, ElementUpdate, FilterConfig, FilterKind, FontStyle,
    FontWeight, LineCap, NewElement, TextDecoration,
};
pub use history::{HistoryActionType, HistoryRecord};
pub use tool::ToolKind;
pub use viewport::{Bounds, ViewportState, ViewportUpdate};

/// The element collection, keyed by id
pub type ElementMap = BTreeMap<ElementId, Element>;
