//! Clipboard for canvas elements.
//!
//! The clipboard holds detached copies of elements, already shifted one
//! paste offset away from their sources. Each paste hands out fresh copies
//! with new ids, moved a further offset per repeated paste so that pasting
//! the same content several times fans out diagonally.

use std::sync::Arc;

use chrono::Utc;
use easel_core::{CanvasEvent, ClipboardEvent, Element, ElementId, EventBus};

/// Default per-paste offset on both axes
pub const DEFAULT_PASTE_OFFSET: f64 = 20.0;

/// How the current payload got onto the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardAction {
    Copy,
    Cut,
}

/// Copy/cut/paste buffer
pub struct Clipboard {
    payload: Vec<Element>,
    last_action: Option<ClipboardAction>,
    paste_count: u32,
    offset: f64,
    bus: Arc<EventBus>,
}

impl Clipboard {
    pub fn new(offset: f64, bus: Arc<EventBus>) -> Self {
        Self {
            payload: Vec::new(),
            last_action: None,
            paste_count: 0,
            offset,
            bus,
        }
    }

    /// Detached copy of `source` with a fresh id, moved by `shift`
    fn duplicate(source: &Element, shift: f64) -> Element {
        let now = Utc::now();
        let mut copy = source.clone();
        copy.id = ElementId::generate();
        copy.translate(shift, shift);
        copy.is_selected = false;
        copy.created_at = now;
        copy.updated_at = now;
        copy
    }

    /// Put copies of `elements` on the clipboard
    ///
    /// Returns false and leaves the clipboard untouched for empty input.
    pub fn copy(&mut self, elements: &[Element]) -> bool {
        if elements.is_empty() {
            tracing::debug!("Nothing to copy");
            return false;
        }
        self.payload = elements
            .iter()
            .map(|el| Self::duplicate(el, self.offset))
            .collect();
        self.paste_count = 0;
        self.last_action = Some(ClipboardAction::Copy);
        self.bus.publish(CanvasEvent::Clipboard(ClipboardEvent::Copied {
            element_count: self.payload.len(),
        }));
        true
    }

    /// [`copy`](Self::copy), then tag the payload as cut
    ///
    /// Publishes `Copied` followed by `Cut`. Removing the originals is up
    /// to the caller.
    pub fn cut(&mut self, elements: &[Element]) -> bool {
        if !self.copy(elements) {
            tracing::debug!("Nothing to cut");
            return false;
        }
        self.last_action = Some(ClipboardAction::Cut);
        self.bus.publish(CanvasEvent::Clipboard(ClipboardEvent::Cut {
            element_count: self.payload.len(),
            element_ids: elements.iter().map(|el| el.id.clone()).collect(),
        }));
        true
    }

    /// Produce fresh copies of the payload
    ///
    /// The n-th paste after a copy lands n offsets away from the sources.
    /// Returns an empty list when the clipboard is empty.
    pub fn paste(&mut self) -> Vec<Element> {
        if self.payload.is_empty() {
            return Vec::new();
        }
        self.paste_count += 1;
        let shift = f64::from(self.paste_count - 1) * self.offset;
        let pasted: Vec<Element> = self
            .payload
            .iter()
            .map(|el| Self::duplicate(el, shift))
            .collect();

        self.bus.publish(CanvasEvent::Clipboard(ClipboardEvent::Pasted {
            elements: pasted.clone(),
        }));
        pasted
    }

    pub fn has_data(&self) -> bool {
        !self.payload.is_empty()
    }

    /// Empty the clipboard
    pub fn clear(&mut self) {
        self.payload.clear();
        self.last_action = None;
        self.paste_count = 0;
    }

    pub fn last_action(&self) -> Option<ClipboardAction> {
        self.last_action
    }

    /// Pastes since the last copy or cut
    pub fn paste_count(&self) -> u32 {
        self.paste_count
    }

    /// Stored payload
    pub fn contents(&self) -> &[Element] {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard")
            .field("elements", &self.payload.len())
            .field("last_action", &self.last_action)
            .field("paste_count", &self.paste_count)
            .finish()
    }
}
