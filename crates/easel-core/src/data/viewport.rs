//! Viewport state and canvas-space bounds.

use serde::{Deserialize, Serialize};

use super::element::Element;

/// Zoom factor and pan offset of the canvas view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Zoom factor, strictly positive
    pub zoom: f64,
    /// Horizontal pan offset
    pub x: f64,
    /// Vertical pan offset
    pub y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl ViewportState {
    pub fn new(zoom: f64, x: f64, y: f64) -> Self {
        Self { zoom, x, y }
    }

    /// Convert a canvas point to screen coordinates
    pub fn canvas_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.zoom + self.x, y * self.zoom + self.y)
    }

    /// Convert a screen point to canvas coordinates
    pub fn screen_to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.x) / self.zoom, (y - self.y) / self.zoom)
    }
}

/// Partial viewport change; unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl ViewportUpdate {
    pub fn zoom(zoom: f64) -> Self {
        Self {
            zoom: Some(zoom),
            ..Self::default()
        }
    }

    pub fn pan(x: f64, y: f64) -> Self {
        Self {
            zoom: None,
            x: Some(x),
            y: Some(y),
        }
    }

    /// Merge onto `current`
    pub fn merged(&self, current: ViewportState) -> ViewportState {
        ViewportState {
            zoom: self.zoom.unwrap_or(current.zoom),
            x: self.x.unwrap_or(current.x),
            y: self.y.unwrap_or(current.y),
        }
    }
}

impl From<ViewportState> for ViewportUpdate {
    fn from(state: ViewportState) -> Self {
        Self {
            zoom: Some(state.zoom),
            x: Some(state.x),
            y: Some(state.y),
        }
    }
}

/// Axis-aligned rectangle in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest bounds containing both
    pub fn union(&self, other: &Bounds) -> Bounds {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Bounds enclosing every element, or `None` for an empty set
    pub fn from_elements<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Option<Bounds> {
        elements
            .into_iter()
            .map(Element::bounds)
            .reduce(|acc, b| acc.union(&b))
    }
}
