//! Zoom and pan.
//!
//! Viewport changes are not part of the undo timeline.

use easel_core::{Bounds, CanvasEvent, ViewportEvent, ViewportState, ViewportUpdate};

use super::CanvasStore;

impl CanvasStore {
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Merge `update` into the viewport
    ///
    /// Zoom is clamped to the configured limits. Non-finite values and a
    /// non-positive zoom are rejected. Returns false when nothing changed.
    pub fn update_viewport(&mut self, update: ViewportUpdate) -> bool {
        let mut next = update.merged(self.viewport);
        if !next.zoom.is_finite() || next.zoom <= 0.0 {
            tracing::warn!("Rejected viewport zoom {}", next.zoom);
            return false;
        }
        if !next.x.is_finite() || !next.y.is_finite() {
            tracing::warn!("Rejected viewport offset ({}, {})", next.x, next.y);
            return false;
        }
        next.zoom = next.zoom.clamp(
            self.viewport_settings.min_zoom,
            self.viewport_settings.max_zoom,
        );
        self.set_viewport(next)
    }

    /// Back to zoom 1 with no pan
    pub fn reset_viewport(&mut self) -> bool {
        self.set_viewport(ViewportState::default())
    }

    /// Fit every element into the visible canvas
    ///
    /// On an empty canvas the configured default fit is applied.
    pub fn zoom_to_fit(&mut self) -> bool {
        let settings = &self.viewport_settings;
        let Some(bounds) = Bounds::from_elements(self.elements.values()) else {
            let fallback = settings.default_fit;
            return self.set_viewport(fallback);
        };

        let padding = settings.fit_padding;
        let avail_w = settings.canvas_width - padding * 2.0;
        let avail_h = settings.canvas_height - padding * 2.0;
        let content_w = bounds.width.max(1.0);
        let content_h = bounds.height.max(1.0);

        let zoom = (avail_w / content_w)
            .min(avail_h / content_h)
            .clamp(settings.min_zoom, settings.max_zoom);
        let x = padding + (avail_w - content_w * zoom) / 2.0 - bounds.x * zoom;
        let y = padding + (avail_h - content_h * zoom) / 2.0 - bounds.y * zoom;

        self.set_viewport(ViewportState::new(zoom, x, y))
    }

    fn set_viewport(&mut self, next: ViewportState) -> bool {
        let old = self.viewport;
        if old == next {
            return false;
        }
        self.viewport = next;
        self.emit(CanvasEvent::Viewport(ViewportEvent::Changed { old, new: next }));
        true
    }
}
