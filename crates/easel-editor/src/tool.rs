//! Active tool and pointer interaction state.
//!
//! Tracks which tool the pointer drives and whether a draw, drag or resize
//! gesture is in progress. Switching tools always ends any gesture.

use std::sync::Arc;

use easel_core::{CanvasEvent, EventBus, ToolEvent, ToolKind};
use easel_settings::ToolSettings;

/// Current tool plus gesture flags and grid snapping
pub struct ToolState {
    current_tool: ToolKind,
    is_drawing: bool,
    is_dragging: bool,
    is_resizing: bool,
    snap_to_grid: bool,
    grid_size: f64,
    bus: Arc<EventBus>,
}

impl ToolState {
    /// Start on the select tool; an unusable grid size falls back to the default
    pub fn new(settings: &ToolSettings, bus: Arc<EventBus>) -> Self {
        let grid_size = if settings.grid_size.is_finite() && settings.grid_size > 0.0 {
            settings.grid_size
        } else {
            ToolSettings::default().grid_size
        };
        Self {
            current_tool: ToolKind::Select,
            is_drawing: false,
            is_dragging: false,
            is_resizing: false,
            snap_to_grid: settings.snap_to_grid,
            grid_size,
            bus,
        }
    }

    /// Activate `tool`, ending any gesture in progress
    ///
    /// `Tool(Changed)` is published even when `tool` is already active.
    /// Returns true when the active tool actually changed.
    pub fn set_current_tool(&mut self, tool: ToolKind) -> bool {
        let old = self.current_tool;
        self.is_drawing = false;
        self.is_dragging = false;
        self.is_resizing = false;
        self.current_tool = tool;
        tracing::debug!("Tool {} -> {}", old, tool);
        self.bus
            .publish(CanvasEvent::Tool(ToolEvent::Changed { old, new: tool }));
        old != tool
    }

    pub fn set_drawing_state(&mut self, drawing: bool) {
        self.is_drawing = drawing;
    }

    pub fn set_dragging_state(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    pub fn set_resizing_state(&mut self, resizing: bool) {
        self.is_resizing = resizing;
    }

    /// Flip grid snapping; returns the new setting
    pub fn toggle_snap_to_grid(&mut self) -> bool {
        self.snap_to_grid = !self.snap_to_grid;
        self.snap_to_grid
    }

    /// Change the grid spacing
    ///
    /// Non-finite or non-positive sizes are rejected and return false.
    pub fn set_grid_size(&mut self, size: f64) -> bool {
        if !size.is_finite() || size <= 0.0 {
            tracing::warn!("Ignoring invalid grid size {}", size);
            return false;
        }
        self.grid_size = size;
        true
    }

    /// Round `value` to the nearest grid line when snapping is on
    pub fn snap(&self, value: f64) -> f64 {
        if self.snap_to_grid {
            (value / self.grid_size).round() * self.grid_size
        } else {
            value
        }
    }

    pub fn current_tool(&self) -> ToolKind {
        self.current_tool
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_resizing(&self) -> bool {
        self.is_resizing
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }
}

impl std::fmt::Debug for ToolState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolState")
            .field("current_tool", &self.current_tool)
            .field("is_drawing", &self.is_drawing)
            .field("is_dragging", &self.is_dragging)
            .field("is_resizing", &self.is_resizing)
            .field("snap_to_grid", &self.snap_to_grid)
            .field("grid_size", &self.grid_size)
            .finish()
    }
}
