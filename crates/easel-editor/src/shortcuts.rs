//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s and runs them
//! against a [`CanvasStore`]. Reading key events is left to the host; this
//! module only interprets them.
//!
//! On macOS `meta` is ⌘; elsewhere `ctrl` plays the same role, so both are
//! treated as the command modifier.

use easel_core::{ToolKind, ViewportUpdate};

use crate::store::CanvasStore;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Edit ──
    Delete,
    SelectAll,
    Deselect,
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
    /// Persist the document; handled by the host.
    Save,

    // ── Z-order ──
    BringToFront,
    SendToBack,

    // ── View ──
    ZoomIn,
    ZoomOut,
    ZoomToFit,
    ResetView,

    // ── Tools ──
    SetTool(ToolKind),
}

impl std::fmt::Display for ShortcutAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SetTool(tool) => return write!(f, "tool-{}", tool),
            Self::Delete => "delete",
            Self::SelectAll => "select-all",
            Self::Deselect => "deselect",
            Self::Copy => "copy",
            Self::Cut => "cut",
            Self::Paste => "paste",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Save => "save",
            Self::BringToFront => "bring-to-front",
            Self::SendToBack => "send-to-back",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::ZoomToFit => "zoom-to-fit",
            Self::ResetView => "reset-view",
        };
        f.write_str(name)
    }
}

/// A key with its modifier state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyChord {
    /// Parse a textual chord such as `ctrl+shift+z`, `cmd+c` or `Delete`
    ///
    /// Modifier names are case-insensitive; the last segment is the key.
    /// Returns `None` for an empty chord or an unknown modifier.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        // A bare "+" or a chord ending in "++" names the plus key
        let (mods, key) = match text.strip_suffix("++") {
            Some(rest) => (rest, "+"),
            None if text == "+" => ("", "+"),
            None => match text.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", text),
            },
        };
        if key.is_empty() {
            return None;
        }

        let mut chord = KeyChord {
            key: key.to_string(),
            ..Self::default()
        };
        for modifier in mods.split('+').filter(|m| !m.is_empty()) {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "alt" | "option" => chord.alt = true,
                "meta" | "cmd" | "command" | "super" => chord.meta = true,
                _ => return None,
            }
        }
        Some(chord)
    }

    pub fn resolve(&self) -> Option<ShortcutAction> {
        ShortcutMap::resolve(&self.key, self.ctrl, self.shift, self.alt, self.meta)
    }
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the key name (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // Delete wins over any modifier combination
        if matches!(key, "Delete" | "Backspace" | "delete" | "backspace") {
            return Some(ShortcutAction::Delete);
        }

        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                "]" | "}" => Some(ShortcutAction::BringToFront),
                "[" | "{" => Some(ShortcutAction::SendToBack),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "a" | "A" => Some(ShortcutAction::SelectAll),
                "c" | "C" => Some(ShortcutAction::Copy),
                "x" | "X" => Some(ShortcutAction::Cut),
                "v" | "V" => Some(ShortcutAction::Paste),
                "s" | "S" => Some(ShortcutAction::Save),
                "=" | "+" => Some(ShortcutAction::ZoomIn),
                "-" => Some(ShortcutAction::ZoomOut),
                "0" => Some(ShortcutAction::ZoomToFit),
                "1" => Some(ShortcutAction::ResetView),
                _ => None,
            };
        }

        match key {
            "Escape" | "escape" | "Esc" => Some(ShortcutAction::Deselect),
            _ if shift => None,
            "v" | "V" => Some(ShortcutAction::SetTool(ToolKind::Select)),
            "r" | "R" => Some(ShortcutAction::SetTool(ToolKind::Rect)),
            "o" | "O" => Some(ShortcutAction::SetTool(ToolKind::Circle)),
            "t" | "T" => Some(ShortcutAction::SetTool(ToolKind::Text)),
            _ => None,
        }
    }
}

/// Zoom step applied by the zoom in/out shortcuts
const ZOOM_STEP: f64 = 1.2;

impl CanvasStore {
    /// Run a shortcut action
    ///
    /// Returns true when the action changed something. `Save` is never
    /// handled here and always returns false.
    pub fn execute_shortcut(&mut self, action: ShortcutAction) -> bool {
        tracing::debug!("Shortcut {}", action);
        match action {
            ShortcutAction::Delete => self.delete_selected_elements() > 0,
            ShortcutAction::SelectAll => self.select_all() > 0,
            ShortcutAction::Deselect => {
                let had_selection = self.has_selection();
                self.clear_selection();
                had_selection
            }
            ShortcutAction::Copy => self.copy_selected_elements(),
            ShortcutAction::Cut => self.cut_selected_elements() > 0,
            ShortcutAction::Paste => !self.paste_elements().is_empty(),
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::Save => false,
            ShortcutAction::BringToFront => self.bring_to_front() > 0,
            ShortcutAction::SendToBack => self.send_to_back() > 0,
            ShortcutAction::ZoomIn => {
                let zoom = self.viewport().zoom * ZOOM_STEP;
                self.update_viewport(ViewportUpdate::zoom(zoom))
            }
            ShortcutAction::ZoomOut => {
                let zoom = self.viewport().zoom / ZOOM_STEP;
                self.update_viewport(ViewportUpdate::zoom(zoom))
            }
            ShortcutAction::ZoomToFit => self.zoom_to_fit(),
            ShortcutAction::ResetView => self.reset_viewport(),
            ShortcutAction::SetTool(tool) => self.tool_mut().set_current_tool(tool),
        }
    }
}
