//! Configuration and settings management for Easel
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - History settings (undo depth)
//! - Clipboard settings (paste offset)
//! - Viewport settings (zoom limits, fit-to-content)
//! - Tool settings (grid snapping)
//! - Storage settings (document location, autosave)
//! - Event settings (debug event history)

use easel_core::{ConfigError, Error, EventBusConfig, Result, ViewportState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "easel";

/// Undo/redo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of history records kept
    pub max_size: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_size: 50 }
    }
}

/// Clipboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    /// Distance each successive paste is shifted on both axes
    pub paste_offset: f64,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self { paste_offset: 20.0 }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Smallest allowed zoom factor
    pub min_zoom: f64,
    /// Largest allowed zoom factor
    pub max_zoom: f64,
    /// Visible canvas width used by zoom-to-fit
    pub canvas_width: f64,
    /// Visible canvas height used by zoom-to-fit
    pub canvas_height: f64,
    /// Margin kept around content when fitting
    pub fit_padding: f64,
    /// Viewport applied by zoom-to-fit on an empty canvas
    pub default_fit: ViewportState,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 50.0,
            canvas_width: 1200.0,
            canvas_height: 800.0,
            fit_padding: 50.0,
            default_fit: ViewportState::new(0.8, 50.0, 50.0),
        }
    }
}

/// Drawing tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Snap pointer positions to the grid
    pub snap_to_grid: bool,
    /// Grid spacing in canvas units
    pub grid_size: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            grid_size: 10.0,
        }
    }
}

/// Document storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Location of the persisted canvas document
    pub document_path: PathBuf,
    /// Save automatically when the session ends
    pub autosave: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            document_path: default_config_dir().join("canvas.json"),
            autosave: true,
        }
    }
}

/// Event bus settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    /// Keep published events for inspection
    pub enable_history: bool,
    /// Maximum retained events
    pub max_history_size: usize,
}

impl Default for EventSettings {
    fn default() -> Self {
        let bus = EventBusConfig::default();
        Self {
            enable_history: bus.enable_history,
            max_history_size: bus.max_history_size,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub history: HistorySettings,
    pub clipboard: ClipboardSettings,
    pub viewport: ViewportSettings,
    pub tool: ToolSettings,
    pub storage: StorageSettings,
    pub events: EventSettings,
}

/// Platform config directory for Easel, falling back to the home directory
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Default location of the settings file
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }
        .into()),
    }
}

impl Config {
    /// Create config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)
                .map_err(|e| ConfigError::Parse(format!("Invalid JSON config: {}", e)))?,
            Format::Toml => toml::from_str(&content)
                .map_err(|e| ConfigError::Parse(format!("Invalid TOML config: {}", e)))?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(Error::invalid_setting("history.max_size", "must be > 0"));
        }

        if !self.clipboard.paste_offset.is_finite() {
            return Err(Error::invalid_setting(
                "clipboard.paste_offset",
                "must be a finite number",
            ));
        }

        let vp = &self.viewport;
        if !vp.min_zoom.is_finite() || vp.min_zoom <= 0.0 {
            return Err(Error::invalid_setting("viewport.min_zoom", "must be > 0"));
        }
        if !vp.max_zoom.is_finite() || vp.max_zoom <= vp.min_zoom {
            return Err(Error::invalid_setting(
                "viewport.max_zoom",
                "must be greater than viewport.min_zoom",
            ));
        }
        if vp.canvas_width <= 0.0 || vp.canvas_height <= 0.0 {
            return Err(Error::invalid_setting(
                "viewport.canvas_width",
                "canvas dimensions must be > 0",
            ));
        }
        if vp.fit_padding < 0.0 || vp.fit_padding * 2.0 >= vp.canvas_width.min(vp.canvas_height) {
            return Err(Error::invalid_setting(
                "viewport.fit_padding",
                "must be >= 0 and leave room on the canvas",
            ));
        }
        if !vp.default_fit.zoom.is_finite() || vp.default_fit.zoom <= 0.0 {
            return Err(Error::invalid_setting(
                "viewport.default_fit.zoom",
                "must be > 0",
            ));
        }

        if !self.tool.grid_size.is_finite() || self.tool.grid_size <= 0.0 {
            return Err(Error::invalid_setting("tool.grid_size", "must be > 0"));
        }

        if self.events.enable_history && self.events.max_history_size == 0 {
            return Err(Error::invalid_setting(
                "events.max_history_size",
                "must be > 0 when event history is enabled",
            ));
        }

        Ok(())
    }

    /// Event bus configuration derived from the event settings
    pub fn event_bus_config(&self) -> EventBusConfig {
        EventBusConfig {
            enable_history: self.events.enable_history,
            max_history_size: self.events.max_history_size,
            ..EventBusConfig::default()
        }
    }
}
