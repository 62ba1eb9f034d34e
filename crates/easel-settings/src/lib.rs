//! Easel Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;

pub use config::{
    default_config_dir, default_config_path, ClipboardSettings, Config, EventSettings,
    HistorySettings, StorageSettings, ToolSettings, ViewportSettings,
};
