//! # Easel
//!
//! State engine for a canvas editor. The front end renders and forwards
//! input; everything that decides what the document looks like lives here.
//!
//! ## Architecture
//!
//! Easel is organized as a workspace with multiple crates:
//!
//! 1. **easel-core** - Element model, identifiers, snapshots, errors, event bus
//! 2. **easel-settings** - Configuration file handling
//! 3. **easel-editor** - Canvas store, history, clipboard, tools, shortcuts, storage
//! 4. **easel** - Headless binary that drives a store from key chords
//!
//! ## Features
//!
//! - **Element Store**: create, update, delete, selection, z-order layering
//! - **Undo/Redo**: bounded snapshot history with a movable cursor
//! - **Clipboard**: copy, cut and cascading paste
//! - **Event Bus**: typed events delivered synchronously to subscribers
//! - **Tools**: active tool, gesture flags and grid snapping
//! - **Keyboard Surface**: platform-neutral shortcut resolution

pub use easel_core::{data, event_bus};
pub use easel_core::{
    CanvasEvent, Element, ElementId, ElementMap, ElementUpdate, Error, EventBus, EventCategory,
    EventFilter, NewElement, Result, ToolKind, ViewportState, ViewportUpdate,
};

pub use easel_editor::{
    CanvasStore, Clipboard, DocumentStore, JsonFileStore, KeyChord, MemoryStore, ShortcutAction,
    ShortcutMap, ToolState, UndoRedoManager,
};

pub use easel_settings::{default_config_path, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty output on stderr, or JSON lines when `EASEL_LOG_FORMAT=json`
/// - RUST_LOG environment variable support
///
/// Stdout is left to the command loop.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let json = std::env::var("EASEL_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
