use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use easel::{
    default_config_path, init_logging, CanvasStore, Config, EventBus, EventFilter, JsonFileStore,
    KeyChord, ShortcutAction, BUILD_DATE, VERSION,
};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    document: Option<PathBuf>,
    version: bool,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--document" => {
                let path = args.next().context("--document needs a path")?;
                options.document = Some(PathBuf::from(path));
            }
            "--version" | "-V" => options.version = true,
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    let options = parse_args()?;
    if options.version {
        println!("easel {} ({})", VERSION, BUILD_DATE);
        return Ok(());
    }

    init_logging()?;

    let config_path = options.config.unwrap_or_else(default_config_path);
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;

    let bus = Arc::new(EventBus::with_config(config.event_bus_config()));
    bus.subscribe(EventFilter::All, |event| {
        tracing::debug!("{}", event.description());
    });

    let mut store = CanvasStore::with_config(bus, &config);
    let document = JsonFileStore::new(
        options
            .document
            .unwrap_or_else(|| config.storage.document_path.clone()),
    );

    if !store.load_from(&document)? {
        store.initialize_with_sample_data();
        store.clear_history();
    }
    tracing::info!(
        "Easel {} ready with {} element(s) from {}",
        VERSION,
        store.element_count(),
        document.path().display()
    );

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let Some(action) = KeyChord::parse(text).and_then(|chord| chord.resolve()) else {
            println!("{}: unbound", text);
            continue;
        };

        let changed = if action == ShortcutAction::Save {
            store.save_to(&document)?;
            true
        } else {
            store.execute_shortcut(action)
        };

        println!(
            "{} -> {}: {} ({} element(s), {} selected, zoom {:.2})",
            text,
            action,
            if changed { "applied" } else { "no change" },
            store.element_count(),
            store.selected_ids().len(),
            store.viewport().zoom
        );
    }

    if config.storage.autosave {
        store.save_to(&document)?;
        tracing::info!("Saved {} element(s)", store.element_count());
    }

    Ok(())
}
