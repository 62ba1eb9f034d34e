//! Persistence of the element collection.
//!
//! Documents are stored as JSON with a small versioned envelope around the
//! id-to-element map. Storage is best-effort: a missing document is not an
//! error, and failures are reported to the caller rather than retried.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use easel_core::{deep_clone, ElementMap, StorageError};

/// Document format version
const FILE_FORMAT_VERSION: u32 = 1;

/// Save/load of a whole element collection
pub trait DocumentStore {
    /// Persist the collection, replacing any previous document
    fn save(&self, elements: &ElementMap) -> Result<()>;

    /// Load the stored collection, or `None` when nothing was saved yet
    fn load(&self) -> Result<Option<ElementMap>>;
}

/// On-disk document envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    pub version: u32,
    pub metadata: DocumentMetadata,
    pub elements: ElementMap,
}

/// Document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl DocumentFile {
    pub fn new(elements: ElementMap) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION,
            metadata: DocumentMetadata {
                created: now,
                modified: now,
            },
            elements,
        }
    }
}

/// JSON document at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing(&self) -> Result<Option<DocumentFile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read document {}", self.path.display()))?;
        let document: DocumentFile =
            serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        if document.version > FILE_FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: document.version,
                supported: FILE_FORMAT_VERSION,
            }
            .into());
        }
        Ok(Some(document))
    }
}

impl DocumentStore for JsonFileStore {
    fn save(&self, elements: &ElementMap) -> Result<()> {
        let mut document = DocumentFile::new(elements.clone());
        // Keep the original creation time across saves
        if let Ok(Some(existing)) = self.read_existing() {
            document.metadata.created = existing.metadata.created;
        }

        let json = serde_json::to_string_pretty(&document).context("Failed to serialize document")?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .with_context(|| format!("Failed to write document {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace document {}", self.path.display()))?;

        tracing::debug!(
            "Saved {} element(s) to {}",
            elements.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<ElementMap>> {
        Ok(self.read_existing()?.map(|doc| doc.elements))
    }
}

/// In-memory document, for tests and headless sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<ElementMap>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&self, elements: &ElementMap) -> Result<()> {
        *self.saved.lock() = Some(deep_clone(elements));
        Ok(())
    }

    fn load(&self) -> Result<Option<ElementMap>> {
        Ok(self.saved.lock().clone())
    }
}
