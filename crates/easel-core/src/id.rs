//! Identifier generation.
//!
//! Element and history ids are opaque strings of the form
//! `<prefix>_<unix-millis>_<random hex>`. The millisecond prefix keeps ids
//! roughly creation-ordered when they are used as map keys; the uuid suffix
//! makes collisions within one process practically impossible.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ELEMENT_PREFIX: &str = "el";
const HISTORY_PREFIX: &str = "hist";

fn generate(prefix: &str) -> String {
    format!(
        "{}_{}_{}",
        prefix,
        chrono::Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

/// Unique identifier of a canvas element
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a fresh element id
    pub fn generate() -> Self {
        Self(generate(ELEMENT_PREFIX))
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Unique identifier of a history record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryId(String);

impl HistoryId {
    /// Generate a fresh history id
    pub fn generate() -> Self {
        Self(generate(HISTORY_PREFIX))
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HistoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a fresh element id
pub fn new_element_id() -> ElementId {
    ElementId::generate()
}

/// Generate a fresh history id
pub fn new_history_id() -> HistoryId {
    HistoryId::generate()
}
