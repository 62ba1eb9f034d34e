//! History record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ElementMap;
use crate::id::HistoryId;

/// Kind of change a history record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryActionType {
    Add,
    Delete,
    Update,
    Move,
    Resize,
}

impl std::fmt::Display for HistoryActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Delete => write!(f, "delete"),
            Self::Update => write!(f, "update"),
            Self::Move => write!(f, "move"),
            Self::Resize => write!(f, "resize"),
        }
    }
}

/// One undoable transition of the element collection
///
/// Both snapshots are full, independent copies of the collection taken
/// immediately before and after the change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: HistoryId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub prev_state: ElementMap,
    pub next_state: ElementMap,
    #[serde(rename = "type")]
    pub action_type: HistoryActionType,
}

impl HistoryRecord {
    /// Build a record with a fresh id and the current time
    pub fn new(
        description: impl Into<String>,
        prev_state: ElementMap,
        next_state: ElementMap,
        action_type: HistoryActionType,
    ) -> Self {
        Self {
            id: HistoryId::generate(),
            timestamp: Utc::now(),
            description: description.into(),
            prev_state,
            next_state,
            action_type,
        }
    }
}
