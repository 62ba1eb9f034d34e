//! Undo/redo history over full-state snapshots.
//!
//! The timeline is a bounded, linear sequence of [`HistoryRecord`]s with a
//! cursor on the record describing the most recent transition that is
//! currently applied. Undo reverts that transition and steps back; redo
//! steps forward and re-applies the next one. Recording a new transition
//! after an undo discards everything ahead of the cursor.
//!
//! The record at index 0 is the oldest retained transition and cannot be
//! undone, since there is nothing older to step back onto.

use std::collections::VecDeque;
use std::sync::Arc;

use easel_core::{
    deep_clone, CanvasEvent, ElementMap, EventBus, HistoryActionType, HistoryEvent,
    HistoryRecord,
};

/// Default number of retained history records
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Bounded linear undo/redo timeline
pub struct UndoRedoManager {
    records: VecDeque<HistoryRecord>,
    /// `None` while the timeline is empty
    cursor: Option<usize>,
    max_size: usize,
    bus: Arc<EventBus>,
}

impl UndoRedoManager {
    /// Create an empty history holding at most `max_size` records
    pub fn new(max_size: usize, bus: Arc<EventBus>) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.max(1)),
            cursor: None,
            max_size: max_size.max(1),
            bus,
        }
    }

    /// Record a transition from `prev_state` to `next_state`
    ///
    /// Both states are deep-copied. Records ahead of the cursor are
    /// discarded, the oldest record is evicted when over capacity, and the
    /// cursor always ends on the new record.
    pub fn push_history(
        &mut self,
        description: impl Into<String>,
        prev_state: &ElementMap,
        next_state: &ElementMap,
        action_type: HistoryActionType,
    ) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.records.len() {
            tracing::debug!(
                "Discarding {} redo record(s)",
                self.records.len() - keep
            );
            self.records.truncate(keep);
        }

        let record = HistoryRecord::new(
            description,
            deep_clone(prev_state),
            deep_clone(next_state),
            action_type,
        );
        self.records.push_back(record);

        while self.records.len() > self.max_size {
            if let Some(evicted) = self.records.pop_front() {
                tracing::debug!("Evicted history record {}", evicted.id);
            }
        }
        self.cursor = Some(self.records.len() - 1);

        if let Some(record) = self.records.back() {
            tracing::debug!("Recorded {} ({})", record.description, record.action_type);
            self.bus
                .publish(CanvasEvent::History(HistoryEvent::RecordAdded {
                    record: record.clone(),
                }));
        }
        self.notify_changed();
    }

    /// Step back one transition
    ///
    /// Returns the state preceding the transition under the cursor, or
    /// `None` when nothing can be undone. The caller copies it before use.
    pub fn undo(&mut self) -> Option<&ElementMap> {
        if !self.can_undo() {
            return None;
        }
        let current = self.cursor?;
        self.cursor = Some(current - 1);
        self.notify_changed();
        self.records.get(current).map(|r| &r.prev_state)
    }

    /// Step forward one transition
    ///
    /// Returns the state following the re-applied transition, or `None` when
    /// nothing can be redone.
    pub fn redo(&mut self) -> Option<&ElementMap> {
        if !self.can_redo() {
            return None;
        }
        let next = self.cursor? + 1;
        self.cursor = Some(next);
        self.notify_changed();
        self.records.get(next).map(|r| &r.next_state)
    }

    /// Drop every record
    pub fn clear_history(&mut self) {
        self.records.clear();
        self.cursor = None;
        self.notify_changed();
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.records.len())
    }

    /// Cursor position, `-1` when the timeline is empty
    pub fn current_index(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    /// Record under the cursor
    pub fn current_record(&self) -> Option<&HistoryRecord> {
        self.cursor.and_then(|c| self.records.get(c))
    }

    /// All retained records, oldest first
    pub fn records(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn notify_changed(&self) {
        self.bus.publish(CanvasEvent::History(HistoryEvent::Changed {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }));
    }
}

impl std::fmt::Debug for UndoRedoManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoRedoManager")
            .field("records", &self.records.len())
            .field("cursor", &self.current_index())
            .field("max_size", &self.max_size)
            .finish()
    }
}
