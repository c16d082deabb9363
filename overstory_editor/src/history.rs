// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear snapshot history with undo/redo.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// A linear stack of text snapshots with a cursor.
///
/// The cursor points at the snapshot currently shown. Recording a new
/// snapshot truncates any redo tail beyond the cursor; recording a value
/// identical to the current snapshot is a no-op, so callers can record
/// freely without polluting the stack.
///
/// The host decides when to record: typically debounced during typing and
/// immediately after structural edits such as indentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<String>,
    cursor: usize,
}

impl History {
    /// Creates a history seeded with the initial text.
    ///
    /// The seed is undo's floor; [`undo`](Self::undo) never goes past it.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            snapshots: vec![initial.into()],
            cursor: 0,
        }
    }

    /// Records a snapshot, dropping any redo tail.
    ///
    /// Returns `true` if the snapshot was pushed, `false` if it matched the
    /// current one and was skipped.
    pub fn record(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        self.snapshots.truncate(self.cursor + 1);
        if self.snapshots.last().is_some_and(|last| *last == value) {
            return false;
        }
        self.snapshots.push(value);
        self.cursor = self.snapshots.len() - 1;
        true
    }

    /// Steps back one snapshot, returning it.
    pub fn undo(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Steps forward one snapshot, returning it.
    pub fn redo(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Returns `true` if there is a snapshot to undo to.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns `true` if there is a snapshot to redo to.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// The snapshot the cursor currently points at.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.snapshots[self.cursor]
    }

    /// Number of snapshots held, redo tail included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; the seed snapshot is never dropped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
