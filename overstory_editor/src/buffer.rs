// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value, history, and indentation composed into one editing model.

use alloc::string::String;

use crate::history::History;
use crate::indent::{Selection, indent, unindent};

/// A multi-line text value with undo history and tab indentation.
///
/// The host forwards text changes and Tab presses; the buffer keeps the
/// value and history consistent:
///
/// - [`replace`](Self::replace) updates the value without recording, so
///   typing can be snapshotted on the host's debounce via
///   [`snapshot`](Self::snapshot);
/// - [`tab`](Self::tab) applies indentation and snapshots immediately,
///   since a structural edit should be one undo step;
/// - [`undo`](Self::undo)/[`redo`](Self::redo) swap the value from
///   history.
///
/// Tab handling is off by default; hosts that want the key for focus
/// traversal simply never enable it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorBuffer {
    value: String,
    history: History,
    tab_indentation: bool,
    visual_tab_size: usize,
}

impl EditorBuffer {
    /// Creates a buffer over the initial text.
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        Self {
            history: History::new(value.clone()),
            value,
            tab_indentation: false,
            visual_tab_size: 4,
        }
    }

    /// Enables or disables Tab indentation handling.
    #[must_use]
    pub const fn with_tab_indentation(mut self, enabled: bool) -> Self {
        self.tab_indentation = enabled;
        self
    }

    /// Sets how many leading spaces Shift+Tab treats as one indent level.
    ///
    /// Clamped to at least one.
    #[must_use]
    pub const fn with_visual_tab_size(mut self, size: usize) -> Self {
        self.visual_tab_size = if size == 0 { 1 } else { size };
        self
    }

    /// The current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether Tab indentation handling is enabled.
    #[must_use]
    pub const fn tab_indentation(&self) -> bool {
        self.tab_indentation
    }

    /// Replaces the text without recording a snapshot.
    pub fn replace(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Records the current text as an undo step.
    ///
    /// Returns `false` if it matched the latest snapshot.
    pub fn snapshot(&mut self) -> bool {
        self.history.record(self.value.clone())
    }

    /// Handles a Tab press over the given selection.
    ///
    /// With `shift` unset the selection indents; with it set it unindents.
    /// The edit is applied to the value and snapshotted immediately.
    /// Returns the selection after the edit, or `None` when Tab handling is
    /// disabled and the host should let the key through.
    pub fn tab(&mut self, selection: Selection, shift: bool) -> Option<Selection> {
        if !self.tab_indentation {
            return None;
        }
        let edit = if shift {
            unindent(&self.value, selection, self.visual_tab_size)
        } else {
            indent(&self.value, selection)
        };
        self.value = edit.text;
        self.snapshot();
        Some(edit.selection)
    }

    /// Steps the value back one snapshot. Returns `false` at the floor.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.value = previous.into();
                true
            }
            None => false,
        }
    }

    /// Steps the value forward one snapshot. Returns `false` at the tip.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.value = next.into();
                true
            }
            None => false,
        }
    }

    /// Returns `true` if undo has somewhere to go.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if redo has somewhere to go.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::new("")
    }
}
