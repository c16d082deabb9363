// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Editor: a plain-text editing core for multi-line inputs.
//!
//! The host owns the text widget, its keystrokes, and its timing policy;
//! this crate owns the editing semantics:
//!
//! - [`History`]: a linear snapshot stack with undo/redo.
//! - [`indent`]/[`unindent`]: Tab and Shift+Tab over a `(text, selection)`
//!   pair, with whole-line handling for multi-line selections.
//! - [`EditorBuffer`]: value, history, and indentation composed into one
//!   model with explicit snapshot points.
//!
//! ```
//! use overstory_editor::{EditorBuffer, Selection};
//!
//! let mut buffer = EditorBuffer::new("alpha\nbeta").with_tab_indentation(true);
//! let selection = buffer.tab(Selection::new(0, 10), false).unwrap();
//! assert_eq!(buffer.value(), "\talpha\n\tbeta");
//! assert_eq!(selection, Selection::new(1, 12));
//!
//! assert!(buffer.undo());
//! assert_eq!(buffer.value(), "alpha\nbeta");
//! ```
//!
//! Offsets throughout are byte offsets into the text and must lie on
//! `char` boundaries.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod buffer;
mod history;
mod indent;

pub use buffer::EditorBuffer;
pub use history::History;
pub use indent::{Edit, Selection, indent, unindent};
