// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The caller-facing item record.

use alloc::string::String;

/// One candidate entry in an adaptive list.
///
/// The layout engine itself consumes only per-position widths; `Item` is the
/// record hosts typically carry alongside them — a key that is stable and
/// unique among siblings, plus the text the rendering function displays.
/// Items are owned by the caller and never mutated by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Stable key, unique among siblings.
    pub id: String,
    /// Displayable text.
    pub label: String,
}

impl Item {
    /// Creates an item from anything string-like.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
