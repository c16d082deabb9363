// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of causes that schedule a relayout pass.

use bitflags::bitflags;

bitflags! {
    /// Causes for recomputing an adaptive layout.
    ///
    /// Any combination noted before a drain coalesces into a single
    /// recomputation; the flags tell the component *why* it is recomputing,
    /// not how many times.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Triggers: u8 {
        /// The visible container's box size changed.
        const CONTAINER_RESIZED = 1 << 0;
        /// The off-screen measurement surface's content size changed
        /// (item rendering changed intrinsic size independent of the list).
        const MEASUREMENT_RESIZED = 1 << 1;
        /// The item list was replaced or edited.
        const ITEMS_CHANGED = 1 << 2;
        /// The overflow indicator's width became known.
        const INDICATOR_MEASURED = 1 << 3;
        /// One-shot pass after mount, once layout has settled.
        const INITIAL = 1 << 4;
    }
}
