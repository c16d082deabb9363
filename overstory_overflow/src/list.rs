// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns the width table and the cached partition.

use crate::{Partition, Scalar, WidthTable, compute_partition};

/// Controller for an adaptive overflow row.
///
/// This type:
/// - stores the container extent and the reserved indicator extent,
/// - owns the [`WidthTable`],
/// - caches the last computed [`Partition`] behind a dirty flag.
///
/// It does *not* know about any widget/view system or observation facility;
/// host frameworks (or [`AdaptiveItems`](crate::AdaptiveItems)) wrap this
/// and drive measurement and re-rendering.
///
/// When the width table is incomplete, [`partition`](Self::partition) keeps
/// serving the last computed split — initially the empty one — and leaves
/// the dirty flag set, so the recomputation happens on the next read after
/// measurements complete. Nothing is ever computed from partial widths.
#[derive(Clone, Debug)]
pub struct OverflowList<S: Scalar> {
    widths: WidthTable<S>,
    container_extent: S,
    indicator_extent: S,

    dirty: bool,
    last: Partition,
}

impl<S: Scalar> OverflowList<S> {
    /// Creates a controller with the given extents and no items.
    #[must_use]
    pub fn new(container_extent: S, indicator_extent: S) -> Self {
        Self {
            widths: WidthTable::new(),
            container_extent: container_extent.max(S::zero()),
            indicator_extent: indicator_extent.max(S::zero()),
            dirty: true,
            last: Partition::empty(),
        }
    }

    /// Returns a shared reference to the width table.
    #[must_use]
    pub fn widths(&self) -> &WidthTable<S> {
        &self.widths
    }

    /// Returns a mutable reference to the width table, marking the cached
    /// partition dirty.
    pub fn widths_mut(&mut self) -> &mut WidthTable<S> {
        self.dirty = true;
        &mut self.widths
    }

    /// Returns the current container extent.
    #[must_use]
    pub const fn container_extent(&self) -> S {
        self.container_extent
    }

    /// Sets the container extent.
    pub fn set_container_extent(&mut self, extent: S) {
        let extent = extent.max(S::zero());
        if extent != self.container_extent {
            self.container_extent = extent;
            self.dirty = true;
        }
    }

    /// Returns the reserved indicator extent.
    #[must_use]
    pub const fn indicator_extent(&self) -> S {
        self.indicator_extent
    }

    /// Sets the reserved indicator extent.
    pub fn set_indicator_extent(&mut self, extent: S) {
        let extent = extent.max(S::zero());
        if extent != self.indicator_extent {
            self.indicator_extent = extent;
            self.dirty = true;
        }
    }

    /// Marks the cached partition dirty without changing any input.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Returns `true` if the next [`partition`](Self::partition) read will
    /// attempt a recomputation.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Computes or returns the cached partition.
    #[must_use]
    pub fn partition(&mut self) -> Partition {
        if self.dirty {
            if let Some(partition) =
                compute_partition(&self.widths, self.container_extent, self.indicator_extent)
            {
                self.last = partition;
                self.dirty = false;
            }
            // Incomplete widths: keep the last split and stay dirty until
            // the next legitimate trigger completes the table.
        }
        self.last
    }

    /// Returns the last computed partition without recomputing.
    #[must_use]
    pub const fn last_partition(&self) -> Partition {
        self.last
    }
}
