// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full component loop: items → widths → partition, reactively.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Size;
use overstory_observe::{Observer, Triggers, Watch, WatchTarget};

use crate::{IntrinsicMeasure, Measurer, OverflowList, Partition, Scalar};

/// An adaptive overflow row bound to a host measurement surface.
///
/// `AdaptiveItems` wires the [`Measurer`], the [`OverflowList`] controller,
/// and an [`Observer`] into the complete data flow: the item list feeds the
/// width table, the fitter produces the partition, and resize reports or
/// list changes re-enter the loop. Recomputation is poll/commit style: the
/// host forwards raw notifications as they arrive and calls
/// [`commit`](Self::commit) once per scheduling turn; however many triggers
/// accumulated, the partition is recomputed at most once.
///
/// Construction measures the indicator width once (the host surface is
/// available by then), registers one watch per observed box, and arms the
/// deferred initial pass, so the first `commit` computes even if no platform
/// event has fired yet. [`release`](Self::release) tears all of that down;
/// afterwards no watch and no pending pass remains.
#[derive(Debug)]
pub struct AdaptiveItems<H: IntrinsicMeasure> {
    measurer: Measurer<H>,
    list: OverflowList<H::Scalar>,
    observer: Observer,
    container_watch: Watch,
    measurement_watch: Watch,
    /// Rendered content of the current items, retained so a measurement
    /// resize can re-measure without the host re-supplying the list.
    contents: Vec<String>,
}

impl<H: IntrinsicMeasure> AdaptiveItems<H> {
    /// Creates the component with the default indicator slack.
    pub fn new(host: H) -> Self {
        Self::with_measurer(Measurer::new(host))
    }

    /// Creates the component with a custom indicator slack.
    pub fn with_indicator_slack(host: H, indicator_slack: H::Scalar) -> Self {
        Self::with_measurer(Measurer::with_indicator_slack(host, indicator_slack))
    }

    fn with_measurer(mut measurer: Measurer<H>) -> Self {
        let indicator = measurer.indicator_width();

        let mut observer = Observer::new();
        let container_watch = observer.watch(WatchTarget::Container);
        let measurement_watch = observer.watch(WatchTarget::Measurement);
        observer.note(Triggers::INDICATOR_MEASURED);
        observer.arm_initial();

        Self {
            measurer,
            list: OverflowList::new(H::Scalar::zero(), indicator),
            observer,
            container_watch,
            measurement_watch,
            contents: Vec::new(),
        }
    }

    /// Measures the retained contents through the host surface, rebuilding
    /// the width table.
    fn remeasure(&mut self) {
        self.measurer
            .measure_items(&self.contents, String::clone, self.list.widths_mut());
    }

    /// Replaces the item list, measuring every item through `render` on the
    /// host surface.
    ///
    /// `render` must be pure with respect to layout: the same item produces
    /// the same intrinsic width. The rendered contents are retained so a
    /// later measurement resize can re-measure them in place.
    pub fn set_items<T, F>(&mut self, items: &[T], mut render: F)
    where
        F: FnMut(&T) -> String,
    {
        self.contents = items.iter().map(&mut render).collect();
        self.remeasure();
        self.observer.note(Triggers::ITEMS_CHANGED);
    }

    /// Reports the visible container's box size.
    ///
    /// Returns `true` if the size actually changed (identical reports
    /// coalesce away). The container's width becomes the fitting budget.
    pub fn container_resized(&mut self, size: Size) -> bool {
        if !self.observer.report_size(self.container_watch, size) {
            return false;
        }
        self.list
            .set_container_extent(H::Scalar::from_f64(size.width));
        true
    }

    /// Reports the off-screen measurement surface's content size.
    ///
    /// This covers item renderings changing intrinsic size independent of
    /// the list (for example a font swap). The next
    /// [`commit`](Self::commit) re-measures the retained contents through
    /// the host before refitting, so the new widths take effect without the
    /// host re-supplying the list.
    pub fn measurement_resized(&mut self, size: Size) -> bool {
        self.observer.report_size(self.measurement_watch, size)
    }

    /// Performs this turn's single recomputation, if anything triggered one.
    ///
    /// Drains every pending trigger; a measurement resize first re-measures
    /// the retained contents so the refit sees fresh widths. If any trigger
    /// was noted, the partition is recomputed (unless measurements are still
    /// incomplete, in which case the previous partition is kept and the work
    /// stays pending). Returns the current partition either way.
    pub fn commit(&mut self) -> Partition {
        let triggers = self.observer.drain();
        if triggers.contains(Triggers::MEASUREMENT_RESIZED) {
            self.remeasure();
        }
        if !triggers.is_empty() {
            self.list.invalidate();
        }
        self.list.partition()
    }

    /// Returns the last computed partition without recomputing.
    #[must_use]
    pub const fn partition(&self) -> Partition {
        self.list.last_partition()
    }

    /// Returns `true` if the next [`commit`](Self::commit) has work to do.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.observer.has_pending() || self.list.is_dirty()
    }

    /// Returns the reserved indicator extent in use.
    #[must_use]
    pub const fn indicator_extent(&self) -> H::Scalar {
        self.list.indicator_extent()
    }

    /// Returns a shared reference to the underlying controller.
    #[must_use]
    pub const fn list(&self) -> &OverflowList<H::Scalar> {
        &self.list
    }

    /// Returns a shared reference to the measurer.
    #[must_use]
    pub const fn measurer(&self) -> &Measurer<H> {
        &self.measurer
    }

    /// Returns a mutable reference to the host measurement surface.
    pub fn host_mut(&mut self) -> &mut H {
        self.measurer.host_mut()
    }

    /// Number of live observation registrations (two while mounted, zero
    /// after [`release`](Self::release)).
    #[must_use]
    pub fn active_watches(&self) -> usize {
        self.observer.active_watches()
    }

    /// Tears down all observation state: releases both watches, discards
    /// pending triggers, and disarms any not-yet-run initial pass.
    ///
    /// The component keeps serving its last partition afterwards, but no
    /// subscription or deferred computation outlives the teardown.
    pub fn release(&mut self) {
        self.observer.release();
    }
}
