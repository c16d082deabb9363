// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible/overflow split and the pure fitter that computes it.

use crate::{Scalar, WidthTable};

/// The visible/overflow split of an item list for the current constraints.
///
/// The visible set is always a contiguous prefix of the original order, so
/// the whole split is captured by one index: `items[..visible_end]` is
/// visible and `items[visible_end..]` overflows. Concatenating the two
/// halves reproduces the original list — nothing is reordered, duplicated,
/// or lost.
///
/// A `Partition` is derived state, recomputed deterministically from the
/// widths, the container extent, and the indicator extent; it carries no
/// hidden state of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// One past the last visible index (exclusive).
    pub visible_end: usize,
    /// Number of items the split was computed over.
    pub len: usize,
}

impl Partition {
    /// The split over an empty list.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            visible_end: 0,
            len: 0,
        }
    }

    /// Number of visible items.
    #[must_use]
    pub const fn visible_len(&self) -> usize {
        self.visible_end
    }

    /// Number of overflowing items.
    #[must_use]
    pub const fn overflow_len(&self) -> usize {
        self.len - self.visible_end
    }

    /// Returns `true` if any item overflows.
    ///
    /// When this is `false` the host renders no overflow control at all.
    #[must_use]
    pub const fn has_overflow(&self) -> bool {
        self.visible_end < self.len
    }

    /// Splits a slice of items into its visible prefix and overflow tail.
    ///
    /// The slice is expected to be the list the partition was computed over;
    /// a shorter slice is split at its own end rather than panicking.
    #[must_use]
    pub fn split<'a, T>(&self, items: &'a [T]) -> (&'a [T], &'a [T]) {
        items.split_at(self.visible_end.min(items.len()))
    }

    /// The visible prefix of `items`.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.split(items).0
    }

    /// The overflowing tail of `items`.
    #[must_use]
    pub fn overflow<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.split(items).1
    }
}

/// Computes the visible/overflow split for the given widths and extents.
///
/// A single greedy left-to-right pass, O(n). Accepting item `i` requires the
/// accumulated width plus `width(i)`, plus the reserved `indicator_extent`
/// *if any item remains after `i`* — the last item never reserves space for
/// an indicator it would not need. The first rejection sends that item and
/// everything after it to the overflow set.
///
/// Policy points the split must honor:
///
/// - An empty visible set is legal: if even the first item cannot fit, it
///   overflows too. A zero (or unmeasurable) container extent therefore
///   yields all-overflow, which is an ordinary outcome, not an error.
/// - An incomplete [`WidthTable`] yields `None`: the fitter never partially
///   computes from missing measurements. Callers keep their previous
///   partition and wait for the next legitimate trigger.
/// - The result is deterministic and idempotent in its inputs.
///
/// ```rust
/// use overstory_overflow::{WidthTable, compute_partition};
///
/// let mut widths: WidthTable<f64> = WidthTable::new();
/// widths.rebuild([50.0, 50.0, 50.0], |w| *w);
///
/// // Items 0 and 1 fit alongside the reserved indicator; item 2 would be
/// // last (no reserve) but 100 + 50 exceeds 140.
/// let partition = compute_partition(&widths, 140.0, 20.0).unwrap();
/// assert_eq!(partition.visible_len(), 2);
/// assert_eq!(partition.overflow_len(), 1);
/// ```
#[must_use]
pub fn compute_partition<S: Scalar>(
    widths: &WidthTable<S>,
    container_extent: S,
    indicator_extent: S,
) -> Option<Partition> {
    if !widths.is_complete() {
        // Fail-safe: never compute from partial measurements.
        return None;
    }

    let len = widths.len();
    let container = container_extent.max(S::zero());
    let indicator = indicator_extent.max(S::zero());

    let mut used = S::zero();
    let mut visible_end = 0;
    for index in 0..len {
        let width = widths.width_of(index)?;
        let has_remaining = index + 1 < len;
        let mut needed = used + width;
        if has_remaining {
            needed = needed + indicator;
        }
        if needed <= container {
            used = used + width;
            visible_end = index + 1;
        } else {
            // This item and everything after it overflow.
            break;
        }
    }

    Some(Partition { visible_end, len })
}

#[cfg(test)]
mod tests {
    use super::{Partition, compute_partition};
    use crate::WidthTable;
    use alloc::vec::Vec;

    fn widths(values: &[f64]) -> WidthTable<f64> {
        let mut table = WidthTable::new();
        table.rebuild(values.iter().copied(), |w| *w);
        table
    }

    #[test]
    fn last_item_does_not_reserve_indicator_space() {
        // After accepting items 0 and 1 (50 + 50 + 20 reserved ≤ 140), item
        // 2 is last and pays no reserve, but 100 + 50 > 140.
        let table = widths(&[50.0, 50.0, 50.0]);
        let partition = compute_partition(&table, 140.0, 20.0).unwrap();
        assert_eq!(partition.visible_len(), 2);
        assert_eq!(partition.overflow_len(), 1);
    }

    #[test]
    fn last_item_fits_exactly_without_reserve() {
        // 50 + 50 + 50 = 150 fits a 150 container only because the last
        // item is exempt from the 20-unit reserve.
        let table = widths(&[50.0, 50.0, 50.0]);
        let partition = compute_partition(&table, 150.0, 20.0).unwrap();
        assert_eq!(partition.visible_len(), 3);
        assert!(!partition.has_overflow());
    }

    #[test]
    fn everything_overflows_in_a_tiny_container() {
        let table = widths(&[50.0, 50.0, 50.0]);
        let partition = compute_partition(&table, 10.0, 20.0).unwrap();
        assert_eq!(partition.visible_len(), 0);
        assert_eq!(partition.overflow_len(), 3);
    }

    #[test]
    fn zero_container_extent_is_all_overflow_not_an_error() {
        let table = widths(&[1.0]);
        let partition = compute_partition(&table, 0.0, 20.0).unwrap();
        assert_eq!(partition.visible_len(), 0);
        assert_eq!(partition.overflow_len(), 1);
    }

    #[test]
    fn empty_input_yields_the_empty_partition() {
        let table = widths(&[]);
        let partition = compute_partition(&table, 500.0, 20.0).unwrap();
        assert_eq!(partition, Partition::empty());
        assert!(!partition.has_overflow());
    }

    #[test]
    fn incomplete_widths_yield_no_partition() {
        let mut table: WidthTable<f64> = WidthTable::with_len(3);
        table.set_width(0, 50.0);
        assert_eq!(compute_partition(&table, 500.0, 20.0), None);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let table = widths(&[30.0, 70.0, 40.0, 90.0]);
        let first = compute_partition(&table, 200.0, 25.0);
        let second = compute_partition(&table, 200.0, 25.0);
        assert_eq!(first, second);
    }

    #[test]
    fn visible_count_is_monotonic_in_container_extent() {
        let table = widths(&[40.0, 25.0, 80.0, 55.0, 10.0]);
        let mut previous = 0;
        for step in 0..=60 {
            let container = f64::from(step) * 5.0;
            let partition = compute_partition(&table, container, 20.0).unwrap();
            assert!(
                partition.visible_len() >= previous,
                "shrinking from {previous} visible at container {container}"
            );
            previous = partition.visible_len();
        }
    }

    #[test]
    fn split_preserves_order_and_totality() {
        let table = widths(&[50.0, 50.0, 50.0, 50.0]);
        let partition = compute_partition(&table, 140.0, 20.0).unwrap();

        let items = ["a", "b", "c", "d"];
        let (visible, overflow) = partition.split(&items);
        assert_eq!(visible.len() + overflow.len(), items.len());

        let recombined: Vec<&str> = visible.iter().chain(overflow.iter()).copied().collect();
        assert_eq!(recombined, items);
    }

    #[test]
    fn split_tolerates_a_shorter_slice() {
        let partition = Partition {
            visible_end: 3,
            len: 5,
        };
        let items = ["a", "b"];
        let (visible, overflow) = partition.split(&items);
        assert_eq!(visible, ["a", "b"]);
        assert!(overflow.is_empty());
    }

    #[test]
    fn indicator_reserve_can_push_an_item_out() {
        // Both items fit without a reserve (60 + 60 = 120 ≤ 130), but the
        // first must also reserve 20 while the second remains: 60 + 20 ≤ 130
        // holds, then 120 is within 130 for the final item. Shrink to 135 →
        // still fine; shrink the indicator's effect by widening it instead.
        let table = widths(&[60.0, 60.0]);
        let fit = compute_partition(&table, 130.0, 20.0).unwrap();
        assert_eq!(fit.visible_len(), 2);

        // A 75-unit indicator makes accepting item 0 require 135 > 130, so
        // everything overflows even though the items alone would fit.
        let cramped = compute_partition(&table, 130.0, 75.0).unwrap();
        assert_eq!(cramped.visible_len(), 0);
        assert_eq!(cramped.overflow_len(), 2);
    }
}
