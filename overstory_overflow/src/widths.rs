// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-position measured widths, possibly still incomplete.

use alloc::vec::Vec;

use crate::Scalar;

/// Measured widths of the candidate items, indexed by position.
///
/// The table is ephemeral derived state: it is rebuilt whenever the item set
/// or the indicator width changes, and read by the fitter. A slot is `None`
/// until its item has actually been measured; the fitter refuses to compute
/// a partition from an incomplete table rather than guessing (see
/// [`compute_partition`](crate::compute_partition)).
///
/// Widths are expected to be finite. NaNs (and infinities) are caught by
/// debug assertions so misuse does not go unnoticed; finite negative values
/// are clamped to zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidthTable<S: Scalar> {
    slots: Vec<Option<S>>,
}

impl<S: Scalar> WidthTable<S> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a table with `len` unmeasured slots.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        let mut table = Self::new();
        table.set_len(len);
        table
    }

    /// Number of items the table covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the table covers no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resizes the table; newly added slots are unmeasured.
    pub fn set_len(&mut self, len: usize) {
        self.slots.resize(len, None);
    }

    /// Rebuilds the table from a sequence of items and a measurement
    /// function, discarding all previous widths.
    ///
    /// This is the bulk path for "the item list changed": every item is
    /// measured in order, so the resulting table is complete. Hosts compose
    /// `measure` from the caller's rendering function and the off-screen
    /// measurement surface; see [`Measurer`](crate::Measurer).
    pub fn rebuild<T, I, F>(&mut self, items: I, mut measure: F)
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> S,
    {
        self.slots.clear();
        for item in items {
            let width = measure(&item);
            self.slots.push(Some(clamped(width)));
        }
    }

    /// Updates a single slot, growing the table if needed.
    pub fn set_width(&mut self, index: usize, width: S) {
        if index >= self.slots.len() {
            self.set_len(index + 1);
        }
        self.slots[index] = Some(clamped(width));
    }

    /// Returns the measured width at `index`, or `None` if unmeasured or out
    /// of range.
    #[must_use]
    pub fn width_of(&self, index: usize) -> Option<S> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns `true` if every covered item has a measured width.
    ///
    /// An empty table is complete: there is nothing left to measure.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Discards all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

fn clamped<S: Scalar>(width: S) -> S {
    // Widths are expected to be finite. Catch NaNs (and infinities) in
    // debug builds so misuse does not go unnoticed.
    debug_assert!(
        width.is_finite(),
        "WidthTable widths must be finite; got {width:?}"
    );
    // Clamp finite negative values to `0.0`.
    if width.is_sign_negative() {
        S::zero()
    } else {
        width
    }
}

#[cfg(test)]
mod tests {
    use super::WidthTable;

    #[test]
    fn rebuild_measures_every_item_in_order() {
        let mut table: WidthTable<f64> = WidthTable::new();
        table.rebuild(["aa", "bbbb", "c"], |s| s.len() as f64 * 10.0);

        assert_eq!(table.len(), 3);
        assert!(table.is_complete());
        assert_eq!(table.width_of(0), Some(20.0));
        assert_eq!(table.width_of(1), Some(40.0));
        assert_eq!(table.width_of(2), Some(10.0));
    }

    #[test]
    fn new_slots_are_unmeasured_until_set() {
        let mut table: WidthTable<f32> = WidthTable::with_len(3);
        assert!(!table.is_complete());
        assert_eq!(table.width_of(1), None);

        table.set_width(0, 50.0);
        table.set_width(1, 50.0);
        assert!(!table.is_complete());
        table.set_width(2, 50.0);
        assert!(table.is_complete());
    }

    #[test]
    fn set_width_grows_the_table() {
        let mut table: WidthTable<f64> = WidthTable::new();
        table.set_width(2, 30.0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.width_of(0), None);
        assert_eq!(table.width_of(2), Some(30.0));
    }

    #[test]
    fn negative_widths_clamp_to_zero() {
        let mut table: WidthTable<f64> = WidthTable::new();
        table.set_width(0, -5.0);
        assert_eq!(table.width_of(0), Some(0.0));
    }

    #[test]
    fn empty_table_is_complete() {
        let table: WidthTable<f64> = WidthTable::new();
        assert!(table.is_complete());
        assert!(table.is_empty());
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let table: WidthTable<f64> = WidthTable::with_len(1);
        assert_eq!(table.width_of(5), None);
    }
}
