// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change detection over a stream of box-size reports.

use kurbo::Size;

/// Remembers the last reported size and detects change.
///
/// Platform resize observers typically fire once per committed frame, but a
/// host gluing this crate to cruder sources (polling, per-pixel drag events)
/// may report far more often. `SizeTracker` collapses that stream: only a
/// report that differs from the previous one counts as a change.
///
/// The first report always counts as a change — before it, the tracked box
/// has no known size at all.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeTracker {
    last: Option<Size>,
}

impl SizeTracker {
    /// Creates a tracker with no known size.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records a report, returning `true` if the size actually changed.
    pub fn update(&mut self, size: Size) -> bool {
        if self.last == Some(size) {
            return false;
        }
        self.last = Some(size);
        true
    }

    /// Returns the last reported size, if any report has arrived.
    #[must_use]
    pub const fn last(&self) -> Option<Size> {
        self.last
    }

    /// Forgets the last report; the next one counts as a change again.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::SizeTracker;
    use kurbo::Size;

    #[test]
    fn first_report_counts_as_change() {
        let mut tracker = SizeTracker::new();
        assert!(tracker.last().is_none());
        assert!(tracker.update(Size::new(100.0, 20.0)));
        assert_eq!(tracker.last(), Some(Size::new(100.0, 20.0)));
    }

    #[test]
    fn identical_reports_coalesce() {
        let mut tracker = SizeTracker::new();
        assert!(tracker.update(Size::new(100.0, 20.0)));
        assert!(!tracker.update(Size::new(100.0, 20.0)));
        assert!(!tracker.update(Size::new(100.0, 20.0)));
        assert!(tracker.update(Size::new(99.0, 20.0)));
    }

    #[test]
    fn reset_forgets_the_last_report() {
        let mut tracker = SizeTracker::new();
        assert!(tracker.update(Size::new(100.0, 20.0)));
        tracker.reset();
        assert!(tracker.last().is_none());
        assert!(tracker.update(Size::new(100.0, 20.0)));
    }
}
