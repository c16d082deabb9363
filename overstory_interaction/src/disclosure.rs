// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored disclosure menu state for overflow indicators.

use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Outcome of routing a pointer press through a [`Disclosure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The press hit the trigger; the menu toggled to the contained state.
    Toggled(bool),
    /// The press hit the entry at this index; the menu closed.
    Selected(usize),
    /// The press landed inside the open panel but on no entry.
    InsidePanel,
    /// The press landed outside panel and trigger; the menu closed.
    DismissedOutside,
    /// The menu was closed and the press hit neither trigger nor panel.
    Ignored,
}

/// An anchored menu that opens from an overflow indicator.
///
/// The host owns the real geometry: it positions the trigger (the "More"
/// indicator), and when the menu is open it lays out the panel and one rect
/// per entry, reporting all of them here. `Disclosure` then routes pointer
/// presses:
///
/// - a press on the trigger toggles the menu,
/// - a press on an entry selects it and closes the menu,
/// - a press elsewhere inside the panel is absorbed,
/// - any other press dismisses the menu.
///
/// Selection reports the entry's position within the menu. The overflow
/// partition pins entries to overflowed items, so the host maps the position
/// back to an item by offsetting with the partition's visible count.
#[derive(Clone, Debug, Default)]
pub struct Disclosure {
    open: bool,
    trigger: Rect,
    panel: Rect,
    entries: SmallVec<[Rect; 8]>,
}

impl Disclosure {
    /// Creates a closed menu with zero geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the trigger rect.
    #[must_use]
    pub const fn trigger(&self) -> Rect {
        self.trigger
    }

    /// Returns the panel rect.
    #[must_use]
    pub const fn panel(&self) -> Rect {
        self.panel
    }

    /// Number of entry rects currently reported.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Updates the trigger's rect.
    pub fn set_trigger(&mut self, trigger: Rect) {
        self.trigger = trigger;
    }

    /// Replaces the panel rect and the per-entry rects.
    ///
    /// Entries are in menu order, top to bottom. Rects wholly or partly
    /// outside the panel still hit; the host is expected to keep them
    /// inside.
    pub fn set_panel(&mut self, panel: Rect, entries: impl IntoIterator<Item = Rect>) {
        self.panel = panel;
        self.entries.clear();
        self.entries.extend(entries);
    }

    /// Toggles the menu, returning the new state.
    ///
    /// Toggling closed drops the panel geometry, as [`close`](Self::close)
    /// does.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
        self.open
    }

    /// Opens the menu.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the menu and drops the panel geometry.
    ///
    /// The trigger rect is kept; it belongs to the indicator, which stays
    /// mounted while the menu is closed.
    pub fn close(&mut self) {
        self.open = false;
        self.panel = Rect::ZERO;
        self.entries.clear();
    }

    /// Routes a pointer press and returns what it did.
    ///
    /// The trigger wins over the panel when they overlap, so a press on the
    /// indicator always toggles rather than selecting an entry beneath it.
    pub fn on_pointer_down(&mut self, position: Point) -> PressOutcome {
        if self.trigger.contains(position) {
            return PressOutcome::Toggled(self.toggle());
        }
        if !self.open {
            return PressOutcome::Ignored;
        }
        if self.panel.contains(position) {
            let hit = self
                .entries
                .iter()
                .position(|entry| entry.contains(position));
            return match hit {
                Some(index) => {
                    self.close();
                    PressOutcome::Selected(index)
                }
                None => PressOutcome::InsidePanel,
            };
        }
        self.close();
        PressOutcome::DismissedOutside
    }

    /// Selects an entry directly (keyboard activation), closing the menu.
    ///
    /// Returns `false` if the menu is closed or the index is out of range,
    /// in which case nothing changes.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.open || index >= self.entries.len() {
            return false;
        }
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Disclosure, PressOutcome};
    use kurbo::{Point, Rect};

    fn open_menu() -> Disclosure {
        let mut menu = Disclosure::new();
        menu.set_trigger(Rect::new(200.0, 0.0, 240.0, 24.0));
        menu.open();
        menu.set_panel(
            Rect::new(160.0, 24.0, 240.0, 96.0),
            [
                Rect::new(160.0, 24.0, 240.0, 48.0),
                Rect::new(160.0, 48.0, 240.0, 72.0),
                Rect::new(160.0, 72.0, 240.0, 96.0),
            ],
        );
        menu
    }

    #[test]
    fn trigger_press_toggles_both_ways() {
        let mut menu = Disclosure::new();
        menu.set_trigger(Rect::new(200.0, 0.0, 240.0, 24.0));

        let inside = Point::new(220.0, 12.0);
        assert_eq!(menu.on_pointer_down(inside), PressOutcome::Toggled(true));
        assert!(menu.is_open());
        assert_eq!(menu.on_pointer_down(inside), PressOutcome::Toggled(false));
        assert!(!menu.is_open());
    }

    #[test]
    fn closed_menu_ignores_other_presses() {
        let mut menu = Disclosure::new();
        menu.set_trigger(Rect::new(200.0, 0.0, 240.0, 24.0));

        assert_eq!(
            menu.on_pointer_down(Point::new(10.0, 10.0)),
            PressOutcome::Ignored
        );
    }

    #[test]
    fn entry_press_selects_and_closes() {
        let mut menu = open_menu();

        let outcome = menu.on_pointer_down(Point::new(200.0, 60.0));
        assert_eq!(outcome, PressOutcome::Selected(1));
        assert!(!menu.is_open());
        assert_eq!(menu.entry_count(), 0);
    }

    #[test]
    fn panel_press_between_entries_is_absorbed() {
        let mut menu = open_menu();
        // Shrink the entries so the panel has a dead strip at the bottom.
        menu.set_panel(
            Rect::new(160.0, 24.0, 240.0, 96.0),
            [Rect::new(160.0, 24.0, 240.0, 48.0)],
        );

        let outcome = menu.on_pointer_down(Point::new(200.0, 80.0));
        assert_eq!(outcome, PressOutcome::InsidePanel);
        assert!(menu.is_open());
    }

    #[test]
    fn outside_press_dismisses() {
        let mut menu = open_menu();

        let outcome = menu.on_pointer_down(Point::new(10.0, 200.0));
        assert_eq!(outcome, PressOutcome::DismissedOutside);
        assert!(!menu.is_open());

        // The same press against the now-closed menu does nothing.
        let outcome = menu.on_pointer_down(Point::new(10.0, 200.0));
        assert_eq!(outcome, PressOutcome::Ignored);
    }

    #[test]
    fn trigger_wins_over_overlapping_panel() {
        let mut menu = open_menu();
        // Panel extended up underneath the trigger.
        menu.set_panel(
            Rect::new(160.0, 0.0, 240.0, 96.0),
            [Rect::new(160.0, 0.0, 240.0, 48.0)],
        );

        let outcome = menu.on_pointer_down(Point::new(220.0, 12.0));
        assert_eq!(outcome, PressOutcome::Toggled(false));
    }

    #[test]
    fn keyboard_select_respects_bounds_and_state() {
        let mut menu = open_menu();
        assert!(!menu.select(3));
        assert!(menu.is_open());

        assert!(menu.select(2));
        assert!(!menu.is_open());

        // Closed menu rejects selection entirely.
        assert!(!menu.select(0));
    }

    #[test]
    fn close_keeps_trigger_geometry() {
        let mut menu = open_menu();
        menu.close();

        assert_eq!(menu.trigger(), Rect::new(200.0, 0.0, 240.0, 24.0));
        assert_eq!(menu.panel(), Rect::ZERO);
    }
}
