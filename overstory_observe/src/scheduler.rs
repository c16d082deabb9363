// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger accumulation with batch drains and a one-shot initial pass.

use crate::Triggers;

/// Accumulates relayout triggers and drains them as a single batch.
///
/// Hosts note triggers as platform events arrive and call [`drain`] once per
/// scheduling turn; however many triggers accumulated, the drain returns them
/// all at once so the component recomputes exactly once. This mirrors the
/// batched update-then-commit shape used elsewhere in this workspace.
///
/// The scheduler also carries the deferred initial pass: [`arm_initial`] is
/// called at mount, and the *next* drain includes [`Triggers::INITIAL`] even
/// if no platform event has fired yet — the component must compute once
/// after layout has settled, without busy-polling. The armed pass is a
/// one-shot and is disarmed by drain and by [`reset`], so no pending initial
/// computation can outlive the component.
///
/// [`drain`]: RelayoutScheduler::drain
/// [`arm_initial`]: RelayoutScheduler::arm_initial
/// [`reset`]: RelayoutScheduler::reset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelayoutScheduler {
    pending: Triggers,
    initial_armed: bool,
}

impl RelayoutScheduler {
    /// Creates an idle scheduler with no armed initial pass.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Triggers::empty(),
            initial_armed: false,
        }
    }

    /// Notes triggers for the next drain.
    pub fn note(&mut self, triggers: Triggers) {
        self.pending |= triggers;
    }

    /// Arms the one-shot initial pass (call at mount).
    pub fn arm_initial(&mut self) {
        self.initial_armed = true;
    }

    /// Returns `true` if the next drain would be non-empty.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        !self.pending.is_empty() || self.initial_armed
    }

    /// Takes every pending trigger, disarming the initial pass if armed.
    ///
    /// An empty result means there is nothing to recompute this turn.
    pub fn drain(&mut self) -> Triggers {
        let mut taken = self.pending;
        self.pending = Triggers::empty();
        if self.initial_armed {
            self.initial_armed = false;
            taken |= Triggers::INITIAL;
        }
        taken
    }

    /// Discards pending triggers and disarms the initial pass (teardown).
    pub fn reset(&mut self) {
        self.pending = Triggers::empty();
        self.initial_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::RelayoutScheduler;
    use crate::Triggers;

    #[test]
    fn triggers_coalesce_into_one_drain() {
        let mut scheduler = RelayoutScheduler::new();
        scheduler.note(Triggers::CONTAINER_RESIZED);
        scheduler.note(Triggers::CONTAINER_RESIZED);
        scheduler.note(Triggers::ITEMS_CHANGED);

        let taken = scheduler.drain();
        assert_eq!(taken, Triggers::CONTAINER_RESIZED | Triggers::ITEMS_CHANGED);
        // Nothing left: one recomputation per turn.
        assert!(scheduler.drain().is_empty());
    }

    #[test]
    fn initial_pass_is_one_shot() {
        let mut scheduler = RelayoutScheduler::new();
        scheduler.arm_initial();
        assert!(scheduler.has_pending());

        assert_eq!(scheduler.drain(), Triggers::INITIAL);
        // Drained once; it never fires again on its own.
        assert!(scheduler.drain().is_empty());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn initial_pass_joins_other_triggers() {
        let mut scheduler = RelayoutScheduler::new();
        scheduler.arm_initial();
        scheduler.note(Triggers::INDICATOR_MEASURED);

        let taken = scheduler.drain();
        assert!(taken.contains(Triggers::INITIAL));
        assert!(taken.contains(Triggers::INDICATOR_MEASURED));
    }

    #[test]
    fn reset_disarms_everything() {
        let mut scheduler = RelayoutScheduler::new();
        scheduler.arm_initial();
        scheduler.note(Triggers::CONTAINER_RESIZED);
        scheduler.reset();

        assert!(!scheduler.has_pending());
        assert!(scheduler.drain().is_empty());
    }
}
