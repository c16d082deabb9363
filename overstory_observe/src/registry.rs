// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Watch registry: routes deduplicated size reports to relayout triggers.

use hashbrown::HashMap;
use kurbo::Size;

use crate::{RelayoutScheduler, SizeTracker, Triggers};

/// What a size watch observes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchTarget {
    /// The visible container whose box size constrains the layout.
    Container,
    /// The off-screen measurement surface holding every candidate item.
    Measurement,
}

impl WatchTarget {
    const fn trigger(self) -> Triggers {
        match self {
            Self::Container => Triggers::CONTAINER_RESIZED,
            Self::Measurement => Triggers::MEASUREMENT_RESIZED,
        }
    }
}

/// Handle of an active watch registration.
///
/// Watches are released explicitly via [`Observer::unwatch`] (or wholesale
/// via [`Observer::release`]); a released handle stays inert — reports
/// against it are ignored rather than misrouted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Watch(u64);

#[derive(Clone, Debug)]
struct WatchSlot {
    target: WatchTarget,
    tracker: SizeTracker,
}

/// Registry of size watches feeding a [`RelayoutScheduler`].
///
/// This is the platform-agnostic core of the component's observer: the host
/// registers one watch per observed box, forwards raw resize notifications
/// through [`report_size`], and notes list/indicator changes directly. All
/// causes meet in one scheduler, so a single [`drain`] per turn yields a
/// single recomputation regardless of how many events arrived.
///
/// [`report_size`]: Observer::report_size
/// [`drain`]: Observer::drain
#[derive(Clone, Debug, Default)]
pub struct Observer {
    watches: HashMap<u64, WatchSlot>,
    next_id: u64,
    scheduler: RelayoutScheduler,
}

impl Observer {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            watches: HashMap::new(),
            next_id: 0,
            scheduler: RelayoutScheduler::new(),
        }
    }

    /// Registers a watch over the given target.
    pub fn watch(&mut self, target: WatchTarget) -> Watch {
        let id = self.next_id;
        self.next_id += 1;
        self.watches.insert(
            id,
            WatchSlot {
                target,
                tracker: SizeTracker::new(),
            },
        );
        Watch(id)
    }

    /// Releases a watch. Returns `false` if it was already released.
    pub fn unwatch(&mut self, watch: Watch) -> bool {
        self.watches.remove(&watch.0).is_some()
    }

    /// Returns `true` if the watch is still registered.
    #[must_use]
    pub fn is_watched(&self, watch: Watch) -> bool {
        self.watches.contains_key(&watch.0)
    }

    /// Number of live watch registrations.
    #[must_use]
    pub fn active_watches(&self) -> usize {
        self.watches.len()
    }

    /// Forwards a raw size notification for a watch.
    ///
    /// Identical repeats are absorbed by the watch's [`SizeTracker`]; only an
    /// actual change notes the target's trigger. Reports against a released
    /// watch are ignored. Returns `true` if a trigger was recorded.
    pub fn report_size(&mut self, watch: Watch, size: Size) -> bool {
        let Some(slot) = self.watches.get_mut(&watch.0) else {
            return false;
        };
        if !slot.tracker.update(size) {
            return false;
        }
        self.scheduler.note(slot.target.trigger());
        true
    }

    /// Returns the last size reported for a watch, if any.
    #[must_use]
    pub fn last_size(&self, watch: Watch) -> Option<Size> {
        self.watches.get(&watch.0).and_then(|slot| slot.tracker.last())
    }

    /// Notes non-size triggers (item-list change, indicator measured).
    pub fn note(&mut self, triggers: Triggers) {
        self.scheduler.note(triggers);
    }

    /// Arms the one-shot deferred initial pass (call at mount).
    pub fn arm_initial(&mut self) {
        self.scheduler.arm_initial();
    }

    /// Returns `true` if the next drain would be non-empty.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Takes every pending trigger for this turn's single recomputation.
    pub fn drain(&mut self) -> Triggers {
        self.scheduler.drain()
    }

    /// Tears everything down: releases all watches, discards pending
    /// triggers, and disarms the initial pass.
    ///
    /// After this call [`active_watches`](Self::active_watches) is zero and
    /// [`drain`](Self::drain) is empty — no observation outlives the
    /// component that owned this registry.
    pub fn release(&mut self) {
        self.watches.clear();
        self.scheduler.reset();
    }
}
