// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Observe: resize-observation plumbing for adaptive layout.
//!
//! This crate provides the reactive half of an adaptive layout component,
//! without depending on any platform's resize-observation facility. The host
//! framework owns the real observers (or polling, or layout callbacks) and
//! feeds raw notifications in; this crate turns them into a clean "recompute
//! exactly once per turn" contract:
//!
//! - [`SizeTracker`]: remembers the last reported box size and detects
//!   change, so a stream of identical or per-pixel notifications collapses
//!   into a single trigger.
//! - [`Triggers`]: the set of causes that schedule a relayout pass.
//! - [`RelayoutScheduler`]: accumulates triggers and drains them as one
//!   batch, with a one-shot deferred initial pass armed at mount.
//! - [`Observer`]: a registry of size watches (container, measurement
//!   surface) routing deduplicated reports to triggers, with explicit
//!   release so teardown verifiably leaves nothing behind.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use overstory_observe::{Observer, Triggers, WatchTarget};
//!
//! let mut observer = Observer::new();
//! let container = observer.watch(WatchTarget::Container);
//! observer.arm_initial();
//!
//! // First report is a change; an identical follow-up coalesces away.
//! assert!(observer.report_size(container, Size::new(320.0, 24.0)));
//! assert!(!observer.report_size(container, Size::new(320.0, 24.0)));
//!
//! // One drain covers everything noted this turn, initial pass included.
//! let triggers = observer.drain();
//! assert!(triggers.contains(Triggers::CONTAINER_RESIZED | Triggers::INITIAL));
//! assert!(observer.drain().is_empty());
//!
//! // Teardown releases every watch; nothing outlives the component.
//! observer.release();
//! assert_eq!(observer.active_watches(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod scheduler;
mod size;
mod triggers;

pub use registry::{Observer, Watch, WatchTarget};
pub use scheduler::RelayoutScheduler;
pub use size::SizeTracker;
pub use triggers::Triggers;
