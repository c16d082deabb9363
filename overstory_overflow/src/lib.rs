// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Overflow: adaptive overflow layout for a row of items.
//!
//! Given an ordered list of items and a container that may resize at any
//! time, this crate decides which leading items fit and collapses the rest
//! behind an overflow indicator ("More…"). It is renderer-agnostic: the host
//! framework renders items and observes resizes; this crate owns the widths,
//! the split, and the recomputation contract.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` widths.
//! - [`WidthTable`]: per-position measured widths, possibly still incomplete.
//! - [`Partition`] and [`compute_partition`]: the pure fitter. A single
//!   greedy left-to-right pass charges the indicator's reserved width only
//!   while further items remain, so the last item never pays for an
//!   indicator it would not need. `visible` is always a contiguous prefix of
//!   the original order.
//! - [`IntrinsicMeasure`] and [`Measurer`]: the host measurement seam.
//!   Every candidate item is measured through the caller's rendering
//!   function on an off-screen surface; the indicator width is measured once
//!   from a placeholder rendering and cached.
//! - [`OverflowList`]: a small controller caching the last [`Partition`]
//!   behind a dirty flag.
//! - [`AdaptiveItems`]: the full component loop — items → widths →
//!   partition — re-entered by resize reports and list changes, with
//!   coalesced recomputation and verifiable teardown via
//!   [`overstory_observe`].
//!
//! ## Minimal example
//!
//! A simulated host that measures text at eight units per character:
//!
//! ```rust
//! use kurbo::Size;
//! use overstory_overflow::{AdaptiveItems, IntrinsicMeasure, Item};
//!
//! struct TextHost;
//!
//! impl IntrinsicMeasure for TextHost {
//!     type Scalar = f64;
//!
//!     fn intrinsic_width(&mut self, content: &str) -> f64 {
//!         8.0 * content.chars().count() as f64 + 16.0
//!     }
//! }
//!
//! let items = vec![
//!     Item::new("1", "Dashboard"),
//!     Item::new("2", "Settings"),
//!     Item::new("3", "Profile"),
//! ];
//!
//! let mut nav = AdaptiveItems::new(TextHost);
//! nav.set_items(&items, |item: &Item| item.label.clone());
//! nav.container_resized(Size::new(240.0, 32.0));
//!
//! let partition = nav.commit();
//! let (visible, overflow) = partition.split(&items);
//! assert_eq!(visible.len() + overflow.len(), items.len());
//! assert!(partition.has_overflow());
//! ```
//!
//! The fitter itself ([`compute_partition`]) has zero platform dependency
//! and can be unit tested with hand-written widths.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adaptive;
mod item;
mod list;
mod measure;
mod partition;
mod scalar;
mod widths;

pub use adaptive::AdaptiveItems;
pub use item::Item;
pub use list::OverflowList;
pub use measure::{DEFAULT_INDICATOR_SLACK, INDICATOR_PLACEHOLDER, IntrinsicMeasure, Measurer};
pub use partition::{Partition, compute_partition};
pub use scalar::Scalar;
pub use widths::WidthTable;
