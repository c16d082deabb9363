// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer interaction state machines for Overstory.
//!
//! Host-agnostic models for the two interactions an overflow row needs
//! beyond layout itself:
//!
//! - [`Disclosure`]: an anchored menu that opens from an indicator, routes
//!   presses to its entries, and dismisses on outside presses.
//! - [`DragResize`]: a clamped drag that resizes a box along one axis.
//!
//! Both are pure event-in, outcome-out machines. The host translates
//! platform pointer events into calls and interprets the returned outcome;
//! no timers, focus, or platform handles are involved.
//!
//! ```
//! use overstory_interaction::{Disclosure, PressOutcome};
//! use kurbo::{Point, Rect};
//!
//! let mut menu = Disclosure::new();
//! menu.set_trigger(Rect::new(200.0, 0.0, 240.0, 24.0));
//!
//! // Press the trigger: the menu toggles open.
//! let outcome = menu.on_pointer_down(Point::new(210.0, 10.0));
//! assert_eq!(outcome, PressOutcome::Toggled(true));
//!
//! // Press anywhere else: the menu dismisses.
//! let outcome = menu.on_pointer_down(Point::new(10.0, 100.0));
//! assert_eq!(outcome, PressOutcome::DismissedOutside);
//! assert!(!menu.is_open());
//! ```

#![no_std]

mod disclosure;
mod drag_resize;

pub use disclosure::{Disclosure, PressOutcome};
pub use drag_resize::DragResize;
