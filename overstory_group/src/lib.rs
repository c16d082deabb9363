// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Group: count-capped group display primitives.
//!
//! Where the overflow crates fit items into available width, this crate
//! handles the other common truncation policy: show at most N members of a
//! group and summarize the rest as a "+K" remainder badge. It also carries
//! the identity helpers such badges usually sit next to:
//!
//! - [`GroupCap`]: splits a member list into shown members and a remainder.
//! - [`initials`] and [`name_color`]: deterministic initials and background
//!   color derived from a display name.
//! - [`Avatar`]: a picture-or-fallback model that resolves to initials on a
//!   colored disc when no image is available.
//!
//! ```
//! use overstory_group::{GroupCap, initials};
//!
//! let members = ["Ada Lovelace", "Grace Hopper", "Alan Turing"];
//! let cap = GroupCap::new(2);
//! let (shown, _) = cap.split(&members);
//! assert_eq!(shown.len(), 2);
//! assert_eq!(cap.remainder_label(members.len()).as_deref(), Some("+1"));
//! assert_eq!(initials("Ada Lovelace"), "AL");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod avatar;
mod cap;
mod identity;

pub use avatar::{Avatar, AvatarState, DEFAULT_FALLBACK_COLOR, Fallback};
pub use cap::GroupCap;
pub use identity::{initials, is_dark, name_color};
