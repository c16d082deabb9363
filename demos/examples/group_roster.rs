// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A capped avatar group: five discs and a "+N" badge.
//!
//! Run:
//! - `cargo run -p overstory_demos --example group_roster`

use overstory_group::{Avatar, AvatarState, GroupCap};

fn main() {
    let members = [
        "Ada Lovelace",
        "Grace Hopper",
        "Alan Turing",
        "Katherine Johnson",
        "Edsger Dijkstra",
        "Barbara Liskov",
        "Donald Knuth",
    ];

    let cap = GroupCap::default();
    let (shown, _) = cap.split(&members);

    for name in shown {
        // No picture source: each avatar resolves to initials on a disc.
        let avatar = Avatar::without_source(*name);
        if let AvatarState::Fallback(fallback) = avatar.state() {
            let fg = if fallback.light_foreground {
                "light"
            } else {
                "dark"
            };
            println!(
                "  ({:>2}) #{:06X} {} text  {}",
                fallback.initials, fallback.background, fg, name
            );
        }
    }

    if let Some(badge) = cap.remainder_label(members.len()) {
        println!("  ({badge})");
    }

    // A member with a picture goes through the load lifecycle instead.
    let mut with_picture = Avatar::with_source("Annie Easley");
    assert_eq!(*with_picture.state(), AvatarState::Loading);
    with_picture.failed();
    assert!(matches!(with_picture.state(), AvatarState::Fallback(_)));
}
