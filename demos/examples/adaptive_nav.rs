// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An adaptive navigation row: width-fitted items plus a disclosure menu.
//!
//! This example wires the full loop a host framework would drive:
//! - `overstory_overflow` measures labels and partitions them into visible
//!   and overflowed,
//! - `overstory_interaction` opens a menu from the "More" indicator and
//!   routes presses to the overflowed entries.
//!
//! The "platform" here is a monospace ruler: eight units per character plus
//! padding stands in for real text measurement.
//!
//! Run:
//! - `cargo run -p overstory_demos --example adaptive_nav`

use kurbo::{Point, Rect, Size};
use overstory_interaction::{Disclosure, PressOutcome};
use overstory_overflow::{AdaptiveItems, IntrinsicMeasure, Item, Partition};

/// Monospace stand-in for the host's text measurement surface.
struct MonospaceHost;

impl IntrinsicMeasure for MonospaceHost {
    type Scalar = f64;

    fn intrinsic_width(&mut self, content: &str) -> f64 {
        8.0 * content.chars().count() as f64 + 16.0
    }
}

const ROW_HEIGHT: f64 = 24.0;
const ENTRY_HEIGHT: f64 = 24.0;

fn print_row(items: &[Item], partition: Partition, width: f64) {
    let (visible, overflow) = partition.split(items);
    let labels: Vec<&str> = visible.iter().map(|item| item.label.as_str()).collect();
    let more = if partition.has_overflow() {
        format!(" [More… ({})]", overflow.len())
    } else {
        String::new()
    };
    println!("{width:>4}px | {}{more}", labels.join(" | "));
}

fn main() {
    let items = vec![
        Item::new("dashboard", "Dashboard"),
        Item::new("settings", "Settings"),
        Item::new("profile", "Profile"),
        Item::new("notifications", "Notifications"),
        Item::new("help", "Help"),
        Item::new("about", "About"),
    ];

    let mut nav = AdaptiveItems::new(MonospaceHost);
    nav.set_items(&items, |item| item.label.clone());

    // The container shrinks; each resize refits the row in one commit.
    println!("Shrinking the container:");
    for width in [720.0, 480.0, 320.0, 200.0] {
        nav.container_resized(Size::new(width, ROW_HEIGHT));
        let partition = nav.commit();
        print_row(&items, partition, width);
    }

    // At 320 units a few items sit behind the indicator; open its menu.
    nav.container_resized(Size::new(320.0, ROW_HEIGHT));
    let partition = nav.commit();
    let (_, overflow) = partition.split(&items);

    let indicator = Rect::new(
        320.0 - nav.indicator_extent(),
        0.0,
        320.0,
        ROW_HEIGHT,
    );
    let mut menu = Disclosure::new();
    menu.set_trigger(indicator);

    println!("\nPressing the indicator:");
    let outcome = menu.on_pointer_down(indicator.center());
    assert_eq!(outcome, PressOutcome::Toggled(true));

    // The host lays the panel out under the trigger, one rect per entry.
    let panel = Rect::new(
        indicator.x0,
        indicator.y1,
        indicator.x0 + 160.0,
        indicator.y1 + ENTRY_HEIGHT * overflow.len() as f64,
    );
    let entries: Vec<Rect> = (0..overflow.len())
        .map(|i| {
            let top = panel.y0 + ENTRY_HEIGHT * i as f64;
            Rect::new(panel.x0, top, panel.x1, top + ENTRY_HEIGHT)
        })
        .collect();
    menu.set_panel(panel, entries.iter().copied());

    for (item, rect) in overflow.iter().zip(&entries) {
        println!("  menu entry at {:?}: {}", rect.origin(), item.label);
    }

    // Press the second entry; the menu reports its position and closes.
    let press = entries[1].center();
    match menu.on_pointer_down(press) {
        PressOutcome::Selected(index) => {
            println!("\nSelected: {}", overflow[index].label);
        }
        other => println!("\nUnexpected outcome: {other:?}"),
    }
    assert!(!menu.is_open());

    // Unmount: nothing keeps watching after release.
    nav.release();
    assert_eq!(nav.active_watches(), 0);
}
