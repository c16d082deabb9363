// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text editing session: tab indentation, undo history, drag-to-resize.
//!
//! `overstory_editor` owns the text semantics while the "widget" here is
//! just a printed box whose height follows an `overstory_interaction`
//! drag.
//!
//! Run:
//! - `cargo run -p overstory_demos --example editor_session`

use kurbo::Point;
use overstory_editor::{EditorBuffer, Selection};
use overstory_interaction::DragResize;

fn show(buffer: &EditorBuffer) {
    for line in buffer.value().lines() {
        println!("  |{}", line.replace('\t', "    "));
    }
    println!();
}

fn main() {
    let mut buffer = EditorBuffer::new("fn main() {\nprintln!(\"hi\");\n}")
        .with_tab_indentation(true)
        .with_visual_tab_size(4);

    println!("Initial:");
    show(&buffer);

    // Select the middle line and press Tab.
    let line_start = "fn main() {\n".len();
    let line_end = line_start + "println!(\"hi\");".len();
    let selection = buffer
        .tab(Selection::new(line_start, line_end), false)
        .expect("tab handling is enabled");
    println!("After Tab on the body:");
    show(&buffer);

    // Shift+Tab undoes the indent character-for-character.
    buffer.tab(selection, true);
    println!("After Shift+Tab:");
    show(&buffer);

    // Both edits were snapshots; undo walks them back one at a time.
    buffer.undo();
    println!("After undo (indent restored):");
    show(&buffer);

    buffer.undo();
    println!("After a second undo (back to the start):");
    show(&buffer);
    assert!(!buffer.can_undo());

    // Typing goes through replace; the host snapshots on its own debounce.
    buffer.replace("fn main() {}\n");
    buffer.snapshot();
    assert!(buffer.can_undo());

    // Drag the editor's bottom handle to grow it.
    let mut resize = DragResize::new(120.0, 60.0, 480.0);
    resize.begin(Point::new(0.0, 300.0));
    resize.update(Point::new(0.0, 420.0));
    resize.finish();
    println!("Editor height after drag: {}px", resize.extent());
    assert_eq!(resize.extent(), 240.0);
}
