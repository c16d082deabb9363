// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab and Shift+Tab over a `(text, selection)` pair.

use alloc::string::String;
use alloc::vec::Vec;

const TAB: char = '\t';

/// A byte-offset selection, `start <= end`.
///
/// Offsets must lie on `char` boundaries of the text they address. A
/// collapsed selection (`start == end`) is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Selection {
    /// Creates a selection, swapping the offsets if given backwards.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A caret at `offset`.
    #[must_use]
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns `true` for a caret.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// The result of an indentation edit: the new text and where the selection
/// moved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    /// The edited text.
    pub text: String,
    /// The selection after the edit.
    pub selection: Selection,
}

/// The run of whole lines a selection touches, as byte offsets.
struct LineSpan {
    /// Offset of the first touched line's start.
    start: usize,
    /// Offset one past the last touched line's content (its `\n` excluded).
    end: usize,
}

/// Computes which whole lines the selection touches.
///
/// A selection ending exactly at the start of a later line does not touch
/// that line; selecting two full lines plus the trailing newline indents
/// two lines, not three.
fn line_span(text: &str, selection: Selection) -> LineSpan {
    let mut starts: Vec<usize> = Vec::new();
    starts.push(0);
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    let line_of = |offset: usize| starts.partition_point(|&s| s <= offset) - 1;

    let start_line = line_of(selection.start.min(text.len()));
    let mut end_line = line_of(selection.end.min(text.len()));
    if end_line > start_line && selection.end == starts[end_line] {
        end_line -= 1;
    }

    let span_end = starts
        .get(end_line + 1)
        .map_or(text.len(), |&next| next - 1);
    LineSpan {
        start: starts[start_line],
        end: span_end,
    }
}

/// Applies Tab.
///
/// A caret inserts a literal tab in place. Any non-collapsed selection
/// indents whole lines: every touched line gains a leading tab, the start
/// moves one column right, and the end moves right by the number of lines
/// indented.
///
/// ```
/// use overstory_editor::{Selection, indent};
///
/// let edit = indent("one\ntwo", Selection::new(0, 7));
/// assert_eq!(edit.text, "\tone\n\ttwo");
/// assert_eq!(edit.selection, Selection::new(1, 9));
/// ```
#[must_use]
pub fn indent(text: &str, selection: Selection) -> Edit {
    if selection.is_collapsed() {
        let at = selection.start.min(text.len());
        let mut out = String::with_capacity(text.len() + 1);
        out.push_str(&text[..at]);
        out.push(TAB);
        out.push_str(&text[at..]);
        return Edit {
            text: out,
            selection: Selection::caret(at + 1),
        };
    }

    let span = line_span(text, selection);
    let mut lines = 0_usize;
    let mut indented = String::with_capacity(span.end - span.start + 8);
    for (i, line) in text[span.start..span.end].split('\n').enumerate() {
        if i > 0 {
            indented.push('\n');
        }
        indented.push(TAB);
        indented.push_str(line);
        lines += 1;
    }

    let mut out = String::with_capacity(text.len() + lines);
    out.push_str(&text[..span.start]);
    out.push_str(&indented);
    out.push_str(&text[span.end..]);
    Edit {
        text: out,
        selection: Selection {
            start: selection.start + 1,
            end: selection.end + lines,
        },
    }
}

/// Applies Shift+Tab.
///
/// Every line the selection touches loses one leading tab, or failing that
/// up to `visual_tab_size` leading spaces. A caret counts as touching its
/// line. The start shifts left by what its own line lost, clamped to the
/// line start; the end shifts left by the total removed, clamped to the
/// start.
#[must_use]
pub fn unindent(text: &str, selection: Selection, visual_tab_size: usize) -> Edit {
    let span = line_span(text, selection);

    let mut total_removed = 0_usize;
    let mut first_removed = 0_usize;
    let mut out_lines = String::with_capacity(span.end - span.start);
    for (i, line) in text[span.start..span.end].split('\n').enumerate() {
        let removed = leading_indent(line, visual_tab_size);
        if i == 0 {
            first_removed = removed;
        }
        total_removed += removed;
        if i > 0 {
            out_lines.push('\n');
        }
        out_lines.push_str(&line[removed..]);
    }

    let mut out = String::with_capacity(text.len() - total_removed);
    out.push_str(&text[..span.start]);
    out.push_str(&out_lines);
    out.push_str(&text[span.end..]);

    let start = selection
        .start
        .saturating_sub(first_removed)
        .max(span.start);
    let end = selection.end.saturating_sub(total_removed).max(start);
    Edit {
        text: out,
        selection: Selection { start, end },
    }
}

/// Bytes of removable indentation at the start of a line: one tab, or up
/// to `visual_tab_size` spaces.
fn leading_indent(line: &str, visual_tab_size: usize) -> usize {
    if line.starts_with(TAB) {
        return 1;
    }
    line.bytes()
        .take(visual_tab_size)
        .take_while(|&b| b == b' ')
        .count()
}

#[cfg(test)]
mod tests {
    use super::{Edit, Selection, indent, unindent};

    #[test]
    fn caret_inserts_a_tab() {
        let edit = indent("hello", Selection::caret(2));
        assert_eq!(edit.text, "he\tllo");
        assert_eq!(edit.selection, Selection::caret(3));
    }

    #[test]
    fn single_line_selection_indents_the_whole_line() {
        // "two" selected within the second line.
        let edit = indent("one\ntwo\nthree", Selection::new(4, 7));
        assert_eq!(edit.text, "one\n\ttwo\nthree");
        assert_eq!(edit.selection, Selection::new(5, 8));
    }

    #[test]
    fn multi_line_selection_indents_each_line() {
        let edit = indent("one\ntwo\nthree", Selection::new(1, 9));
        assert_eq!(edit.text, "\tone\n\ttwo\n\tthree");
        assert_eq!(edit.selection, Selection::new(2, 12));
    }

    #[test]
    fn selection_ending_at_line_start_excludes_that_line() {
        // End sits at the start of "three"; "three" stays untouched.
        let edit = indent("one\ntwo\nthree", Selection::new(0, 8));
        assert_eq!(edit.text, "\tone\n\ttwo\nthree");
        assert_eq!(edit.selection, Selection::new(1, 10));
    }

    #[test]
    fn empty_lines_inside_the_selection_survive() {
        let edit = indent("one\n\ntwo", Selection::new(0, 8));
        assert_eq!(edit.text, "\tone\n\t\n\ttwo");
        assert_eq!(edit.selection, Selection::new(1, 11));
    }

    #[test]
    fn unindent_strips_one_tab_per_line() {
        let edit = unindent("\tone\n\ttwo", Selection::new(1, 9), 4);
        assert_eq!(edit.text, "one\ntwo");
        assert_eq!(edit.selection, Selection::new(0, 7));
    }

    #[test]
    fn unindent_strips_spaces_up_to_the_visual_tab_size() {
        let edit = unindent("    one\n      two", Selection::new(0, 17), 4);
        assert_eq!(edit.text, "one\n  two");
        assert_eq!(edit.selection, Selection::new(0, 9));
    }

    #[test]
    fn unindent_leaves_unindented_lines_alone() {
        let edit = unindent("one\n\ttwo", Selection::new(0, 8), 4);
        assert_eq!(edit.text, "one\ntwo");
        assert_eq!(edit.selection, Selection::new(0, 7));
    }

    #[test]
    fn caret_unindents_its_own_line() {
        let edit = unindent("\thello", Selection::caret(3), 4);
        assert_eq!(edit.text, "hello");
        assert_eq!(edit.selection, Selection::caret(2));
    }

    #[test]
    fn unindent_clamps_a_caret_inside_the_removed_prefix() {
        // Caret at column 1 of a 4-space indent; removal would pull it
        // before the line start.
        let edit = unindent("one\n    two", Selection::caret(5), 4);
        assert_eq!(edit.text, "one\ntwo");
        assert_eq!(edit.selection, Selection::caret(4));
    }

    #[test]
    fn unindent_on_clean_text_is_identity() {
        let edit = unindent("one\ntwo", Selection::new(0, 7), 4);
        assert_eq!(
            edit,
            Edit {
                text: "one\ntwo".into(),
                selection: Selection::new(0, 7),
            }
        );
    }

    #[test]
    fn indent_then_unindent_round_trips() {
        let text = "alpha\nbeta\ngamma";
        let selection = Selection::new(2, 13);
        let indented = indent(text, selection);
        let back = unindent(&indented.text, indented.selection, 4);
        assert_eq!(back.text, text);
        assert_eq!(back.selection, selection);
    }

    #[test]
    fn backwards_selection_is_normalized() {
        assert_eq!(Selection::new(7, 2), Selection::new(2, 7));
    }

    #[test]
    fn offsets_past_the_end_are_tolerated() {
        let edit = indent("abc", Selection::caret(10));
        assert_eq!(edit.text, "abc\t");
        assert_eq!(edit.selection, Selection::caret(4));
    }
}
