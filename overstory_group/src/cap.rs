// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Count-capped splitting of a member list.

use alloc::format;
use alloc::string::String;

/// A display cap for a group of members.
///
/// The count-based sibling of a width-based overflow partition: the first
/// `max` members are shown and the rest collapse into a single "+N"
/// remainder badge. Splitting never copies; it borrows both halves out of
/// the caller's slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupCap {
    max: usize,
}

impl GroupCap {
    /// Creates a cap showing at most `max` members.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }

    /// Returns the cap.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Splits members into `(shown, remainder)`.
    #[must_use]
    pub fn split<'a, T>(&self, members: &'a [T]) -> (&'a [T], &'a [T]) {
        members.split_at(self.max.min(members.len()))
    }

    /// Number of members collapsed behind the badge for a group of `len`.
    #[must_use]
    pub const fn remaining(&self, len: usize) -> usize {
        len.saturating_sub(self.max)
    }

    /// The "+N" badge text, or `None` when everything is shown.
    #[must_use]
    pub fn remainder_label(&self, len: usize) -> Option<String> {
        match self.remaining(len) {
            0 => None,
            n => Some(format!("+{n}")),
        }
    }
}

impl Default for GroupCap {
    /// Shows at most five members.
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::GroupCap;

    #[test]
    fn splits_at_the_cap() {
        let members = ["a", "b", "c", "d", "e", "f", "g"];
        let cap = GroupCap::new(5);
        let (shown, rest) = cap.split(&members);
        assert_eq!(shown, &["a", "b", "c", "d", "e"]);
        assert_eq!(rest, &["f", "g"]);
        assert_eq!(cap.remainder_label(members.len()).as_deref(), Some("+2"));
    }

    #[test]
    fn short_groups_show_everything_and_no_badge() {
        let members = ["a", "b"];
        let cap = GroupCap::default();
        let (shown, rest) = cap.split(&members);
        assert_eq!(shown.len(), 2);
        assert!(rest.is_empty());
        assert_eq!(cap.remaining(members.len()), 0);
        assert_eq!(cap.remainder_label(members.len()), None);
    }

    #[test]
    fn exact_fit_has_no_badge() {
        let cap = GroupCap::new(3);
        assert_eq!(cap.remainder_label(3), None);
    }

    #[test]
    fn zero_cap_collapses_everything() {
        let members = [1, 2, 3];
        let cap = GroupCap::new(0);
        let (shown, rest) = cap.split(&members);
        assert!(shown.is_empty());
        assert_eq!(rest.len(), 3);
        assert_eq!(cap.remainder_label(3).as_deref(), Some("+3"));
    }

    #[test]
    fn empty_group() {
        let members: [u8; 0] = [];
        let cap = GroupCap::default();
        let (shown, rest) = cap.split(&members);
        assert!(shown.is_empty());
        assert!(rest.is_empty());
        assert_eq!(cap.remainder_label(0), None);
    }
}
