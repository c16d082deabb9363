// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic visual identity derived from a display name.

use alloc::string::String;

/// Initials for a display name: the first letter of the first two
/// whitespace-separated words, uppercased.
///
/// A blank name yields `"?"` so the fallback disc always has something to
/// show.
///
/// ```
/// use overstory_group::initials;
///
/// assert_eq!(initials("Ada Lovelace"), "AL");
/// assert_eq!(initials("Prince"), "P");
/// assert_eq!(initials("  "), "?");
/// ```
#[must_use]
pub fn initials(name: &str) -> String {
    let mut out: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if out.is_empty() {
        out.push('?');
    }
    out
}

/// A deterministic 24-bit `0xRRGGBB` color for a display name.
///
/// Uses the djb2 string hash, so the same name always lands on the same
/// color across sessions and hosts.
#[must_use]
pub fn name_color(name: &str) -> u32 {
    let mut hash: u32 = 5381;
    for byte in name.bytes() {
        hash = hash.wrapping_mul(33) ^ u32::from(byte);
    }
    hash & 0x00FF_FFFF
}

/// Classifies a 24-bit `0xRRGGBB` color as dark.
///
/// Uses the ITU-R 601 luma weighting; colors below the midpoint read as
/// dark and want a light foreground on top.
#[must_use]
pub const fn is_dark(color: u32) -> bool {
    let r = (color >> 16) & 0xFF;
    let g = (color >> 8) & 0xFF;
    let b = color & 0xFF;
    let luma = (r * 299 + g * 587 + b * 114) / 1000;
    luma < 128
}

#[cfg(test)]
mod tests {
    use super::{initials, is_dark, name_color};

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("ada lovelace king"), "AL");
        assert_eq!(initials("Prince"), "P");
    }

    #[test]
    fn initials_handle_extra_whitespace_and_unicode() {
        assert_eq!(initials("  grace   hopper  "), "GH");
        assert_eq!(initials("élodie durand"), "ÉD");
    }

    #[test]
    fn blank_names_fall_back_to_question_mark() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn name_color_is_deterministic_and_masked() {
        assert_eq!(name_color("Ada Lovelace"), name_color("Ada Lovelace"));
        assert_ne!(name_color("Ada Lovelace"), name_color("Grace Hopper"));
        assert!(name_color("anything at all") <= 0x00FF_FFFF);
        assert_eq!(name_color(""), 5381 & 0x00FF_FFFF);
    }

    #[test]
    fn luma_classification() {
        assert!(is_dark(0x000000));
        assert!(!is_dark(0xFFFFFF));
        // Pure blue is dark, pure green is light, per the 601 weights.
        assert!(is_dark(0x0000FF));
        assert!(!is_dark(0x00FF00));
    }
}
