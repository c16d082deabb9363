// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picture-or-fallback avatar model.

use alloc::string::String;

use crate::identity::{initials, is_dark, name_color};

/// Neutral disc color used when no name is available to derive one from.
pub const DEFAULT_FALLBACK_COLOR: u32 = 0x5A6268;

/// The resolved fallback presentation: initials on a colored disc.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fallback {
    /// Initials shown on the disc.
    pub initials: String,
    /// Disc color as 24-bit `0xRRGGBB`.
    pub background: u32,
    /// Whether the initials should render in a light color.
    pub light_foreground: bool,
}

/// Load lifecycle of an [`Avatar`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarState {
    /// A picture source exists and has not resolved yet.
    Loading,
    /// The picture loaded; the host renders it as-is.
    Ready,
    /// No picture is available; render the fallback identity.
    Fallback(Fallback),
}

/// A group member's picture with a deterministic identity fallback.
///
/// The host owns image loading; it constructs the avatar with or without a
/// source and forwards the load outcome via [`loaded`](Self::loaded) or
/// [`failed`](Self::failed). Without a source the avatar resolves to its
/// fallback immediately, no load attempt implied.
///
/// The fallback derives everything from the display name: [`initials`] for
/// the text, [`name_color`] for the disc, and [`is_dark`] to pick a
/// contrasting foreground. An explicit background overrides the derived
/// color but keeps the contrast logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Avatar {
    name: String,
    background: Option<u32>,
    state: AvatarState,
}

impl Avatar {
    /// Creates an avatar whose picture is loading.
    pub fn with_source(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: None,
            state: AvatarState::Loading,
        }
    }

    /// Creates an avatar with no picture source; it falls back immediately.
    pub fn without_source(name: impl Into<String>) -> Self {
        let mut avatar = Self {
            name: name.into(),
            background: None,
            state: AvatarState::Loading,
        };
        avatar.state = AvatarState::Fallback(avatar.fallback());
        avatar
    }

    /// Overrides the fallback disc color.
    ///
    /// Takes effect on the next state transition into fallback; an avatar
    /// already showing its fallback is re-resolved in place.
    pub fn set_background(&mut self, background: u32) {
        self.background = Some(background & 0x00FF_FFFF);
        if matches!(self.state, AvatarState::Fallback(_)) {
            self.state = AvatarState::Fallback(self.fallback());
        }
    }

    /// The display name this avatar represents.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &AvatarState {
        &self.state
    }

    /// Marks the picture as loaded.
    pub fn loaded(&mut self) {
        self.state = AvatarState::Ready;
    }

    /// Marks the picture load as failed; the avatar falls back.
    pub fn failed(&mut self) {
        self.state = AvatarState::Fallback(self.fallback());
    }

    fn fallback(&self) -> Fallback {
        let background = self.background.unwrap_or_else(|| {
            if self.name.trim().is_empty() {
                DEFAULT_FALLBACK_COLOR
            } else {
                name_color(&self.name)
            }
        });
        Fallback {
            initials: initials(&self.name),
            background,
            light_foreground: is_dark(background),
        }
    }
}
