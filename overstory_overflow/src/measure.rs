// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host measurement seam and the once-cached indicator width.

use alloc::string::String;

use crate::{Scalar, WidthTable};

/// Placeholder content rendered to approximate the overflow indicator.
///
/// The indicator's real content does not depend on the item count in this
/// design ("More", not "+N"), so one representative measurement is an
/// acceptable approximation for the component's lifetime.
pub const INDICATOR_PLACEHOLDER: &str = "More...";

/// Default slack added to the indicator measurement, in layout units.
///
/// Covers padding and margin around the indicator control that the bare
/// placeholder measurement does not see.
pub const DEFAULT_INDICATOR_SLACK: f64 = 20.0;

/// An off-screen measurement surface supplied by the host.
///
/// Implementations render content out of the visible flow — zero height,
/// clipped, hidden from assistive technology, but laid out with the same
/// fonts and padding the visible rendering would use — and report its
/// natural (no-wrap) width. On a non-browser host this is whatever
/// text/layout measurement primitive the platform offers.
///
/// The measurement must be pure with respect to layout: the same content
/// reports the same intrinsic width.
pub trait IntrinsicMeasure {
    /// Scalar the host measures in (typically logical pixels).
    type Scalar: Scalar;

    /// Natural rendered width of `content` under current styling.
    fn intrinsic_width(&mut self, content: &str) -> Self::Scalar;
}

/// Measures candidate items and the overflow indicator through a host
/// surface.
///
/// The indicator width is measured once, from [`INDICATOR_PLACEHOLDER`]
/// plus a configurable slack, and cached for the measurer's lifetime. Item
/// widths are re-measured in bulk whenever the list changes; the measurer
/// owns the surface so every measurement goes through the same styling.
#[derive(Clone, Debug)]
pub struct Measurer<H: IntrinsicMeasure> {
    host: H,
    indicator_slack: H::Scalar,
    indicator_width: Option<H::Scalar>,
}

impl<H: IntrinsicMeasure> Measurer<H> {
    /// Creates a measurer with the default indicator slack.
    pub fn new(host: H) -> Self {
        Self::with_indicator_slack(host, H::Scalar::from_f64(DEFAULT_INDICATOR_SLACK))
    }

    /// Creates a measurer with a custom indicator slack.
    pub fn with_indicator_slack(host: H, indicator_slack: H::Scalar) -> Self {
        Self {
            host,
            indicator_slack: indicator_slack.max(H::Scalar::zero()),
            indicator_width: None,
        }
    }

    /// Returns a shared reference to the host surface.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns a mutable reference to the host surface.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Measures every item through the caller's rendering function,
    /// rebuilding `widths` in order.
    ///
    /// All items are measured, not just the currently visible ones: the
    /// fitter needs the full table to decide where the cut falls.
    pub fn measure_items<T, F>(
        &mut self,
        items: &[T],
        mut render: F,
        widths: &mut WidthTable<H::Scalar>,
    ) where
        F: FnMut(&T) -> String,
    {
        let host = &mut self.host;
        widths.rebuild(items, |&item| host.intrinsic_width(&render(item)));
    }

    /// Width reserved for the overflow indicator, measured once and cached.
    pub fn indicator_width(&mut self) -> H::Scalar {
        if let Some(width) = self.indicator_width {
            return width;
        }
        let measured = self
            .host
            .intrinsic_width(INDICATOR_PLACEHOLDER)
            .max(H::Scalar::zero())
            + self.indicator_slack;
        self.indicator_width = Some(measured);
        measured
    }

    /// Returns the cached indicator width without measuring.
    pub fn cached_indicator_width(&self) -> Option<H::Scalar> {
        self.indicator_width
    }

    /// Drops the cached indicator width, for example after a styling change
    /// that invalidates the old measurement.
    pub fn invalidate_indicator(&mut self) {
        self.indicator_width = None;
    }
}
