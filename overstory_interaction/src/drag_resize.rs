// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-resize state for a single box edge.

use kurbo::Point;

/// Extent snapshot taken when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragOrigin {
    start: Point,
    start_extent: f64,
}

/// A clamped vertical drag that resizes a box.
///
/// The host owns the grip (typically a handle on the box's bottom edge) and
/// forwards pointer events: [`begin`](Self::begin) on press,
/// [`update`](Self::update) on every move, [`finish`](Self::finish) on
/// release or cancel. The extent follows the pointer's vertical travel from
/// the press position, clamped to the configured range, and survives across
/// drags so the next one resumes from where the last ended.
///
/// ```
/// use overstory_interaction::DragResize;
/// use kurbo::Point;
///
/// let mut resize = DragResize::new(120.0, 60.0, 480.0);
/// resize.begin(Point::new(0.0, 300.0));
/// assert_eq!(resize.update(Point::new(0.0, 340.0)), Some(160.0));
/// assert!(resize.finish());
/// assert_eq!(resize.extent(), 160.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragResize {
    extent: f64,
    min_extent: f64,
    max_extent: f64,
    drag: Option<DragOrigin>,
}

impl DragResize {
    /// Creates a resizer at `extent`, clamped into `[min_extent, max_extent]`.
    ///
    /// An inverted range collapses to `min_extent`.
    #[must_use]
    pub fn new(extent: f64, min_extent: f64, max_extent: f64) -> Self {
        let max_extent = max_extent.max(min_extent);
        Self {
            extent: extent.clamp(min_extent, max_extent),
            min_extent,
            max_extent,
            drag: None,
        }
    }

    /// Returns the current extent.
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Returns the minimum extent.
    #[must_use]
    pub const fn min_extent(&self) -> f64 {
        self.min_extent
    }

    /// Returns the maximum extent.
    #[must_use]
    pub const fn max_extent(&self) -> f64 {
        self.max_extent
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a drag at the given pointer position.
    ///
    /// A second press while a drag is live rebases the drag on the new
    /// position, which is what happens when the platform loses and regains
    /// the pointer without a release event.
    pub fn begin(&mut self, position: Point) {
        self.drag = Some(DragOrigin {
            start: position,
            start_extent: self.extent,
        });
    }

    /// Applies a pointer move and returns the new extent, if dragging.
    ///
    /// The extent is the drag-start extent plus the pointer's vertical
    /// travel, clamped to the range. Moves outside a drag return `None` and
    /// change nothing.
    pub fn update(&mut self, position: Point) -> Option<f64> {
        let origin = self.drag?;
        let proposed = origin.start_extent + (position.y - origin.start.y);
        self.extent = proposed.clamp(self.min_extent, self.max_extent);
        Some(self.extent)
    }

    /// Ends the drag, keeping the current extent.
    ///
    /// Returns `true` if a drag was live.
    pub fn finish(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Sets the extent directly (host-driven, outside any drag), clamped.
    pub fn set_extent(&mut self, extent: f64) {
        self.extent = extent.clamp(self.min_extent, self.max_extent);
    }
}
