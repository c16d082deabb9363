// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction over `f32`/`f64` widths.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// A scalar used for widths, extents, and space budgets.
///
/// Implemented for `f32` and `f64`. All widths live in a caller-chosen 1D
/// coordinate space (typically logical pixels) and are expected to be finite
/// and non-negative; the width models debug-assert finiteness and clamp
/// negative values at their boundaries.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// Converts an `f64` measurement, for example a [`kurbo::Size`] dimension.
    fn from_f64(value: f64) -> Self;

    /// Returns `true` if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` if this value has a negative sign.
    fn is_sign_negative(self) -> bool;

    /// Returns the greater of two values.
    fn max(self, other: Self) -> Self;
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "measurements beyond f32 range are not meaningful layout inputs"
    )]
    fn from_f64(value: f64) -> Self {
        value as Self
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }
}
