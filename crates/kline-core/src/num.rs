//! Numeric type abstractions for indicator computations.
//!
//! This module defines the [`TaFloat`] trait which abstracts over `f32` and `f64`
//! so every indicator can be written once and evaluated at either precision.

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// Serialization bound that collapses to nothing without the `serde` feature.
#[cfg(feature = "serde")]
pub trait MaybeSerde: serde::Serialize + serde::de::DeserializeOwned {}

#[cfg(feature = "serde")]
impl<T> MaybeSerde for T where T: serde::Serialize + serde::de::DeserializeOwned {}

/// Serialization bound that collapses to nothing without the `serde` feature.
#[cfg(not(feature = "serde"))]
pub trait MaybeSerde {}

#[cfg(not(feature = "serde"))]
impl<T> MaybeSerde for T {}

/// Trait for floating-point types used in indicator calculations.
///
/// # Associated Constants
///
/// - `ZERO`, `ONE`, `TWO` - Small integers used by the recurrences
/// - `HUNDRED` - Upper bound of oscillators such as RSI
/// - `NEAR_ZERO` - Threshold under which a denominator counts as zero (`1e-10`)
///
/// # Example
///
/// ```rust
/// use kline_core::TaFloat;
///
/// fn rsi_from_rs<T: TaFloat>(rs: T) -> T {
///     T::HUNDRED - T::HUNDRED / (T::ONE + rs)
/// }
///
/// assert_eq!(rsi_from_rs(1.0_f64), 50.0);
/// ```
pub trait TaFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + MaybeSerde + 'static
{
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Two value.
    const TWO: Self;
    /// Hundred value (RSI ceiling).
    const HUNDRED: Self;
    /// Denominator guard: values below this are treated as zero.
    const NEAR_ZERO: Self;

    /// Convert from `f64`, rounding when the target is narrower.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl TaFloat for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;
    const NEAR_ZERO: Self = 1e-10;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;
    const NEAR_ZERO: Self = 1e-10;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}
