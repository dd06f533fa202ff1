//! Building blocks shared by the batch and streaming indicator paths.
//!
//! The window helpers take iterators so the same arithmetic runs over a slice
//! window (batch) and over a [`RingBuffer`](crate::RingBuffer) (streaming).

use crate::num::TaFloat;
use crate::series::IndicatorSeries;

/// Arithmetic mean of `len` values, summed oldest first.
#[must_use]
pub fn window_mean<T, I>(values: I, len: usize) -> T
where
    T: TaFloat,
    I: Iterator<Item = T>,
{
    values.fold(T::ZERO, |acc, x| acc + x) / <T as TaFloat>::from_usize(len)
}

/// Standard deviation of `len` values around `mean`.
///
/// `ddof` is subtracted from `len` to form the divisor: `0` for the population
/// deviation, `1` for the sample deviation. A non-positive variance (a flat
/// window) yields exactly zero.
#[must_use]
pub fn window_deviation<T, I>(values: I, len: usize, mean: T, ddof: usize) -> T
where
    T: TaFloat,
    I: Iterator<Item = T>,
{
    let sum_sq = values.fold(T::ZERO, |acc, x| {
        let d = x - mean;
        acc + d * d
    });
    let variance = sum_sq / <T as TaFloat>::from_usize(len - ddof);

    if variance > T::ZERO {
        variance.sqrt()
    } else {
        T::ZERO
    }
}

/// Split a price change into its gain and loss parts, both non-negative.
#[inline]
#[must_use]
pub fn split_change<T: TaFloat>(delta: T) -> (T, T) {
    if delta > T::ZERO {
        (delta, T::ZERO)
    } else if delta < T::ZERO {
        (T::ZERO, -delta)
    } else {
        (T::ZERO, T::ZERO)
    }
}

/// Trailing-window mean over every full window of `data`.
///
/// The first `window - 1` entries are undefined; each later entry is the mean
/// of exactly `window` values. A window longer than `data` (or zero) leaves the
/// whole series undefined.
///
/// # Example
///
/// ```rust
/// use kline_core::utils::rolling_mean;
///
/// let result = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
/// assert_eq!(result.as_slice(), &[None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
#[must_use]
pub fn rolling_mean<T: TaFloat>(data: &[T], window: usize) -> IndicatorSeries<T> {
    rolling(data, window, |w| window_mean(w.iter().copied(), window))
}

/// Apply `f` to every full trailing window of `data`.
///
/// The output is aligned with `data`: entry `i` is `f(&data[i + 1 - window..=i])`
/// once `i + 1 >= window`, undefined before that.
#[must_use]
pub fn rolling<T, F>(data: &[T], window: usize, f: F) -> IndicatorSeries<T>
where
    T: TaFloat,
    F: Fn(&[T]) -> T,
{
    if window == 0 || window > data.len() {
        return IndicatorSeries::undefined(data.len());
    }

    let mut result = IndicatorSeries::with_capacity(data.len());
    for _ in 1..window {
        result.push(None);
    }
    for w in data.windows(window) {
        result.push(Some(f(w)));
    }
    result
}
