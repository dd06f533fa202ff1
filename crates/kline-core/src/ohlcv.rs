//! K-line (candlestick) bar types.
//!
//! Indicators in this workspace only read closing prices, but callers usually
//! hold full bars, so the columnar [`OhlcvSeries`] lets them hand over the
//! whole K-line history and have the close column picked out.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::num::TaFloat;

/// A single K-line bar.
///
/// # Example
///
/// ```rust
/// use kline_core::Bar;
///
/// let bar = Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0);
/// assert!(bar.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct Bar<T: TaFloat> {
    /// Opening price for the period.
    pub open: T,
    /// Highest price during the period.
    pub high: T,
    /// Lowest price during the period.
    pub low: T,
    /// Closing price for the period.
    pub close: T,
    /// Trading volume during the period.
    #[cfg_attr(feature = "serde", serde(default))]
    pub volume: T,
}

impl<T: TaFloat> Bar<T> {
    /// Create a new bar.
    #[must_use]
    pub fn new(open: T, high: T, low: T, close: T, volume: T) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Create a flat bar where every price equals `close` and volume is zero.
    #[must_use]
    pub fn from_close(close: T) -> Self {
        Self::new(close, close, close, close, T::ZERO)
    }

    /// Check the candlestick invariants.
    ///
    /// A valid bar has finite values, `low <= open, close <= high`
    /// and non-negative volume.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.open.is_valid()
            && self.high.is_valid()
            && self.low.is_valid()
            && self.close.is_valid()
            && self.volume.is_valid()
            && self.low <= self.open
            && self.open <= self.high
            && self.low <= self.close
            && self.close <= self.high
            && self.volume >= T::ZERO
    }
}

/// Columnar storage of K-line bars.
///
/// # Example
///
/// ```rust
/// use kline_core::{Bar, OhlcvSeries};
///
/// let mut bars: OhlcvSeries<f64> = OhlcvSeries::new();
/// bars.push(Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0));
/// bars.push(Bar::new(103.0, 108.0, 101.0, 107.0, 1_200_000.0));
///
/// assert_eq!(bars.len(), 2);
/// assert_eq!(bars.close(), &[103.0, 107.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OhlcvSeries<T: TaFloat> {
    open: Vec<T>,
    high: Vec<T>,
    low: Vec<T>,
    close: Vec<T>,
    volume: Vec<T>,
}

impl<T: TaFloat> OhlcvSeries<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            open: Vec::with_capacity(capacity),
            high: Vec::with_capacity(capacity),
            low: Vec::with_capacity(capacity),
            close: Vec::with_capacity(capacity),
            volume: Vec::with_capacity(capacity),
        }
    }

    /// Build flat bars from a closing-price sequence.
    #[must_use]
    pub fn from_closes(closes: &[T]) -> Self {
        closes.iter().map(|&c| Bar::from_close(c)).collect()
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns `true` if there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Append a bar.
    pub fn push(&mut self, bar: Bar<T>) {
        self.open.push(bar.open);
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
        self.volume.push(bar.volume);
    }

    /// Get the bar at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bar<T>> {
        Some(Bar {
            open: *self.open.get(index)?,
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
        })
    }

    /// Opening prices.
    #[must_use]
    pub fn open(&self) -> &[T] {
        &self.open
    }

    /// Highest prices.
    #[must_use]
    pub fn high(&self) -> &[T] {
        &self.high
    }

    /// Lowest prices.
    #[must_use]
    pub fn low(&self) -> &[T] {
        &self.low
    }

    /// Closing prices, the input of every indicator.
    #[must_use]
    pub fn close(&self) -> &[T] {
        &self.close
    }

    /// Volumes.
    #[must_use]
    pub fn volume(&self) -> &[T] {
        &self.volume
    }

    /// Iterate over the bars in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = Bar<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl<T: TaFloat> FromIterator<Bar<T>> for OhlcvSeries<T> {
    fn from_iter<I: IntoIterator<Item = Bar<T>>>(iter: I) -> Self {
        let mut series = Self::new();
        series.extend(iter);
        series
    }
}

impl<T: TaFloat> Extend<Bar<T>> for OhlcvSeries<T> {
    fn extend<I: IntoIterator<Item = Bar<T>>>(&mut self, iter: I) {
        for bar in iter {
            self.push(bar);
        }
    }
}
