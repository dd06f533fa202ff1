//! Indicator output container.
//!
//! An [`IndicatorSeries`] holds one entry per input bar. Each entry is either a
//! value or undefined (`None`), so "not enough history" can never be confused
//! with a legitimate zero or negative reading.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::TaFloat;

/// An indicator series aligned index-for-index with its input prices.
///
/// # Example
///
/// ```rust
/// use kline_core::IndicatorSeries;
///
/// let series: IndicatorSeries<f64> = IndicatorSeries::from_vec(vec![None, None, Some(2.0)]);
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.get(1), None);
/// assert_eq!(series.get(2), Some(2.0));
/// assert_eq!(series.first_defined(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = "T: TaFloat"))]
pub struct IndicatorSeries<T: TaFloat> {
    data: Vec<Option<T>>,
}

impl<T: TaFloat> Default for IndicatorSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> IndicatorSeries<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series of `len` undefined entries.
    #[must_use]
    pub fn undefined(len: usize) -> Self {
        Self {
            data: vec![None; len],
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<Option<T>>) -> Self {
        Self { data }
    }

    /// Returns the number of entries, defined or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append an entry.
    pub fn push(&mut self, value: Option<T>) {
        self.data.push(value);
    }

    /// Value at `index`, or `None` when undefined or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied().flatten()
    }

    /// Returns `true` if the entry at `index` holds a value.
    #[must_use]
    pub fn is_defined(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Index of the first defined entry, i.e. the warmup length.
    #[must_use]
    pub fn first_defined(&self) -> Option<usize> {
        self.data.iter().position(Option::is_some)
    }

    /// Number of defined entries.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }

    /// The most recent entry, if it is defined.
    #[must_use]
    pub fn last_value(&self) -> Option<T> {
        self.data.last().copied().flatten()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
        self.data.iter().copied()
    }

    /// Iterate over `(index, value)` pairs of defined entries.
    pub fn defined(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|x| (i, x)))
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.data
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Option<T>> {
        self.data
    }

    /// Apply `f` to every defined entry.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        self.data.iter().map(|v| v.map(&f)).collect()
    }

    /// Combine two aligned series element-wise.
    ///
    /// The result is defined only where both inputs are defined.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if the lengths differ.
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        if self.len() != other.len() {
            return Err(IndicatorError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| match (a, b) {
                (Some(a), Some(b)) => Some(f(*a, *b)),
                _ => None,
            })
            .collect())
    }

    /// Pair each defined value with its time label, dropping undefined entries.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if `labels` is not exactly as
    /// long as the series.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kline_core::IndicatorSeries;
    ///
    /// let series = IndicatorSeries::from_vec(vec![None, Some(1.5), Some(2.5)]);
    /// let labels = ["2024-01-02", "2024-01-03", "2024-01-04"];
    /// let points = series.points(&labels).unwrap();
    ///
    /// assert_eq!(points, vec![(&"2024-01-03", 1.5), (&"2024-01-04", 2.5)]);
    /// ```
    pub fn points<'a, L>(&self, labels: &'a [L]) -> Result<Vec<(&'a L, T)>> {
        if labels.len() != self.len() {
            return Err(IndicatorError::LengthMismatch {
                expected: self.len(),
                actual: labels.len(),
            });
        }

        Ok(self.defined().map(|(i, v)| (&labels[i], v)).collect())
    }
}

impl<T: TaFloat> Index<usize> for IndicatorSeries<T> {
    type Output = Option<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: TaFloat> FromIterator<Option<T>> for IndicatorSeries<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: TaFloat> IntoIterator for IndicatorSeries<T> {
    type Item = Option<T>;
    type IntoIter = std::vec::IntoIter<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: TaFloat> From<Vec<Option<T>>> for IndicatorSeries<T> {
    fn from(data: Vec<Option<T>>) -> Self {
        Self { data }
    }
}
