//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA gives more weight to recent prices. Unlike the SMA it has no warmup
//! gap: the first value seeds the average directly.

use kline_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    series::IndicatorSeries,
    traits::{Indicator, StreamingIndicator},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Running state of an exponential average.
///
/// The first value fed in seeds the average as-is; every later value `x` is
/// blended as `x * k + prev * (1 - k)` with `k = 2 / (span + 1)`.
///
/// Shared by the batch and streaming EMA and by the MACD signal line.
#[derive(Debug, Clone)]
pub struct EmaAccumulator<T: TaFloat> {
    alpha: T,
    prev: Option<T>,
}

impl<T: TaFloat> EmaAccumulator<T> {
    /// Accumulator for the given span. The span is expected to be positive.
    pub fn new(span: usize) -> Self {
        Self {
            alpha: T::TWO / (<T as TaFloat>::from_usize(span) + T::ONE),
            prev: None,
        }
    }

    /// Feed one value and return the updated average.
    #[inline]
    pub fn next(&mut self, x: T) -> T {
        let value = match self.prev {
            Some(prev) => x * self.alpha + prev * (T::ONE - self.alpha),
            None => x,
        };
        self.prev = Some(value);
        value
    }

    /// Feed one possibly undefined value.
    ///
    /// An undefined input yields an undefined output and drops the running
    /// average, so the next defined value reseeds instead of blending.
    #[inline]
    pub fn next_opt(&mut self, x: Option<T>) -> Option<T> {
        match x {
            Some(x) => Some(self.next(x)),
            None => {
                self.prev = None;
                None
            }
        }
    }

    /// The current average, if any value has been fed.
    pub fn value(&self) -> Option<T> {
        self.prev
    }

    /// Drop the running average.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

/// Exponential moving average of `series` with smoothing constant
/// `2 / (span + 1)`.
///
/// Every entry is defined: `out[0] = series[0]` and
/// `out[i] = series[i] * k + out[i - 1] * (1 - k)`. An empty series yields an
/// empty result.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `span == 0`.
///
/// # Example
///
/// ```rust
/// use kline_indicators::ema;
///
/// let out = ema(&[10.0, 10.0, 10.0, 10.0], 3).unwrap();
/// assert_eq!(out.as_slice(), &[Some(10.0); 4]);
/// ```
pub fn ema<T: TaFloat>(series: &[T], span: usize) -> Result<IndicatorSeries<T>> {
    IndicatorError::check_period("span", span)?;
    let mut acc = EmaAccumulator::new(span);
    Ok(series.iter().map(|&x| Some(acc.next(x))).collect())
}

/// Configuration for the EMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmaConfig {
    /// The span of the average (default: 12).
    pub span: usize,
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self { span: 12 }
    }
}

impl EmaConfig {
    /// Create a new EMA configuration with the given span.
    pub fn new(span: usize) -> Self {
        Self { span }
    }
}

/// Exponential Moving Average indicator.
///
/// # Formula
///
/// - k = 2 / (span + 1)
/// - EMA = Price * k + EMA(previous) * (1 - k)
#[derive(Debug, Clone)]
pub struct Ema<T: TaFloat> {
    config: EmaConfig,
    acc: EmaAccumulator<T>,
}

impl<T: TaFloat> Indicator<T> for Ema<T> {
    type Output = IndicatorSeries<T>;
    type Config = EmaConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            acc: EmaAccumulator::new(config.span),
            config,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, close: &[T]) -> Result<Self::Output> {
        ema(close, self.config.span)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Ema<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, close: T) -> Result<Option<T>> {
        IndicatorError::check_period("span", self.config.span)?;
        Ok(Some(self.acc.next(close)))
    }

    fn current(&self) -> Option<T> {
        self.acc.value()
    }

    fn is_ready(&self) -> bool {
        self.acc.value().is_some()
    }

    fn reset(&mut self) {
        self.acc.reset();
    }
}
