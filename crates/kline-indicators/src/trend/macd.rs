//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator built from two EMAs of the
//! close and an EMA of their difference.

use kline_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    series::IndicatorSeries,
    traits::{Indicator, StreamingIndicator},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ema::{ema, EmaAccumulator};

/// Configuration for the MACD indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MacdConfig {
    /// Fast EMA span (default: 12).
    pub fast: usize,
    /// Slow EMA span (default: 26).
    pub slow: usize,
    /// Signal line span (default: 9).
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration.
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// Set the fast span.
    pub fn with_fast(mut self, fast: usize) -> Self {
        self.fast = fast;
        self
    }

    /// Set the slow span.
    pub fn with_slow(mut self, slow: usize) -> Self {
        self.slow = slow;
        self
    }

    /// Set the signal span.
    pub fn with_signal(mut self, signal: usize) -> Self {
        self.signal = signal;
        self
    }

    /// Check that all three spans are positive.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] naming the first zero span.
    pub fn validate(&self) -> Result<()> {
        IndicatorError::check_period("fast", self.fast)?;
        IndicatorError::check_period("slow", self.slow)?;
        IndicatorError::check_period("signal", self.signal)?;
        Ok(())
    }
}

/// The three MACD lines, each aligned with the input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MacdSeries<T: TaFloat> {
    /// Fast EMA minus slow EMA.
    pub dif: IndicatorSeries<T>,
    /// Signal line, an EMA of `dif`.
    pub dea: IndicatorSeries<T>,
    /// `dif - dea`.
    pub hist: IndicatorSeries<T>,
}

/// A single streaming MACD reading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MacdOutput<T: TaFloat> {
    /// Fast EMA minus slow EMA.
    pub dif: T,
    /// Signal line.
    pub dea: T,
    /// `dif - dea`.
    pub hist: T,
}

/// MACD of `series`: `dif = ema(fast) - ema(slow)`, `dea = signal EMA of dif`,
/// `hist = dif - dea`.
///
/// All three lines are defined at every index of a non-empty series.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if any span is zero.
///
/// # Example
///
/// ```rust
/// use kline_indicators::macd;
///
/// let closes = [10.0, 10.5, 11.0, 10.8, 11.2];
/// let out = macd(&closes, 12, 26, 9).unwrap();
/// assert_eq!(out.dif.len(), closes.len());
/// assert_eq!(out.dea[0], Some(0.0));
/// ```
pub fn macd<T: TaFloat>(
    series: &[T],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdSeries<T>> {
    MacdConfig::new(fast, slow, signal).validate()?;

    let ema_fast = ema(series, fast)?;
    let ema_slow = ema(series, slow)?;
    let dif = ema_fast.zip_with(&ema_slow, |f, s| f - s)?;
    let dea = macd_signal(&dif, signal)?;
    let hist = dif.zip_with(&dea, |d, s| d - s)?;

    Ok(MacdSeries { dif, dea, hist })
}

/// Signal line over an arbitrary DIF series.
///
/// The first defined entry seeds the line directly. An undefined entry yields
/// an undefined signal value, and the next defined entry reseeds the line
/// rather than blending with the value before the gap.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `signal == 0`.
pub fn macd_signal<T: TaFloat>(
    dif: &IndicatorSeries<T>,
    signal: usize,
) -> Result<IndicatorSeries<T>> {
    IndicatorError::check_period("signal", signal)?;
    let mut acc = EmaAccumulator::new(signal);
    Ok(dif.iter().map(|x| acc.next_opt(x)).collect())
}

/// Moving Average Convergence Divergence indicator.
#[derive(Debug, Clone)]
pub struct Macd<T: TaFloat> {
    config: MacdConfig,
    fast: EmaAccumulator<T>,
    slow: EmaAccumulator<T>,
    signal: EmaAccumulator<T>,
    last: Option<MacdOutput<T>>,
}

impl<T: TaFloat> Indicator<T> for Macd<T> {
    type Output = MacdSeries<T>;
    type Config = MacdConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            fast: EmaAccumulator::new(config.fast),
            slow: EmaAccumulator::new(config.slow),
            signal: EmaAccumulator::new(config.signal),
            last: None,
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
        macd(close, self.config.fast, self.config.slow, self.config.signal)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Macd<T> {
    type StreamingOutput = Option<MacdOutput<T>>;

    fn update(&mut self, close: T) -> Result<Self::StreamingOutput> {
        self.config.validate()?;

        let dif = self.fast.next(close) - self.slow.next(close);
        let dea = self.signal.next(dif);
        self.last = Some(MacdOutput {
            dif,
            dea,
            hist: dif - dea,
        });
        Ok(self.last)
    }

    fn current(&self) -> Self::StreamingOutput {
        self.last
    }

    fn is_ready(&self) -> bool {
        self.last.is_some()
    }

    fn reset(&mut self) {
        self.fast.reset();
        self.slow.reset();
        self.signal.reset();
        self.last = None;
    }
}
