//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes to evaluate overbought or oversold conditions.

use kline_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    series::IndicatorSeries,
    traits::{Indicator, StreamingIndicator},
    utils::{split_change, window_mean},
    window::RingBuffer,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How average gain and average loss are formed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RsiSmoothing {
    /// Seeded by a simple average of the first `period` deltas, then carried
    /// forward with factor `1 / period`.
    #[default]
    Wilder,
    /// Plain mean of the trailing `period` deltas, recomputed every bar, with
    /// `RS = avg_gain / (avg_loss + 1e-10)`.
    ///
    /// The first reading is at index `period`, once `period` real deltas
    /// exist. The pandas strategy code counts the missing delta at bar 0 as a
    /// zero gain and loss and so reports one bar earlier, at `period - 1`;
    /// that extra reading is not produced here.
    Simple,
}

/// Configuration for the RSI indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RsiConfig {
    /// The lookback period (default: 6).
    pub window: usize,
    /// Averaging mode (default: Wilder).
    pub smoothing: RsiSmoothing,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            window: 6,
            smoothing: RsiSmoothing::Wilder,
        }
    }
}

impl RsiConfig {
    /// Create a new Wilder RSI configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Set the averaging mode.
    pub fn with_smoothing(mut self, smoothing: RsiSmoothing) -> Self {
        self.smoothing = smoothing;
        self
    }
}

#[derive(Debug, Clone)]
enum Averages<T: TaFloat> {
    Wilder {
        deltas: usize,
        avg_gain: T,
        avg_loss: T,
    },
    Simple {
        changes: RingBuffer<(T, T)>,
    },
}

/// Running gain/loss averages of an RSI, fed one close at a time.
///
/// Shared by the batch and streaming RSI. The first defined reading comes
/// after `period` price changes, i.e. at bar index `period`.
#[derive(Debug, Clone)]
pub struct RsiAccumulator<T: TaFloat> {
    period: usize,
    prev_close: Option<T>,
    averages: Averages<T>,
}

impl<T: TaFloat> RsiAccumulator<T> {
    /// Accumulator for the given period and mode. The period is expected to be
    /// positive.
    pub fn new(period: usize, smoothing: RsiSmoothing) -> Self {
        let averages = match smoothing {
            RsiSmoothing::Wilder => Averages::Wilder {
                deltas: 0,
                avg_gain: T::ZERO,
                avg_loss: T::ZERO,
            },
            RsiSmoothing::Simple => Averages::Simple {
                changes: RingBuffer::new(period),
            },
        };
        Self {
            period,
            prev_close: None,
            averages,
        }
    }

    /// Feed the next close and return the RSI at that bar, if defined.
    pub fn next(&mut self, close: T) -> Option<T> {
        let prev = self.prev_close.replace(close)?;
        let (gain, loss) = split_change(close - prev);
        let period = <T as TaFloat>::from_usize(self.period);

        match &mut self.averages {
            Averages::Wilder {
                deltas,
                avg_gain,
                avg_loss,
            } => {
                *deltas += 1;
                if *deltas < self.period {
                    *avg_gain = *avg_gain + gain;
                    *avg_loss = *avg_loss + loss;
                } else if *deltas == self.period {
                    *avg_gain = (*avg_gain + gain) / period;
                    *avg_loss = (*avg_loss + loss) / period;
                } else {
                    let carry = <T as TaFloat>::from_usize(self.period - 1);
                    *avg_gain = (*avg_gain * carry + gain) / period;
                    *avg_loss = (*avg_loss * carry + loss) / period;
                }
            }
            Averages::Simple { changes } => {
                changes.push((gain, loss));
            }
        }

        self.value()
    }

    /// The RSI after the last close fed in, if defined.
    pub fn value(&self) -> Option<T> {
        match &self.averages {
            Averages::Wilder {
                deltas,
                avg_gain,
                avg_loss,
            } => (*deltas >= self.period).then(|| wilder_rsi(*avg_gain, *avg_loss)),
            Averages::Simple { changes } => changes.is_full().then(|| {
                let avg_gain = window_mean(changes.iter().map(|(g, _)| g), self.period);
                let avg_loss = window_mean(changes.iter().map(|(_, l)| l), self.period);
                let rs = avg_gain / (avg_loss + T::NEAR_ZERO);
                T::HUNDRED - T::HUNDRED / (T::ONE + rs)
            }),
        }
    }

    /// Forget every close seen so far.
    pub fn reset(&mut self) {
        self.prev_close = None;
        match &mut self.averages {
            Averages::Wilder {
                deltas,
                avg_gain,
                avg_loss,
            } => {
                *deltas = 0;
                *avg_gain = T::ZERO;
                *avg_loss = T::ZERO;
            }
            Averages::Simple { changes } => changes.clear(),
        }
    }
}

/// A numerically zero average loss saturates the reading at exactly 100.
#[inline]
fn wilder_rsi<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
    if avg_loss < T::NEAR_ZERO {
        return T::HUNDRED;
    }
    let rs = avg_gain / avg_loss;
    T::HUNDRED - T::HUNDRED / (T::ONE + rs)
}

/// Wilder-smoothed RSI of `series`.
///
/// Entries `0..period` are undefined, and a series shorter than `period + 1`
/// is undefined throughout. The reading at index `period` uses the simple
/// averages of the first `period` gains and losses; later readings carry the
/// averages forward as `(avg * (period - 1) + x) / period`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period == 0`.
///
/// # Example
///
/// ```rust
/// use kline_indicators::rsi_wilder;
///
/// let out = rsi_wilder(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 6).unwrap();
/// assert_eq!(out.first_defined(), Some(6));
/// assert_eq!(out[6], Some(100.0));
/// ```
pub fn rsi_wilder<T: TaFloat>(series: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    rsi(series, period, RsiSmoothing::Wilder)
}

/// RSI of `series` with the given averaging mode.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period == 0`.
pub fn rsi<T: TaFloat>(
    series: &[T],
    period: usize,
    smoothing: RsiSmoothing,
) -> Result<IndicatorSeries<T>> {
    IndicatorError::check_period("period", period)?;
    let mut acc = RsiAccumulator::new(period, smoothing);
    Ok(series.iter().map(|&close| acc.next(close)).collect())
}

/// Relative Strength Index indicator.
///
/// # Formula
///
/// - RS = Average Gain / Average Loss
/// - RSI = 100 - (100 / (1 + RS))
#[derive(Debug, Clone)]
pub struct Rsi<T: TaFloat> {
    config: RsiConfig,
    acc: RsiAccumulator<T>,
}

impl<T: TaFloat> Indicator<T> for Rsi<T> {
    type Output = IndicatorSeries<T>;
    type Config = RsiConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            acc: RsiAccumulator::new(config.window, config.smoothing),
            config,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        self.config.window.saturating_add(1)
    }

    fn compute(&self, close: &[T]) -> Result<Self::Output> {
        rsi(close, self.config.window, self.config.smoothing)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Rsi<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, close: T) -> Result<Option<T>> {
        IndicatorError::check_period("period", self.config.window)?;
        Ok(self.acc.next(close))
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
