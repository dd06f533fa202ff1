//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the previous n closing prices.

use kline_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    series::IndicatorSeries,
    traits::{Indicator, StreamingIndicator},
    utils::{rolling_mean, window_mean},
    window::RingBuffer,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simple moving average of `series` over a trailing window of `period` bars.
///
/// Entries `0..period - 1` are undefined; entry `i >= period - 1` is the mean of
/// `series[i + 1 - period..=i]`. A period longer than the series leaves every
/// entry undefined.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidPeriod`] if `period == 0`.
///
/// # Example
///
/// ```rust
/// use kline_indicators::sma;
///
/// let ma = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
/// assert_eq!(ma.as_slice(), &[None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
pub fn sma<T: TaFloat>(series: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    IndicatorError::check_period("period", period)?;
    Ok(rolling_mean(series, period))
}

/// Configuration for the SMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmaConfig {
    /// The window size for the moving average (default: 20).
    pub window: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Simple Moving Average indicator.
///
/// # Formula
///
/// SMA = (P1 + P2 + ... + Pn) / n
#[derive(Debug, Clone)]
pub struct Sma<T: TaFloat> {
    config: SmaConfig,
    buffer: RingBuffer<T>,
}

impl<T: TaFloat> Indicator<T> for Sma<T> {
    type Output = IndicatorSeries<T>;
    type Config = SmaConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            buffer: RingBuffer::new(config.window),
            config,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn min_periods(&self) -> usize {
        self.config.window
    }

    fn compute(&self, close: &[T]) -> Result<Self::Output> {
        sma(close, self.config.window)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for Sma<T> {
    type StreamingOutput = Option<T>;

    fn update(&mut self, close: T) -> Result<Option<T>> {
        IndicatorError::check_period("period", self.config.window)?;
        self.buffer.push(close);
        Ok(self.current())
    }

    fn current(&self) -> Option<T> {
        if self.buffer.is_full() {
            Some(window_mean(self.buffer.iter(), self.config.window))
        } else {
            None
        }
    }

    fn is_ready(&self) -> bool {
        self.buffer.is_full()
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kline_core::{Bar, OhlcvSeries};

    #[test]
    fn test_sma_default_config() {
        assert_eq!(SmaConfig::default().window, 20);
    }

    #[test]
    fn test_sma_known_values() {
        let result = sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(
            result.as_slice(),
            &[None, None, Some(2.0), Some(3.0), Some(4.0)]
        );
    }

    #[test]
    fn test_sma_window_mean_golden() {
        let closes = [10.5, 11.25, 9.75, 12.0, 13.5, 12.75];
        let result = sma(&closes, 4).unwrap();

        assert_eq!(result.first_defined(), Some(3));
        assert_relative_eq!(result[3].unwrap(), (10.5 + 11.25 + 9.75 + 12.0) / 4.0);
        assert_relative_eq!(result[4].unwrap(), (11.25 + 9.75 + 12.0 + 13.5) / 4.0);
        assert_relative_eq!(result[5].unwrap(), (9.75 + 12.0 + 13.5 + 12.75) / 4.0);
    }

    #[test]
    fn test_sma_period_longer_than_series() {
        let result = sma(&[1.0, 2.0], 5).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.defined_count(), 0);
    }

    #[test]
    fn test_sma_period_one_is_identity() {
        let closes = [3.0, -1.0, 0.0];
        let result = sma(&closes, 1).unwrap();
        assert_eq!(result.as_slice(), &[Some(3.0), Some(-1.0), Some(0.0)]);
    }

    #[test]
    fn test_sma_empty_input() {
        assert!(sma::<f64>(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_sma_invalid_period() {
        assert_eq!(
            sma(&[1.0, 2.0, 3.0], 0),
            Err(IndicatorError::InvalidPeriod {
                name: "period",
                value: 0
            })
        );
    }

    #[test]
    fn test_sma_calculate_reads_closes() {
        let bars: OhlcvSeries<f64> = vec![
            Bar::new(9.0, 12.0, 8.0, 10.0, 100.0),
            Bar::new(10.0, 13.0, 9.0, 12.0, 100.0),
            Bar::new(12.0, 15.0, 11.0, 14.0, 100.0),
        ]
        .into_iter()
        .collect();

        let ma = Sma::<f64>::new(SmaConfig::new(2));
        let result = ma.calculate(&bars).unwrap();
        assert_eq!(result.as_slice(), &[None, Some(11.0), Some(13.0)]);
    }

    #[test]
    fn test_sma_streaming_equals_batch() {
        let closes = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
        let config = SmaConfig::new(5);
        let batch = Sma::<f64>::new(config.clone()).compute(&closes).unwrap();

        let mut streaming = Sma::<f64>::new(config);
        for (i, &close) in closes.iter().enumerate() {
            assert_eq!(streaming.update(close).unwrap(), batch[i]);
        }
        assert!(streaming.is_ready());
    }

    #[test]
    fn test_sma_streaming_huge_window() {
        let mut ma = Sma::<f64>::new(SmaConfig::new(usize::MAX / 64));
        for close in [1.0, 2.0, 3.0] {
            assert_eq!(ma.update(close).unwrap(), None);
        }
        assert!(!ma.is_ready());
        assert_eq!(ma.compute(&[1.0, 2.0, 3.0]).unwrap().defined_count(), 0);
    }

    #[test]
    fn test_sma_streaming_reset() {
        let mut ma = Sma::<f64>::new(SmaConfig::new(2));
        ma.update(1.0).unwrap();
        ma.update(2.0).unwrap();
        assert_eq!(ma.current(), Some(1.5));

        ma.reset();
        assert!(!ma.is_ready());
        assert_eq!(ma.update(7.0).unwrap(), None);
    }

    #[test]
    fn test_sma_streaming_invalid_window() {
        let mut ma = Sma::<f64>::new(SmaConfig::new(0));
        assert!(ma.update(1.0).is_err());
        assert!(ma.compute(&[1.0]).is_err());
    }
}
