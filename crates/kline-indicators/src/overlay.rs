//! The indicator panels drawn alongside a K-line chart.
//!
//! A chart view shows a few moving averages and Bollinger Bands over the
//! candles, plus RSI and MACD in sub-panels. [`compute_overlay`] produces all
//! of them in one pass over the closes, each aligned with the input.

use kline_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::OhlcvSeries,
    series::IndicatorSeries,
};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::momentum::{rsi, RsiConfig};
use crate::trend::{macd, sma, MacdConfig, MacdSeries};
use crate::volatility::{bollinger, BollingerConfig, BollingerSeries};

/// Panel configuration for a chart view.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// Moving-average windows drawn over the candles (default: 5, 10, 20).
    pub ma_windows: Vec<usize>,
    /// RSI sub-panel (default: period 6, Wilder).
    pub rsi: RsiConfig,
    /// MACD sub-panel (default: 12, 26, 9).
    pub macd: MacdConfig,
    /// Bollinger Bands over the candles (default: 20, 2.0).
    pub bollinger: BollingerConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            ma_windows: vec![5, 10, 20],
            rsi: RsiConfig::default(),
            macd: MacdConfig::default(),
            bollinger: BollingerConfig::default(),
        }
    }
}

impl OverlayConfig {
    /// Replace the moving-average windows.
    pub fn with_ma_windows(mut self, windows: Vec<usize>) -> Self {
        self.ma_windows = windows;
        self
    }

    /// Replace the RSI configuration.
    pub fn with_rsi(mut self, rsi: RsiConfig) -> Self {
        self.rsi = rsi;
        self
    }

    /// Replace the MACD configuration.
    pub fn with_macd(mut self, macd: MacdConfig) -> Self {
        self.macd = macd;
        self
    }

    /// Replace the Bollinger configuration.
    pub fn with_bollinger(mut self, bollinger: BollingerConfig) -> Self {
        self.bollinger = bollinger;
        self
    }

    /// Check every panel's parameters.
    ///
    /// # Errors
    ///
    /// Returns the first [`IndicatorError`] found.
    pub fn validate(&self) -> Result<()> {
        let checked = self.check();
        if let Err(err) = &checked {
            warn!(error = %err, "invalid overlay configuration");
        }
        checked
    }

    fn check(&self) -> Result<()> {
        for &window in &self.ma_windows {
            IndicatorError::check_period("ma_window", window)?;
        }
        IndicatorError::check_period("rsi_period", self.rsi.window)?;
        self.macd.validate()?;
        self.bollinger.validate()
    }
}

/// One moving-average line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct MovingAverageLine<T: TaFloat> {
    /// Averaging window.
    pub window: usize,
    /// Line values.
    pub values: IndicatorSeries<T>,
}

/// Every panel of a chart view, aligned with the closes it was computed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct KlineOverlay<T: TaFloat> {
    /// Moving averages, in configuration order.
    pub moving_averages: Vec<MovingAverageLine<T>>,
    /// RSI sub-panel.
    pub rsi: IndicatorSeries<T>,
    /// MACD sub-panel.
    pub macd: MacdSeries<T>,
    /// Bollinger Bands.
    pub bollinger: BollingerSeries<T>,
}

impl<T: TaFloat> KlineOverlay<T> {
    /// Number of bars covered.
    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    /// Whether no bars are covered.
    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }

    /// The moving average with the given window, if configured.
    pub fn moving_average(&self, window: usize) -> Option<&IndicatorSeries<T>> {
        self.moving_averages
            .iter()
            .find(|line| line.window == window)
            .map(|line| &line.values)
    }
}

/// Compute every configured panel over `closes`.
///
/// # Errors
///
/// Returns an error if the configuration fails [`OverlayConfig::validate`].
/// Short or empty input is not an error.
///
/// # Example
///
/// ```rust
/// use kline_indicators::{compute_overlay, OverlayConfig};
///
/// let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
/// let overlay = compute_overlay(&closes, &OverlayConfig::default()).unwrap();
///
/// assert_eq!(overlay.len(), 30);
/// assert_eq!(overlay.moving_average(5).unwrap().first_defined(), Some(4));
/// assert_eq!(overlay.rsi[6], Some(100.0));
/// ```
pub fn compute_overlay<T: TaFloat>(
    closes: &[T],
    config: &OverlayConfig,
) -> Result<KlineOverlay<T>> {
    config.validate()?;
    debug!(
        bars = closes.len(),
        ma_windows = ?config.ma_windows,
        rsi_period = config.rsi.window,
        macd_fast = config.macd.fast,
        macd_slow = config.macd.slow,
        macd_signal = config.macd.signal,
        boll_period = config.bollinger.window,
        boll_std = config.bollinger.num_std,
        "computing kline overlay"
    );

    let moving_averages = config
        .ma_windows
        .iter()
        .map(|&window| {
            Ok(MovingAverageLine {
                window,
                values: sma(closes, window)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(KlineOverlay {
        moving_averages,
        rsi: rsi(closes, config.rsi.window, config.rsi.smoothing)?,
        macd: macd(
            closes,
            config.macd.fast,
            config.macd.slow,
            config.macd.signal,
        )?,
        bollinger: bollinger(closes, &config.bollinger)?,
    })
}

/// Compute every configured panel over the closes of `bars`.
///
/// # Errors
///
/// Returns an error if the configuration fails [`OverlayConfig::validate`].
pub fn compute_overlay_bars<T: TaFloat>(
    bars: &OhlcvSeries<T>,
    config: &OverlayConfig,
) -> Result<KlineOverlay<T>> {
    compute_overlay(bars.close(), config)
}
