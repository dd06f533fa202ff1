//! Bollinger Bands indicator.
//!
//! Bollinger Bands are volatility bands placed above and below a moving average.

use kline_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    series::IndicatorSeries,
    traits::{Indicator, StreamingIndicator},
    utils::{window_deviation, window_mean},
    window::RingBuffer,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which standard deviation sets the band width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BandDeviation {
    /// Divide the squared deviations by `period`.
    #[default]
    Population,
    /// Divide the squared deviations by `period - 1`.
    Sample,
}

impl BandDeviation {
    /// Delta degrees of freedom subtracted from the window length.
    pub fn ddof(self) -> usize {
        match self {
            Self::Population => 0,
            Self::Sample => 1,
        }
    }
}

/// Configuration for Bollinger Bands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BollingerConfig {
    /// The window size for the moving average (default: 20).
    pub window: usize,
    /// Number of standard deviations for bands (default: 2.0).
    pub num_std: f64,
    /// Deviation convention (default: population).
    pub deviation: BandDeviation,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            window: 20,
            num_std: 2.0,
            deviation: BandDeviation::Population,
        }
    }
}

impl BollingerConfig {
    /// Create a new Bollinger Bands configuration.
    pub fn new(window: usize, num_std: f64) -> Self {
        Self {
            window,
            num_std,
            deviation: BandDeviation::Population,
        }
    }

    /// Set the deviation convention.
    pub fn with_deviation(mut self, deviation: BandDeviation) -> Self {
        self.deviation = deviation;
        self
    }

    /// Check the window, the multiplier, and their combination.
    ///
    /// # Errors
    ///
    /// - [`IndicatorError::InvalidPeriod`] for a zero window.
    /// - [`IndicatorError::InvalidParameter`] for a negative or non-finite
    ///   multiplier, or a sample deviation over a window of one.
    pub fn validate(&self) -> Result<()> {
        IndicatorError::check_period("period", self.window)?;
        if !self.num_std.is_finite() || self.num_std < 0.0 {
            return Err(IndicatorError::InvalidParameter {
                name: "num_std",
                value: self.num_std.to_string(),
                expected: "a finite value >= 0",
            });
        }
        if self.deviation == BandDeviation::Sample && self.window < 2 {
            return Err(IndicatorError::InvalidParameter {
                name: "period",
                value: self.window.to_string(),
                expected: "at least 2 for the sample deviation",
            });
        }
        Ok(())
    }
}

/// A single set of band values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct BollingerOutput<T: TaFloat> {
    /// Middle band (SMA).
    pub middle: T,
    /// Upper band (middle + k * std).
    pub upper: T,
    /// Lower band (middle - k * std).
    pub lower: T,
}

impl<T: TaFloat> BollingerOutput<T> {
    /// Distance between the outer bands.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }
}

/// Bollinger Bands series output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct BollingerSeries<T: TaFloat> {
    /// Middle band series.
    pub middle: IndicatorSeries<T>,
    /// Upper band series.
    pub upper: IndicatorSeries<T>,
    /// Lower band series.
    pub lower: IndicatorSeries<T>,
}

impl<T: TaFloat> BollingerSeries<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            middle: IndicatorSeries::with_capacity(capacity),
            upper: IndicatorSeries::with_capacity(capacity),
            lower: IndicatorSeries::with_capacity(capacity),
        }
    }

    fn push(&mut self, value: Option<BollingerOutput<T>>) {
        self.middle.push(value.map(|b| b.middle));
        self.upper.push(value.map(|b| b.upper));
        self.lower.push(value.map(|b| b.lower));
    }

    /// Number of bars covered.
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Whether no bars are covered.
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Bands over one full window, oldest value first.
fn bands<T, I>(window: I, period: usize, num_std: T, ddof: usize) -> BollingerOutput<T>
where
    T: TaFloat,
    I: Iterator<Item = T> + Clone,
{
    let middle = window_mean(window.clone(), period);
    let std = window_deviation(window, period, middle, ddof);
    BollingerOutput {
        middle,
        upper: middle + num_std * std,
        lower: middle - num_std * std,
    }
}

/// Bollinger Bands of `series` with the population deviation.
///
/// Entries `0..period - 1` are undefined in all three lines. A flat window
/// has zero deviation, so the bands collapse onto the middle line.
///
/// # Errors
///
/// - [`IndicatorError::InvalidPeriod`] if `period == 0`.
/// - [`IndicatorError::InvalidParameter`] if `num_std` is negative or not
///   finite.
///
/// # Example
///
/// ```rust
/// use kline_indicators::bollinger_bands;
///
/// let out = bollinger_bands(&[5.0, 5.0, 5.0, 5.0, 5.0], 3, 2.0).unwrap();
/// assert_eq!(out.upper[2], Some(5.0));
/// assert_eq!(out.lower[4], Some(5.0));
/// ```
pub fn bollinger_bands<T: TaFloat>(
    series: &[T],
    period: usize,
    num_std: T,
) -> Result<BollingerSeries<T>> {
    bollinger(series, &BollingerConfig::new(period, num_std.to_f64_lossy()))
}

/// Bollinger Bands of `series` for a full configuration.
///
/// # Errors
///
/// See [`BollingerConfig::validate`].
pub fn bollinger<T: TaFloat>(series: &[T], config: &BollingerConfig) -> Result<BollingerSeries<T>> {
    config.validate()?;

    let period = config.window;
    let num_std = T::from_f64_lossy(config.num_std);
    let ddof = config.deviation.ddof();

    let mut out = BollingerSeries::with_capacity(series.len());
    for i in 0..series.len() {
        let value = (i + 1 >= period).then(|| {
            let window = &series[i + 1 - period..=i];
            bands(window.iter().copied(), period, num_std, ddof)
        });
        out.push(value);
    }
    Ok(out)
}

/// Bollinger Bands indicator.
///
/// # Formula
///
/// - Middle Band = SMA(close, n)
/// - Upper Band = Middle Band + k * StdDev(close, n)
/// - Lower Band = Middle Band - k * StdDev(close, n)
#[derive(Debug, Clone)]
pub struct BollingerBands<T: TaFloat> {
    config: BollingerConfig,
    buffer: RingBuffer<T>,
}

impl<T: TaFloat> Indicator<T> for BollingerBands<T> {
    type Output = BollingerSeries<T>;
    type Config = BollingerConfig;

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
        bollinger(close, &self.config)
    }
}

impl<T: TaFloat> StreamingIndicator<T> for BollingerBands<T> {
    type StreamingOutput = Option<BollingerOutput<T>>;

    fn update(&mut self, close: T) -> Result<Self::StreamingOutput> {
        self.config.validate()?;
        self.buffer.push(close);
        Ok(self.current())
    }

    fn current(&self) -> Self::StreamingOutput {
        self.buffer.is_full().then(|| {
            bands(
                self.buffer.iter(),
                self.config.window,
                T::from_f64_lossy(self.config.num_std),
                self.config.deviation.ddof(),
            )
        })
    }

    fn is_ready(&self) -> bool {
        self.buffer.is_full()
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }
}
