//! Core trait definitions for indicators.
//!
//! Every indicator offers a batch computation over a whole price history and,
//! through [`StreamingIndicator`], an incremental one fed a bar at a time.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::num::TaFloat;
use crate::ohlcv::{Bar, OhlcvSeries};

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

/// Configuration trait bounds for indicator configurations.
#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where
    T: Clone + Default + Serialize + DeserializeOwned + Send + Sync
{
}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + Default + Send + Sync {}

/// Core trait for technical indicators.
///
/// # Associated Types
///
/// - `Output` - The type returned by batch calculations, aligned with the input
/// - `Config` - Configuration parameters
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl<T: TaFloat> Indicator<T> for Sma<T> {
///     type Output = IndicatorSeries<T>;
///     type Config = SmaConfig;
///
///     fn new(config: Self::Config) -> Self { /* ... */ }
///     fn config(&self) -> &Self::Config { &self.config }
///     fn min_periods(&self) -> usize { self.config.window }
///     fn compute(&self, close: &[T]) -> Result<Self::Output> { sma(close, self.config.window) }
/// }
/// ```
pub trait Indicator<T: TaFloat>: Send + Sync {
    /// The output type of calculations.
    type Output;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    ///
    /// Configuration is validated lazily, on first computation or update.
    fn new(config: Self::Config) -> Self;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;

    /// Number of bars needed before the first defined output.
    fn min_periods(&self) -> usize;

    /// Batch computation over a closing-price history.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configuration is invalid.
    fn compute(&self, close: &[T]) -> Result<Self::Output>;

    /// Batch computation over K-line bars, reading their closes.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configuration is invalid.
    fn calculate(&self, data: &OhlcvSeries<T>) -> Result<Self::Output> {
        self.compute(data.close())
    }
}

/// Extension trait for streaming (incremental) indicator computation.
///
/// Feeding the bars one at a time produces, at each step, exactly the value
/// the batch computation yields at the same index.
///
/// # Example
///
/// ```rust,ignore
/// let mut rsi = Rsi::<f64>::new(RsiConfig::default());
///
/// for close in closes {
///     if let Some(value) = rsi.update(close)? {
///         println!("RSI: {value}");
///     }
/// }
/// ```
pub trait StreamingIndicator<T: TaFloat>: Indicator<T> {
    /// The output type of a single streaming update.
    /// This is `Option<T>` for scalar indicators or
    /// `Option<OutputStruct>` for multi-value indicators.
    type StreamingOutput;

    /// Update the indicator with the next closing price.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn update(&mut self, close: T) -> Result<Self::StreamingOutput>;

    /// Update the indicator with the next bar.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn update_bar(&mut self, bar: &Bar<T>) -> Result<Self::StreamingOutput> {
        self.update(bar.close)
    }

    /// Get the current indicator value without updating.
    fn current(&self) -> Self::StreamingOutput;

    /// Check if the indicator has received enough data for valid output.
    fn is_ready(&self) -> bool;

    /// Forget every bar seen so far.
    fn reset(&mut self);
}
