//! JSON documents read and written by the overlay tool.
//!
//! Input is either a close column with optional time labels or a list of
//! bars, each carrying its own label:
//!
//! ```json
//! { "time": ["2024-01-02", "2024-01-03"], "close": [10.2, 10.4] }
//! { "bars": [{ "time": "2024-01-02", "open": 10.0, "high": 10.5, "low": 9.9, "close": 10.2 }] }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use kline_core::{Bar, IndicatorError, OhlcvSeries, Result};
use kline_indicators::{compute_overlay_bars, KlineOverlay, OverlayConfig};

/// One labelled bar of a `bars` document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BarRecord {
    /// Time label of the bar.
    pub time: String,
    /// Prices and volume.
    #[serde(flatten)]
    pub bar: Bar<f64>,
}

/// Price history accepted by [`build_report`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    /// Full bars with per-bar time labels.
    Bars {
        /// Bars in chronological order.
        bars: Vec<BarRecord>,
    },
    /// A bare close column.
    Closes {
        /// Optional time labels, one per close.
        #[serde(default)]
        time: Option<Vec<String>>,
        /// Closes in chronological order.
        close: Vec<f64>,
    },
}

impl PriceInput {
    /// Number of bars in the document.
    pub fn len(&self) -> usize {
        match self {
            Self::Bars { bars } => bars.len(),
            Self::Closes { close, .. } => close.len(),
        }
    }

    /// Whether the document holds no bars.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split into time labels and bars.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] when a close column comes
    /// with a different number of time labels.
    pub fn into_parts(self) -> Result<(Option<Vec<String>>, OhlcvSeries<f64>)> {
        match self {
            Self::Bars { bars } => {
                let invalid = bars.iter().filter(|r| !r.bar.is_valid()).count();
                if invalid > 0 {
                    warn!(invalid, "bars with inconsistent open/high/low/close");
                }
                let (time, series): (Vec<String>, OhlcvSeries<f64>) =
                    bars.into_iter().map(|r| (r.time, r.bar)).unzip();
                Ok((Some(time), series))
            }
            Self::Closes { time, close } => {
                if let Some(labels) = &time {
                    if labels.len() != close.len() {
                        return Err(IndicatorError::LengthMismatch {
                            expected: close.len(),
                            actual: labels.len(),
                        });
                    }
                }
                Ok((time, OhlcvSeries::from_closes(&close)))
            }
        }
    }
}

/// The overlay together with the labels it is aligned to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayReport {
    /// Number of bars the panels cover.
    pub bars: usize,
    /// Time labels, one per bar, if the input had any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Vec<String>>,
    /// Configuration the panels were computed with.
    pub config: OverlayConfig,
    /// The panels, `null` where a value is undefined.
    pub overlay: KlineOverlay<f64>,
}

/// Compute the overlay for a price document.
///
/// # Errors
///
/// Fails if the configuration is invalid or the time labels do not line up
/// with the closes.
pub fn build_report(input: PriceInput, config: &OverlayConfig) -> Result<OverlayReport> {
    let (time, series) = input.into_parts()?;
    let overlay = compute_overlay_bars(&series, config)?;
    debug!(bars = series.len(), labelled = time.is_some(), "overlay report built");

    Ok(OverlayReport {
        bars: series.len(),
        time,
        config: config.clone(),
        overlay,
    })
}
