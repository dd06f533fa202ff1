//! # kline-indicators
//!
//! Technical indicators for K-line (candlestick) charts.
//!
//! Indicators are organized into three categories:
//!
//! - **Trend**: SMA, EMA, MACD
//! - **Momentum**: RSI (Wilder or simple averaging)
//! - **Volatility**: Bollinger Bands
//!
//! Every indicator is available as a free function over a slice of closes,
//! returning an [`IndicatorSeries`](kline_core::IndicatorSeries) aligned with
//! the input, and as a configurable type with batch and streaming modes.
//! [`compute_overlay`] bundles the panels a chart view draws.
//!
//! # Example
//!
//! ```
//! use kline_indicators::prelude::*;
//! use kline_core::prelude::*;
//!
//! let closes = [44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42];
//!
//! // Batch
//! let batch = rsi_wilder(&closes, 6).unwrap();
//! assert_eq!(batch.first_defined(), Some(6));
//!
//! // Streaming
//! let mut indicator = Rsi::<f64>::new(RsiConfig::default());
//! for (i, &close) in closes.iter().enumerate() {
//!     assert_eq!(indicator.update(close).unwrap(), batch[i]);
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod momentum;
pub mod overlay;
pub mod trend;
pub mod volatility;

pub mod prelude;

pub use prelude::*;
