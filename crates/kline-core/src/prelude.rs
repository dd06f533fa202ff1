//! Prelude module for convenient imports.
//!
//! ```rust
//! use kline_core::prelude::*;
//!
//! let series: IndicatorSeries<f64> = IndicatorSeries::undefined(3);
//! let bar = Bar::new(100.0, 105.0, 98.0, 103.0, 1_000_000.0);
//! ```

pub use crate::num::TaFloat;
pub use crate::ohlcv::{Bar, OhlcvSeries};
pub use crate::series::IndicatorSeries;
pub use crate::window::RingBuffer;

pub use crate::error::{IndicatorError, Result};

pub use crate::traits::{Indicator, IndicatorConfig, StreamingIndicator};

pub use crate::utils::{rolling, rolling_mean, split_change, window_deviation, window_mean};
