//! # kline-core
//!
//! Core types and traits for the kline-ta indicator library.
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`IndicatorSeries`] - Indicator output, one optional value per bar
//! - [`Bar`] and [`OhlcvSeries`] - K-line price data
//! - [`RingBuffer`] - Circular buffer for streaming calculations
//! - [`Indicator`] and [`StreamingIndicator`] - Indicator computation traits
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use kline_core::prelude::*;
//!
//! let closes = [100.0, 101.5, 99.8, 102.3, 101.0];
//! let ma3 = rolling_mean(&closes, 3);
//!
//! assert_eq!(ma3.first_defined(), Some(2));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod num;
pub mod ohlcv;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod utils;
pub mod window;

pub use error::{IndicatorError, Result};
pub use num::TaFloat;
pub use ohlcv::{Bar, OhlcvSeries};
pub use series::IndicatorSeries;
pub use traits::{Indicator, IndicatorConfig, StreamingIndicator};
pub use window::RingBuffer;
