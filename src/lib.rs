//! # kline-ta
//!
//! Indicator panels for K-line charts.
//!
//! This crate glues the indicator library to JSON documents: it reads closing
//! prices (or full bars) with their time labels, computes the configured
//! overlay, and produces a report a charting front end can draw directly.
//!
//! - [`kline_core`] - Series containers, bars, errors and indicator traits
//! - [`kline_indicators`] - SMA, EMA, RSI, MACD, Bollinger Bands and the overlay
//!
//! ## Example
//!
//! ```rust
//! use kline_ta::document::{build_report, PriceInput};
//! use kline_ta::kline_indicators::OverlayConfig;
//!
//! let input: PriceInput = serde_json::from_str(
//!     r#"{"time": ["d1", "d2", "d3"], "close": [10.0, 11.0, 12.0]}"#,
//! ).unwrap();
//! let report = build_report(input, &OverlayConfig::default()).unwrap();
//!
//! assert_eq!(report.bars, 3);
//! assert_eq!(report.overlay.rsi.defined_count(), 0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod document;

pub use kline_core;
pub use kline_indicators;
