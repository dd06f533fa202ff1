//! Trend indicators.
//!
//! This module contains trend-following indicators:
//! - SMA (Simple Moving Average)
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)

mod sma;
mod ema;
mod macd;

pub use sma::{sma, Sma, SmaConfig};
pub use ema::{ema, Ema, EmaAccumulator, EmaConfig};
pub use macd::{macd, macd_signal, Macd, MacdConfig, MacdOutput, MacdSeries};
