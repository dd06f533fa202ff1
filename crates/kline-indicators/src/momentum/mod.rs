//! Momentum indicators.
//!
//! This module contains momentum indicators:
//! - RSI (Relative Strength Index), Wilder-smoothed or simple-averaged

mod rsi;

pub use rsi::{rsi, rsi_wilder, Rsi, RsiAccumulator, RsiConfig, RsiSmoothing};
