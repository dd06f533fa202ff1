//! Prelude for kline-indicators.
//!
//! This module re-exports all commonly used functions and types.

// Momentum indicators
pub use crate::momentum::{rsi, rsi_wilder, Rsi, RsiAccumulator, RsiConfig, RsiSmoothing};

// Trend indicators
pub use crate::trend::{
    ema, macd, macd_signal, sma, Ema, EmaAccumulator, EmaConfig, Macd, MacdConfig, MacdOutput,
    MacdSeries, Sma, SmaConfig,
};

// Volatility indicators
pub use crate::volatility::{
    bollinger, bollinger_bands, BandDeviation, BollingerBands, BollingerConfig, BollingerOutput,
    BollingerSeries,
};

// Chart panels
pub use crate::overlay::{
    compute_overlay, compute_overlay_bars, KlineOverlay, MovingAverageLine, OverlayConfig,
};
