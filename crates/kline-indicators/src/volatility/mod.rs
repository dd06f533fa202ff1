//! Volatility indicators.
//!
//! This module contains volatility indicators:
//! - Bollinger Bands

mod bollinger;

pub use bollinger::{
    bollinger, bollinger_bands, BandDeviation, BollingerBands, BollingerConfig, BollingerOutput,
    BollingerSeries,
};
