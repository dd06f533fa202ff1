//! Loading overlay configuration files.
//!
//! Every field of [`OverlayConfig`] has a default, so a file only needs the
//! parts it changes:
//!
//! ```json
//! { "ma_windows": [5, 10, 30, 60], "rsi": { "window": 14 } }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use kline_indicators::OverlayConfig;

/// Read and validate an overlay configuration from a JSON file.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid JSON, or names an invalid
/// period or multiplier.
pub fn load_overlay_config(path: impl AsRef<Path>) -> Result<OverlayConfig> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read overlay config from {}", path.display()))?;

    let config: OverlayConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse overlay config from {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid overlay config in {}", path.display()))?;

    info!(
        path = %path.display(),
        ma_windows = ?config.ma_windows,
        rsi_period = config.rsi.window,
        "overlay config loaded"
    );

    Ok(config)
}
