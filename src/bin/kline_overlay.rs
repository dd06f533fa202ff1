//! Compute K-line chart indicator panels from a JSON price document.
//!
//! Usage:
//!     kline_overlay --input prices.json [--config overlay.json] [--pretty]
//!
//! Reads stdin when `--input` is omitted and writes the report to stdout
//! unless `--output` is given. Logs go to stderr, filtered by `RUST_LOG`.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kline_ta::config::load_overlay_config;
use kline_ta::document::{build_report, PriceInput};
use kline_ta::kline_indicators::{MacdConfig, OverlayConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute MA, RSI, MACD and BOLL panels for K-line charts")]
struct Args {
    /// Input JSON with `close` (and optional `time`) or `bars`; stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Overlay configuration JSON; defaults apply to missing fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,

    /// RSI period
    #[arg(long)]
    rsi_period: Option<usize>,

    /// Bollinger Bands period
    #[arg(long)]
    boll_period: Option<usize>,

    /// Bollinger Bands width in standard deviations
    #[arg(long)]
    boll_std: Option<f64>,

    /// MACD spans as fast,slow,signal
    #[arg(long, value_parser = parse_macd)]
    macd: Option<MacdConfig>,

    /// Moving-average windows, comma separated
    #[arg(long, value_delimiter = ',')]
    ma: Option<Vec<usize>>,
}

impl Args {
    fn apply_overrides(&self, config: &mut OverlayConfig) {
        if let Some(windows) = &self.ma {
            config.ma_windows = windows.clone();
        }
        if let Some(period) = self.rsi_period {
            config.rsi.window = period;
        }
        if let Some(macd) = &self.macd {
            config.macd = macd.clone();
        }
        if let Some(period) = self.boll_period {
            config.bollinger.window = period;
        }
        if let Some(num_std) = self.boll_std {
            config.bollinger.num_std = num_std;
        }
    }
}

fn parse_macd(s: &str) -> std::result::Result<MacdConfig, String> {
    let spans = s
        .split(',')
        .map(|part| part.trim().parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid MACD span: {e}"))?;

    match spans.as_slice() {
        &[fast, slow, signal] => Ok(MacdConfig::new(fast, slow, signal)),
        _ => Err(format!("expected fast,slow,signal but got {} values", spans.len())),
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<PriceInput> {
    let content = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read prices from {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read prices from stdin")?,
    };
    serde_json::from_str(&content).context("failed to parse price document")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_overlay_config(path)?,
        None => OverlayConfig::default(),
    };
    args.apply_overrides(&mut config);

    let input = read_input(args.input.as_ref())?;
    info!(bars = input.len(), "prices loaded");

    let report = build_report(input, &config).context("failed to compute overlay")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed to serialise overlay report")?;

    match &args.output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write report to stdout")?;
        }
    }

    Ok(())
}
