//! Common test utilities for kline-ta.
//!
//! Float comparison for optional series, golden data loading, and synthetic
//! price generation.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use kline_ta::kline_core::IndicatorSeries;

/// Tiered float comparison: absolute near zero, relative elsewhere.
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    assert!(
        actual.is_finite(),
        "{}: Expected {} but got non-finite {}",
        context,
        expected,
        actual
    );

    // For values very close to zero, use absolute comparison
    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: Expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: Expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert a series matches expected optional values with tolerance.
///
/// Undefined positions must line up exactly.
pub fn assert_series_eq(
    actual: &IndicatorSeries<f64>,
    expected: &[Option<f64>],
    epsilon: f64,
    name: &str,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let context = format!("{}[{}]", name, i);
        match (a, e) {
            (Some(a), Some(e)) => assert_float_eq(a, *e, epsilon, &context),
            (None, None) => {}
            _ => panic!("{}: Expected {:?} but got {:?}", context, e, a),
        }
    }
}

/// Path of a file under `golden/reference_outputs`.
pub fn golden_path(filename: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("golden")
        .join("reference_outputs")
        .join(filename)
}

/// Parse a JSON array with `null` entries into optional values.
pub fn parse_option_array(value: &serde_json::Value) -> Vec<Option<f64>> {
    value
        .as_array()
        .map(|arr| arr.iter().map(serde_json::Value::as_f64).collect())
        .unwrap_or_default()
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Generate constant price series.
pub fn generate_constant(value: f64, len: usize) -> Vec<f64> {
    vec![value; len]
}

/// Generate linear price series.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Generate sine wave price series.
pub fn generate_sine(center: f64, amplitude: f64, period: usize, len: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..len)
        .map(|i| center + amplitude * (2.0 * PI * i as f64 / period as f64).sin())
        .collect()
}

/// Generate random walk price series with deterministic seed.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut next_unit = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        // Convert to [-1, 1]
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut prices = Vec::with_capacity(len);
    let mut last = start;
    for i in 0..len {
        if i > 0 {
            last = (last + next_unit() * volatility).max(0.01);
        }
        prices.push(last);
    }
    prices
}

/// Date labels `2024-01-01`, `2024-01-02`, ... (day of month wraps at 28).
pub fn generate_labels(len: usize) -> Vec<String> {
    (0..len)
        .map(|i| format!("2024-{:02}-{:02}", 1 + i / 28, 1 + i % 28))
        .collect()
}
