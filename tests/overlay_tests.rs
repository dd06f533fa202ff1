//! End-to-end tests for overlay reports built from price documents.

mod common;

use approx::assert_relative_eq;

use common::{
    assert_series_eq, generate_constant, generate_labels, generate_linear, generate_random_walk,
    generate_sine, golden_path, parse_option_array,
};
use kline_ta::document::{build_report, PriceInput};
use kline_ta::kline_core::IndicatorError;
use kline_ta::kline_indicators::{
    bollinger_bands, ema, macd, rsi_wilder, sma, BollingerConfig, OverlayConfig, RsiConfig,
};

fn closes_input(close: Vec<f64>) -> PriceInput {
    PriceInput::Closes {
        time: Some(generate_labels(close.len())),
        close,
    }
}

#[test]
fn test_report_matches_reference_outputs() {
    let path = golden_path("sample_closes.json");
    let content = std::fs::read_to_string(&path).unwrap();
    let golden: serde_json::Value = serde_json::from_str(&content).unwrap();
    let expected = |key: &str| parse_option_array(&golden["expected"][key]);

    let input: PriceInput = serde_json::from_value(serde_json::json!({
        "time": golden["time"],
        "close": golden["close"],
    }))
    .unwrap();
    let report = build_report(input, &OverlayConfig::default()).unwrap();
    let overlay = &report.overlay;

    assert_eq!(report.bars, 80);
    assert_series_eq(overlay.moving_average(5).unwrap(), &expected("sma_5"), 1e-12, "MA5");
    assert_series_eq(overlay.moving_average(10).unwrap(), &expected("sma_10"), 1e-12, "MA10");
    assert_series_eq(overlay.moving_average(20).unwrap(), &expected("sma_20"), 1e-12, "MA20");
    assert_series_eq(&overlay.rsi, &expected("rsi_6"), 1e-10, "RSI6");
    assert_series_eq(&overlay.macd.dif, &expected("macd_dif"), 1e-9, "DIF");
    assert_series_eq(&overlay.macd.dea, &expected("macd_dea"), 1e-9, "DEA");
    assert_series_eq(&overlay.macd.hist, &expected("macd_hist"), 1e-9, "HIST");
    assert_series_eq(&overlay.bollinger.middle, &expected("boll_middle"), 1e-12, "BOLL mid");
    assert_series_eq(&overlay.bollinger.upper, &expected("boll_upper"), 1e-12, "BOLL up");
    assert_series_eq(&overlay.bollinger.lower, &expected("boll_lower"), 1e-12, "BOLL low");
}

#[test]
fn test_documented_scenarios() {
    assert_eq!(
        sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap().into_vec(),
        vec![None, None, Some(2.0), Some(3.0), Some(4.0)]
    );
    assert_eq!(
        ema(&[10.0, 10.0, 10.0, 10.0], 3).unwrap().into_vec(),
        vec![Some(10.0); 4]
    );

    let bands = bollinger_bands(&[5.0, 5.0, 5.0, 5.0, 5.0], 3, 2.0).unwrap();
    for i in 2..5 {
        assert_eq!(bands.middle[i], Some(5.0));
        assert_eq!(bands.upper[i], Some(5.0));
        assert_eq!(bands.lower[i], Some(5.0));
    }

    let rsi = rsi_wilder(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 6).unwrap();
    assert_eq!(rsi.first_defined(), Some(6));
    assert_eq!(rsi[6], Some(100.0));
}

#[test]
fn test_constant_prices() {
    let report = build_report(
        closes_input(generate_constant(42.0, 40)),
        &OverlayConfig::default(),
    )
    .unwrap();
    let overlay = &report.overlay;

    for (_, value) in overlay.moving_average(20).unwrap().defined() {
        assert_relative_eq!(value, 42.0, epsilon = 1e-9);
    }
    for (_, value) in overlay.rsi.defined() {
        assert_eq!(value, 100.0);
    }
    for (i, middle) in overlay.bollinger.middle.defined() {
        assert_relative_eq!(overlay.bollinger.upper[i].unwrap(), middle, epsilon = 1e-9);
        assert_relative_eq!(overlay.bollinger.lower[i].unwrap(), middle, epsilon = 1e-9);
    }
}

#[test]
fn test_trending_prices() {
    let report = build_report(
        closes_input(generate_linear(100.0, 0.5, 60)),
        &OverlayConfig::default(),
    )
    .unwrap();
    let overlay = &report.overlay;

    // a steady uptrend has no losses and a positive, converging MACD
    assert_eq!(overlay.rsi.last_value(), Some(100.0));
    assert!(overlay.macd.dif.last_value().unwrap() > 0.0);
    let fast = overlay.moving_average(5).unwrap().last_value().unwrap();
    let slow = overlay.moving_average(20).unwrap().last_value().unwrap();
    assert!(fast > slow);
}

#[test]
fn test_oscillating_prices_stay_in_range() {
    let closes = generate_sine(50.0, 5.0, 16, 120);
    let report = build_report(closes_input(closes.clone()), &OverlayConfig::default()).unwrap();

    for (i, value) in report.overlay.rsi.defined() {
        assert!(value > 0.0 && value < 100.0, "RSI[{i}] = {value}");
    }
    for (i, upper) in report.overlay.bollinger.upper.defined() {
        assert!(upper >= closes[i - 19..=i].iter().sum::<f64>() / 20.0);
    }
}

#[test]
fn test_custom_config() {
    let closes = generate_random_walk(30.0, 0.8, 90, 7);
    let config = OverlayConfig::default()
        .with_ma_windows(vec![30, 60])
        .with_rsi(RsiConfig::new(14))
        .with_bollinger(BollingerConfig::new(26, 2.5));
    let report = build_report(closes_input(closes.clone()), &config).unwrap();
    let overlay = &report.overlay;

    assert_eq!(overlay.moving_averages.len(), 2);
    assert_eq!(overlay.moving_average(60).unwrap().first_defined(), Some(59));
    assert_eq!(overlay.moving_average(5), None);
    assert_eq!(overlay.rsi, rsi_wilder(&closes, 14).unwrap());
    assert_eq!(overlay.bollinger, bollinger_bands(&closes, 26, 2.5).unwrap());
    assert_eq!(overlay.macd, macd(&closes, 12, 26, 9).unwrap());
}

#[test]
fn test_points_pair_values_with_labels() {
    let closes = generate_random_walk(10.0, 0.3, 30, 99);
    let labels = generate_labels(closes.len());
    let report = build_report(
        PriceInput::Closes {
            time: Some(labels.clone()),
            close: closes,
        },
        &OverlayConfig::default(),
    )
    .unwrap();

    let time = report.time.as_deref().unwrap();
    let points = report.overlay.rsi.points(time).unwrap();
    assert_eq!(points.len(), 30 - 6);
    assert_eq!(points[0].0, &labels[6]);

    let short = &time[..10];
    assert_eq!(
        report.overlay.rsi.points(short).unwrap_err(),
        IndicatorError::LengthMismatch {
            expected: 30,
            actual: 10
        }
    );
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = OverlayConfig::default().with_bollinger(BollingerConfig::new(20, f64::NAN));
    let result = build_report(closes_input(generate_constant(1.0, 5)), &config);
    assert!(matches!(
        result,
        Err(IndicatorError::InvalidParameter { name: "num_std", .. })
    ));
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: OverlayConfig =
        serde_json::from_str(r#"{"ma_windows": [7], "rsi": {"window": 9}}"#).unwrap();

    assert_eq!(config.ma_windows, vec![7]);
    assert_eq!(config.rsi.window, 9);
    assert_eq!(config.macd, OverlayConfig::default().macd);
    assert_eq!(config.bollinger, OverlayConfig::default().bollinger);
}

#[test]
fn test_config_selects_strategy_conventions() {
    let config: OverlayConfig = serde_json::from_str(
        r#"{"rsi": {"smoothing": "simple"}, "bollinger": {"deviation": "sample"}}"#,
    )
    .unwrap();
    assert!(config.validate().is_ok());

    let closes = generate_sine(20.0, 2.0, 10, 40);
    let report = build_report(closes_input(closes.clone()), &config).unwrap();
    assert_ne!(report.overlay.rsi, rsi_wilder(&closes, 6).unwrap());
    assert_ne!(
        report.overlay.bollinger,
        bollinger_bands(&closes, 20, 2.0).unwrap()
    );
}
