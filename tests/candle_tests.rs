use approx::assert_abs_diff_eq;
use candle_chart::core::{
    AxisGeometry, Candle, CoordinateMapper, ElementSize, Range, candles_range, project_candles,
};
use candle_chart::ChartError;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

#[test]
fn candle_rejects_inconsistent_prices() {
    assert!(Candle::new(0.0, 10.0, 12.0, 9.0, 11.0, 100).is_ok());
    assert!(Candle::new(0.0, 10.0, 9.0, 12.0, 11.0, 100).is_err());
    assert!(Candle::new(0.0, 13.0, 12.0, 9.0, 11.0, 100).is_err());
    assert!(Candle::new(0.0, 10.0, 12.0, 9.0, 8.0, 100).is_err());
    assert!(Candle::new(0.0, -1.0, 12.0, -2.0, 11.0, 100).is_err());
    assert!(Candle::new(f64::NAN, 10.0, 12.0, 9.0, 11.0, 100).is_err());
}

#[test]
fn literal_candles_are_checked_by_validate() {
    let valid = Candle {
        time: 0.0,
        open: 1.5,
        high: 2.0,
        low: 1.0,
        close: 1.8,
        volume: 3,
    };
    assert!(valid.validate().is_ok());

    let nan_open = Candle {
        open: f64::NAN,
        close: 1.0,
        ..valid
    };
    let close_below_low = Candle {
        close: -50.0,
        ..valid
    };
    let open_above_high = Candle { open: 9.0, ..valid };
    for candle in [nan_open, close_below_low, open_above_high] {
        assert!(
            matches!(candle.validate(), Err(ChartError::InvalidData(_))),
            "{candle:?}"
        );
    }
}

#[test]
fn deserialization_rejects_inconsistent_candles() {
    let parsed: Candle = serde_json::from_str(
        r#"{"time":0.0,"open":1.5,"high":2.0,"low":1.0,"close":1.8,"volume":3}"#,
    )
    .expect("valid candle json");
    assert_eq!(parsed, Candle::new(0.0, 1.5, 2.0, 1.0, 1.8, 3).expect("valid"));

    let open_above_high = serde_json::from_str::<Candle>(
        r#"{"time":0.0,"open":9.0,"high":2.0,"low":1.0,"close":1.5,"volume":3}"#,
    );
    assert!(open_above_high.is_err());

    let low_above_high = serde_json::from_str::<Candle>(
        r#"{"time":0.0,"open":2.0,"high":2.0,"low":3.0,"close":2.0,"volume":3}"#,
    );
    assert!(low_above_high.is_err());
}

#[test]
fn candle_from_decimal_time_converts_fields() {
    let time = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).single().expect("valid time");
    let candle = Candle::from_decimal_time(
        time,
        Decimal::new(10_125, 3),
        Decimal::new(10_500, 3),
        Decimal::new(9_875, 3),
        Decimal::new(10_250, 3),
        42,
    )
    .expect("valid candle");

    assert_abs_diff_eq!(candle.time, time.timestamp() as f64);
    assert_abs_diff_eq!(candle.open, 10.125);
    assert_abs_diff_eq!(candle.low, 9.875);
    assert_eq!(candle.datetime(), Some(time));
    assert_eq!(candle.info_label(), "05 Mar 14:30");
}

#[test]
fn candle_display_lists_ohlcv_and_date() {
    let candle = Candle::new(1_700_000_000.0, 1.1, 1.3, 1.0, 1.2, 1500).expect("valid candle");
    assert_eq!(
        candle.to_string(),
        "O: 1.10000  H: 1.30000  L: 1.00000  C: 1.20000  V: 1500  D: 2023.11.14 22:13"
    );
}

#[test]
fn bullish_means_close_at_or_above_open() {
    assert!(Candle::new(0.0, 1.0, 2.0, 1.0, 2.0, 0).expect("valid").is_bullish());
    assert!(Candle::new(0.0, 1.0, 1.0, 1.0, 1.0, 0).expect("valid").is_bullish());
    assert!(!Candle::new(0.0, 2.0, 2.0, 1.0, 1.0, 0).expect("valid").is_bullish());
}

#[test]
fn candles_range_spans_highs_and_lows() {
    let candles = vec![
        Candle::new(0.0, 10.0, 12.0, 9.0, 11.0, 1).expect("valid"),
        Candle::new(1.0, 11.0, 15.0, 10.0, 14.0, 1).expect("valid"),
        Candle::new(2.0, 14.0, 14.5, 7.0, 8.0, 1).expect("valid"),
    ];
    let range = candles_range(&candles).expect("valid").expect("non-empty");
    assert_eq!(range, Range::new(15.0, 7.0).expect("valid range"));
    assert_eq!(candles_range(&[]).expect("empty ok"), None);
}

#[test]
fn project_candles_places_bodies_and_wicks() {
    let geometry = AxisGeometry::with_element_size(400, ElementSize::Large).expect("geometry");
    let mapper = CoordinateMapper::new(&geometry);
    let range = Range::new(20.0, 0.0).expect("valid range");
    let candles = vec![
        Candle::new(0.0, 10.0, 15.0, 5.0, 12.0, 1).expect("valid"),
        Candle::new(1.0, 12.0, 20.0, 0.0, 8.0, 1).expect("valid"),
    ];

    let projected = project_candles(&candles, mapper, range, 200.0);
    assert_eq!(projected.len(), 2);

    let first = projected[0];
    assert_abs_diff_eq!(first.center_x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.body_left, -5.5, epsilon = 1e-9);
    assert_abs_diff_eq!(first.body_right, 5.5, epsilon = 1e-9);
    assert_abs_diff_eq!(first.wick_top, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.wick_bottom, 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.body_top, 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.body_bottom, 100.0, epsilon = 1e-9);
    assert!(first.is_bullish);

    let second = projected[1];
    assert_abs_diff_eq!(second.center_x, 16.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second.wick_top, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second.wick_bottom, 200.0, epsilon = 1e-9);
    assert!(!second.is_bullish);
}
