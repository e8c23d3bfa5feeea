use candle_chart::api::{ChartEngine, EngineConfig, EngineSnapshot, SeriesData, ValueFormat};
use candle_chart::core::{
    AxisAlignment, DistributionSpec, ElementAnchor, ElementSize, OverflowPolicy, Range, Viewport,
};

#[test]
fn config_defaults_match_trading_layout() {
    let config = EngineConfig::new(Viewport::new(640, 480));
    assert_eq!(config.element_size, ElementSize::Small);
    assert_eq!(config.element_anchor, ElementAnchor::Center);
    assert_eq!(config.time_alignment, AxisAlignment::Start);
    assert_eq!(config.price_alignment, AxisAlignment::End);
    assert_eq!(config.price_distribution, DistributionSpec::Fixed { interval_px: 32.0 });
    assert_eq!(config.value_format, ValueFormat::new(5));
}

#[test]
fn builders_override_fields() {
    let config = EngineConfig::new(Viewport::new(640, 480))
        .with_element_size(ElementSize::VeryLarge)
        .with_element_anchor(ElementAnchor::Leading)
        .with_price_distribution(DistributionSpec::geometric(), AxisAlignment::Start)
        .with_time_distribution(DistributionSpec::linear(), AxisAlignment::End)
        .with_value_format(ValueFormat::new(2));

    assert_eq!(config.element_size, ElementSize::VeryLarge);
    assert_eq!(config.element_anchor, ElementAnchor::Leading);
    assert_eq!(config.price_distribution, DistributionSpec::geometric());
    assert_eq!(config.time_alignment, AxisAlignment::End);
    assert_eq!(config.value_format.format(1.005_1), "1.01");
}

#[test]
fn config_validation_rejects_bad_values() {
    assert!(EngineConfig::new(Viewport::new(0, 10)).validate().is_err());
    assert!(
        EngineConfig::new(Viewport::new(10, 10))
            .with_price_distribution(
                DistributionSpec::Fixed { interval_px: -3.0 },
                AxisAlignment::End
            )
            .validate()
            .is_err()
    );
    assert!(
        EngineConfig::new(Viewport::new(10, 10))
            .with_value_format(ValueFormat::new(40))
            .validate()
            .is_err()
    );
}

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let config = EngineConfig::from_json(r#"{"viewport": {"width": 300, "height": 200}}"#)
        .expect("minimal config");
    assert_eq!(config, EngineConfig::new(Viewport::new(300, 200)));

    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(EngineConfig::from_json(&json).expect("reparse"), config);
}

#[test]
fn config_json_rejects_invalid_distribution() {
    let json = r#"{
        "viewport": {"width": 300, "height": 200},
        "price_distribution": {"kind": "geometric", "min_division_px": 25.0, "growth_rate": 0.5}
    }"#;
    assert!(EngineConfig::from_json(json).is_err());
    assert!(EngineConfig::from_json("not json").is_err());
}

#[test]
fn snapshot_captures_series_and_ticks() {
    let mut engine =
        ChartEngine::new(EngineConfig::new(Viewport::new(320, 160))).expect("engine init");
    engine
        .add_series("line", SeriesData::Values(vec![2.0, 4.0, 3.0]), OverflowPolicy::Dynamic)
        .expect("add line");
    engine
        .add_series("empty", SeriesData::Candles(Vec::new()), OverflowPolicy::Fixed)
        .expect("add empty");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.merged_range, Range::new(4.0, 2.0).expect("valid range"));
    assert_eq!(snapshot.series.len(), 2);
    assert_eq!(snapshot.series[0].kind, "values");
    assert_eq!(snapshot.series[0].len, 3);
    assert_eq!(snapshot.series[1].range, None);
    assert_eq!(snapshot.visible_elements, 40);
    assert!(snapshot.price_ticks.iter().all(|tick| tick.value.is_some()));

    let json = engine.snapshot_json_pretty().expect("snapshot json");
    assert!(json.contains("\"merged_range\""));
    let parsed: EngineSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(parsed.series, snapshot.series);
    assert_eq!(parsed.merged_range, snapshot.merged_range);
    assert_eq!(parsed.price_ticks.len(), snapshot.price_ticks.len());
}
