use scatter_rs::api::{ChartEngineConfig, ChartSizingBehavior};
use scatter_rs::core::Viewport;
use scatter_rs::data::CoercionPolicy;

#[test]
fn config_round_trips_through_json() {
    let config = ChartEngineConfig::new(Viewport::new(960, 540))
        .with_marker_radius(10.0)
        .with_coercion_policy(CoercionPolicy::FailDataset)
        .with_captions("Median Income ($)", "Obesity (%)");

    let json = serde_json::to_string(&config).expect("serialize");
    let restored: ChartEngineConfig = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, config);
}

#[test]
fn minimal_config_json_fills_defaults() {
    let json = r#"{ "viewport": { "width": 960, "height": 540 } }"#;
    let config: ChartEngineConfig = serde_json::from_str(json).expect("deserialize");

    assert_eq!(config.marker_radius, 15.0);
    assert_eq!(config.coercion_policy, CoercionPolicy::SkipRecord);
    assert_eq!(config.x_axis_caption, "In Poverty (%)");
    assert_eq!(config.y_axis_caption, "Lack of Healthcare (%)");
    assert_eq!(config.margin.left, 120.0);
    config.validate().expect("defaults are valid");
}

#[test]
fn sizing_fractions_shrink_the_window() {
    let sizing = ChartSizingBehavior::default();
    let viewport = sizing.viewport_for_window(1500, 900).expect("viewport");

    // Width minus a third, height minus a half.
    assert_eq!(viewport, Viewport::new(1000, 450));
}

#[test]
fn degenerate_sizing_fractions_are_rejected() {
    let sizing = ChartSizingBehavior {
        width_fraction: 0.0,
        height_fraction: 0.5,
    };
    assert!(sizing.validate().is_err());
    assert!(sizing.viewport_for_window(1500, 900).is_err());
}
