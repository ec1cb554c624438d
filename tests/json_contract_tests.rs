use trend_chart::api::{
    CHART_FRAME_JSON_SCHEMA_V1, ChartEngine, ChartEngineConfig, SeriesDefinition, SeriesRegistry,
};
use trend_chart::core::Sample;
use trend_chart::render::{ChartFrame, NullRenderer};

fn hovered_frame() -> ChartFrame {
    let registry = SeriesRegistry::new(vec![
        SeriesDefinition::metric("revenue", "Revenue", "#4f46e5"),
        SeriesDefinition::metric("profit", "Profit", "#10b981"),
    ])
    .expect("registry");
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), registry)
            .expect("engine");
    engine.set_samples(vec![
        Sample::new("2025-01-01")
            .with_metric("revenue", 1_200.0)
            .with_metric("profit", 300.0),
        Sample::new("2025-01-02")
            .with_metric("revenue", 1_800.0)
            .with_metric("profit", 420.0),
    ]);
    engine.pointer_enter(0).expect("hover");
    engine.frame().expect("frame")
}

#[test]
fn envelope_carries_schema_version() {
    let json = hovered_frame().to_json_contract_v1_pretty().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(
        value["schema_version"],
        serde_json::json!(CHART_FRAME_JSON_SCHEMA_V1)
    );
    assert_eq!(value["frame"]["state"], serde_json::json!("Hovering"));
    assert_eq!(value["frame"]["series"].as_array().map(Vec::len), Some(2));
}

#[test]
fn envelope_parses_back_into_the_same_frame() {
    let frame = hovered_frame();
    let json = frame.to_json_contract_v1_pretty().expect("serialize");
    let restored = ChartFrame::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, frame);
}

#[test]
fn bare_frame_is_accepted() {
    let frame = hovered_frame();
    let json = serde_json::to_string(&frame).expect("serialize");
    let restored = ChartFrame::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, frame);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let frame = hovered_frame();
    let payload = serde_json::json!({ "schema_version": 2, "frame": frame });
    let err = ChartFrame::from_json_compat_str(&payload.to_string()).expect_err("must fail");
    assert!(err.to_string().contains("schema version"));
}

#[test]
fn garbage_is_rejected() {
    assert!(ChartFrame::from_json_compat_str("[1, 2, 3]").is_err());
}
