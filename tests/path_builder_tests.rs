use trend_chart::ChartError;
use trend_chart::core::{ChartGeometry, Padding, Sample, build_paths, make_scale};

fn geometry() -> ChartGeometry {
    ChartGeometry::new(800.0, 300.0).with_padding(Padding::new(72.0, 20.0, 20.0, 40.0))
}

fn revenue_samples() -> Vec<Sample> {
    vec![
        Sample::new("2025-01-01").with_metric("revenue", 1_000.0),
        Sample::new("2025-01-02").with_metric("revenue", 3_000.0),
        Sample::new("2025-01-03").with_metric("revenue", 2_000.0),
    ]
}

fn revenue(sample: &Sample) -> f64 {
    sample.metric("revenue").unwrap_or(0.0)
}

#[test]
fn line_path_moves_then_draws_straight_segments() {
    let samples = revenue_samples();
    let scale = make_scale(samples.len(), 3_000.0, geometry());

    let paths = build_paths(&samples, revenue, scale).expect("paths");
    assert_eq!(paths.line_path, "M 72,180 L 426,20 L 780,100");
}

#[test]
fn area_path_closes_along_the_baseline() {
    let samples = revenue_samples();
    let scale = make_scale(samples.len(), 3_000.0, geometry());

    let paths = build_paths(&samples, revenue, scale).expect("paths");
    assert_eq!(
        paths.area_path,
        "M 72,180 L 426,20 L 780,100 L 780,260 L 72,260 Z"
    );
    assert!(paths.area_path.starts_with(&paths.line_path));
}

#[test]
fn vertices_follow_sample_order() {
    let samples = revenue_samples();
    let scale = make_scale(samples.len(), 3_000.0, geometry());

    let paths = build_paths(&samples, revenue, scale).expect("paths");
    let xs: Vec<f64> = paths.line_points.iter().map(|vertex| vertex.x).collect();
    assert_eq!(xs, vec![72.0, 426.0, 780.0]);
}

#[test]
fn single_sample_path_is_a_centered_point() {
    let samples = vec![Sample::new("2025-01-01").with_metric("revenue", 500.0)];
    let scale = make_scale(1, 500.0, geometry());

    let paths = build_paths(&samples, revenue, scale).expect("paths");
    assert_eq!(paths.line_path, "M 426,20");
    assert_eq!(paths.area_path, "M 426,20 L 426,260 L 426,260 Z");
}

#[test]
fn flat_zero_series_draws_on_the_baseline() {
    let samples = vec![Sample::new("2025-01-01"), Sample::new("2025-01-02")];
    let scale = make_scale(2, 0.0, geometry());

    let paths = build_paths(&samples, revenue, scale).expect("paths");
    assert_eq!(paths.line_path, "M 72,260 L 780,260");
}

#[test]
fn empty_samples_are_rejected() {
    let scale = make_scale(0, 0.0, geometry());
    let err = build_paths(&[], revenue, scale).expect_err("empty input must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
