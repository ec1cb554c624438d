use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trend_chart::api::{ChartEngine, ChartEngineConfig, SeriesDefinition, SeriesRegistry};
use trend_chart::core::{ChartGeometry, Sample, build_paths, make_scale, plan_ticks};
use trend_chart::render::NullRenderer;

fn daily_samples(count: usize) -> Vec<Sample> {
    (0..count)
        .map(|i| {
            let day = i as f64;
            let revenue = 12_000.0 + (day * 0.35).sin() * 4_000.0 + day * 25.0;
            Sample::new(format!("2025-{:02}-{:02}", 1 + i / 28 % 12, 1 + i % 28))
                .with_metric("revenue", revenue)
                .with_metric("profit", revenue * 0.18)
                .with_metric("orders", (revenue / 85.0).round())
        })
        .collect()
}

fn bench_plan_ticks(c: &mut Criterion) {
    c.bench_function("plan_ticks_5", |b| {
        b.iter(|| {
            let _ = plan_ticks(black_box(48_731.27), black_box(5));
        })
    });
}

fn bench_build_paths_365(c: &mut Criterion) {
    let samples = daily_samples(365);
    let scale = make_scale(samples.len(), 25_000.0, ChartGeometry::new(1_280.0, 360.0));

    c.bench_function("build_paths_365", |b| {
        b.iter(|| {
            let _ = build_paths(
                black_box(&samples),
                |sample| sample.metric("revenue").unwrap_or(0.0),
                black_box(scale),
            )
            .expect("paths");
        })
    });
}

fn bench_engine_frame_hovered_100(c: &mut Criterion) {
    let registry = SeriesRegistry::new(vec![
        SeriesDefinition::metric("revenue", "Revenue", "#4f46e5"),
        SeriesDefinition::metric("profit", "Profit", "#10b981"),
        SeriesDefinition::metric("orders", "Orders", "#f59e0b"),
    ])
    .expect("registry");
    let config = ChartEngineConfig::new(ChartGeometry::new(1_280.0, 360.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config, registry).expect("engine");
    engine.set_samples(daily_samples(100));
    engine.pointer_enter(57).expect("hover");

    c.bench_function("engine_frame_hovered_100", |b| {
        b.iter(|| {
            let _ = black_box(&engine).frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_plan_ticks,
    bench_build_paths_365,
    bench_engine_frame_hovered_100
);
criterion_main!(benches);
