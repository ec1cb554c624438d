use proptest::prelude::*;
use trend_chart::core::{ChartGeometry, Padding, Sample, make_scale, plan_ticks};
use trend_chart::interaction::{TooltipBox, compute_tooltip};

proptest! {
    #[test]
    fn tooltip_box_stays_inside_plot(
        values in proptest::collection::vec(0.0f64..100_000.0, 1..80),
        width in 320.0f64..1_600.0,
        height in 200.0f64..800.0,
        box_width in 40.0f64..200.0,
        box_height in 20.0f64..120.0,
        margin in 0.0f64..16.0
    ) {
        let geometry = ChartGeometry::new(width, height)
            .with_padding(Padding::new(72.0, 20.0, 20.0, 40.0));
        let samples: Vec<Sample> = values
            .iter()
            .map(|value| Sample::new("2025-03-01").with_metric("revenue", *value))
            .collect();
        let max = values.iter().copied().fold(0.0, f64::max);
        let y_max = *plan_ticks(max, 5).last().expect("ticks");
        let scale = make_scale(samples.len(), y_max, geometry);
        let plot = scale.plot_area();
        let tooltip_box = TooltipBox { width: box_width, height: box_height, margin };

        let last = samples.len() - 1;
        for index in [0, last / 2, last] {
            let position = compute_tooltip(
                Some(index),
                &samples,
                scale,
                |sample| sample.metric("revenue").unwrap_or(0.0),
                tooltip_box,
            )
            .expect("tooltip");

            prop_assert!(plot.left <= position.x);
            prop_assert!(position.x + box_width <= plot.right + 1e-9);
            prop_assert!(plot.top <= position.y);
            prop_assert!(position.y + box_height <= plot.bottom + 1e-9);
        }
    }
}
