use trend_chart::core::{DEFAULT_TICK_COUNT, nice_step, plan_ticks};

#[test]
fn revenue_peak_snaps_to_thousands() {
    assert_eq!(plan_ticks(3_000.0, DEFAULT_TICK_COUNT), vec![0.0, 1_000.0, 2_000.0, 3_000.0]);
}

#[test]
fn non_positive_maximum_yields_single_zero_tick() {
    assert_eq!(plan_ticks(0.0, DEFAULT_TICK_COUNT), vec![0.0]);
    assert_eq!(plan_ticks(-42.0, DEFAULT_TICK_COUNT), vec![0.0]);
}

#[test]
fn non_finite_maximum_yields_single_zero_tick() {
    assert_eq!(plan_ticks(f64::NAN, DEFAULT_TICK_COUNT), vec![0.0]);
    assert_eq!(plan_ticks(f64::INFINITY, DEFAULT_TICK_COUNT), vec![0.0]);
}

#[test]
fn top_tick_covers_values_between_steps() {
    // raw step 2375 -> nice step 5000, top rounds up to 10000
    let ticks = plan_ticks(9_500.0, DEFAULT_TICK_COUNT);
    assert_eq!(ticks, vec![0.0, 5_000.0, 10_000.0]);
}

#[test]
fn small_currency_values_use_fractional_steps() {
    // raw step 0.3 -> nice step 0.5
    let ticks = plan_ticks(1.2, DEFAULT_TICK_COUNT);
    assert_eq!(ticks, vec![0.0, 0.5, 1.0, 1.5]);
}

#[test]
fn ticks_are_rounded_to_cents() {
    let ticks = plan_ticks(0.7, DEFAULT_TICK_COUNT);
    for tick in &ticks {
        let cents = tick * 100.0;
        assert!((cents - cents.round()).abs() <= 1e-9, "tick {tick} not in cents");
    }
    assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8]);
}

#[test]
fn target_count_controls_density() {
    let coarse = plan_ticks(1_000.0, 3);
    let dense = plan_ticks(1_000.0, 11);
    assert_eq!(coarse, vec![0.0, 500.0, 1_000.0]);
    assert_eq!(dense.len(), 11);
    assert_eq!(dense[1], 100.0);
}

#[test]
fn degenerate_target_count_is_treated_as_two() {
    assert_eq!(plan_ticks(800.0, 0), plan_ticks(800.0, 2));
    assert_eq!(plan_ticks(800.0, 1), vec![0.0, 1_000.0]);
}

#[test]
fn nice_step_picks_smallest_candidate_not_below_raw_step() {
    assert_eq!(nice_step(1.0), 1.0);
    assert_eq!(nice_step(1.01), 2.0);
    assert_eq!(nice_step(4.9), 5.0);
    assert_eq!(nice_step(5.1), 10.0);
    assert!((nice_step(0.03) - 0.05).abs() <= 1e-12);
}
