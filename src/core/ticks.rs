/// Tick count used when callers do not ask for a specific density.
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Upper bound applied to `target_count`.
pub const MAX_TICK_COUNT: usize = 64;

const TICK_EPSILON: f64 = 1e-9;

/// Plans "nice" value-axis ticks from zero up to at least `max_value`.
///
/// The step is the raw spacing `max_value / (target_count - 1)` rounded up to
/// 1, 2, 5 or 10 times a power of ten. Sub-unit steps are rounded to two
/// decimals.
///
/// The result always starts at 0, is strictly ascending and its last value is
/// `>= max_value`. Non-positive or non-finite maxima yield `[0.0]`.
/// `target_count` is clamped to `2..=MAX_TICK_COUNT`.
#[must_use]
pub fn plan_ticks(max_value: f64, target_count: usize) -> Vec<f64> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return vec![0.0];
    }

    let intervals = target_count.clamp(2, MAX_TICK_COUNT) - 1;
    let raw_step = max_value / intervals as f64;
    let step = nice_step(raw_step);
    // Bounded by count, not by comparing floats that may overflow.
    let steps_to_top = (max_value / step).ceil().min((MAX_TICK_COUNT + 1) as f64) as usize;
    let rounds_to_cents = step < 1.0;

    let mut ticks = Vec::with_capacity(steps_to_top + 2);
    for k in 0..=steps_to_top {
        let raw = k as f64 * step;
        if !raw.is_finite() {
            break;
        }
        let value = if rounds_to_cents {
            round_to_cents(raw)
        } else {
            raw
        };
        // Rounding can collapse sub-cent steps onto the previous value.
        if ticks.last().is_none_or(|last: &f64| value > *last) {
            ticks.push(value);
        }
    }

    // Sub-cent steps can round the top below the data maximum, and near
    // `f64::MAX` the last whole step overflows.
    if ticks.last().is_some_and(|last| *last < max_value) {
        let top = round_up_to_cents(max_value);
        ticks.push(if top.is_finite() { top } else { max_value });
    }
    ticks
}

/// Rounds `raw_step` up to the nearest 1/2/5/10 multiple of its magnitude.
#[must_use]
pub fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }

    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let snapped = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|candidate| *candidate >= normalized - TICK_EPSILON)
        .unwrap_or(10.0);
    snapped * magnitude
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round_up_to_cents(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}
