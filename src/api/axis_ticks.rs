use crate::render::XTick;

/// Minimum horizontal gap between date labels.
pub const AXIS_X_LABEL_MIN_SPACING_PX: f64 = 56.0;

/// Thins date labels so neighbours are at least `min_spacing_px` apart.
///
/// Candidates must already be ordered by `pixel_x`. The first label is always
/// kept; the last one replaces the previous pick when it still clears the
/// spacing to the label before that.
pub(super) fn select_x_ticks_with_min_spacing(
    ticks: Vec<XTick>,
    min_spacing_px: f64,
) -> Vec<XTick> {
    if ticks.len() <= 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let total = ticks.len();
    let mut candidates = ticks.into_iter();
    let Some(first) = candidates.next() else {
        return Vec::new();
    };

    let mut selected = Vec::with_capacity(total);
    let mut last_pixel = first.pixel_x;
    selected.push(first);

    let mut tail = None;
    for tick in candidates {
        if tick.pixel_x - last_pixel >= min_spacing_px {
            last_pixel = tick.pixel_x;
            selected.push(tick);
            tail = None;
        } else {
            tail = Some(tick);
        }
    }

    // The final label was skipped; swap it in if it still fits.
    if let Some(last_tick) = tail {
        if selected.len() >= 2 {
            let penultimate = selected[selected.len() - 2].pixel_x;
            if last_tick.pixel_x - penultimate >= min_spacing_px {
                let last_index = selected.len() - 1;
                selected[last_index] = last_tick;
            }
        }
    }

    selected
}
