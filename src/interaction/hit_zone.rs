use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Scale};

/// Invisible horizontal band owning pointer hover for one sample.
///
/// Bands are bounded by the midpoints between neighbouring samples; the first
/// and last bands extend to the plot edges. Every band spans the full plot
/// height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitZone {
    pub index: usize,
    pub left: f64,
    pub right: f64,
}

impl HitZone {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }
}

/// Builds one hit zone per sample, ordered by index.
#[must_use]
pub fn hit_zones(scale: Scale) -> Vec<HitZone> {
    let count = scale.sample_count();
    let plot = scale.plot_area();
    (0..count)
        .map(|index| {
            let left = if index == 0 {
                plot.left
            } else {
                (scale.x_of(index - 1) + scale.x_of(index)) / 2.0
            };
            let right = if index + 1 == count {
                plot.right
            } else {
                (scale.x_of(index) + scale.x_of(index + 1)) / 2.0
            };
            HitZone { index, left, right }
        })
        .collect()
}

/// Resolves the sample under a pointer at surface coordinates `(x, y)`.
///
/// Returns `None` outside the plot area. Zone ranges are half-open except the
/// last, which includes the plot's right edge.
#[must_use]
pub fn hit_test(zones: &[HitZone], plot: PlotArea, x: f64, y: f64) -> Option<usize> {
    if !x.is_finite() || !y.is_finite() || !plot.contains(x, y) {
        return None;
    }
    let position = zones.partition_point(|zone| zone.right <= x);
    zones
        .get(position)
        .or_else(|| zones.last())
        .map(|zone| zone.index)
}
