use serde::{Deserialize, Serialize};

use crate::core::types::{ChartGeometry, PlotArea};

/// Index/value to pixel mapping for one layout pass.
///
/// `y_max` is expected to be the top tick from [`crate::core::plan_ticks`] so
/// the topmost gridline coincides with the plot's upper edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    sample_count: usize,
    y_max: f64,
    plot: PlotArea,
}

/// Builds the coordinate scale for `sample_count` samples.
#[must_use]
pub fn make_scale(sample_count: usize, y_max: f64, geometry: ChartGeometry) -> Scale {
    Scale {
        sample_count,
        y_max: if y_max.is_finite() && y_max > 0.0 {
            y_max
        } else {
            0.0
        },
        plot: geometry.plot_area(),
    }
}

impl Scale {
    #[must_use]
    pub fn sample_count(self) -> usize {
        self.sample_count
    }

    #[must_use]
    pub fn y_max(self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn plot_area(self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn chart_width(self) -> f64 {
        self.plot.width()
    }

    #[must_use]
    pub fn chart_height(self) -> f64 {
        self.plot.height()
    }

    /// Pixel row of the horizontal axis.
    #[must_use]
    pub fn chart_bottom(self) -> f64 {
        self.plot.bottom
    }

    /// Horizontal pixel for sample `index`.
    ///
    /// Samples are spread evenly across the plot width. A single sample (or an
    /// empty series) maps to the horizontal center.
    #[must_use]
    pub fn x_of(self, index: usize) -> f64 {
        if self.sample_count <= 1 {
            return self.plot.left + self.chart_width() / 2.0;
        }
        let ratio = index as f64 / (self.sample_count - 1) as f64;
        self.plot.left + ratio * self.chart_width()
    }

    /// Vertical pixel for `value`; higher values draw higher on screen.
    #[must_use]
    pub fn y_of(self, value: f64) -> f64 {
        if self.y_max == 0.0 {
            return self.chart_bottom();
        }
        self.chart_bottom() - (value / self.y_max) * self.chart_height()
    }

    /// Distance between adjacent samples, or the full plot width for fewer
    /// than two samples.
    #[must_use]
    pub fn x_step(self) -> f64 {
        if self.sample_count <= 1 {
            return self.chart_width();
        }
        self.chart_width() / (self.sample_count - 1) as f64
    }
}
