use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, DEFAULT_TICK_COUNT, MAX_TICK_COUNT};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipBox;

use super::axis_ticks::AXIS_X_LABEL_MIN_SPACING_PX;

/// Per-instance chart setup.
///
/// Serializable so dashboards can ship chart presets as JSON alongside their
/// series declarations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub geometry: ChartGeometry,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub tooltip: TooltipBox,
    #[serde(default = "default_x_label_min_spacing_px")]
    pub x_label_min_spacing_px: f64,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(geometry: ChartGeometry) -> Self {
        Self {
            geometry,
            tick_count: default_tick_count(),
            tooltip: TooltipBox::default(),
            x_label_min_spacing_px: default_x_label_min_spacing_px(),
        }
    }

    /// Sets the target number of value-axis ticks.
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_tooltip_box(mut self, tooltip: TooltipBox) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Sets the minimum gap between date labels; `0` keeps every label.
    #[must_use]
    pub fn with_x_label_min_spacing_px(mut self, spacing_px: f64) -> Self {
        self.x_label_min_spacing_px = spacing_px;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        let geometry = self.geometry.validate()?;

        if !(2..=MAX_TICK_COUNT).contains(&self.tick_count) {
            return Err(ChartError::InvalidData(format!(
                "tick count must be in [2, {MAX_TICK_COUNT}], got {}",
                self.tick_count
            )));
        }

        let TooltipBox {
            width,
            height,
            margin,
        } = self.tooltip;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip box size must be finite and > 0".to_owned(),
            ));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip margin must be finite and >= 0".to_owned(),
            ));
        }
        let plot = geometry.plot_area();
        if width > plot.width() || height > plot.height() {
            return Err(ChartError::InvalidData(format!(
                "tooltip box {width}x{height} does not fit the {}x{} plot area",
                plot.width(),
                plot.height()
            )));
        }

        if !self.x_label_min_spacing_px.is_finite() || self.x_label_min_spacing_px < 0.0 {
            return Err(ChartError::InvalidData(
                "x label spacing must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(ChartGeometry::default())
    }
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_x_label_min_spacing_px() -> f64 {
    AXIS_X_LABEL_MIN_SPACING_PX
}
