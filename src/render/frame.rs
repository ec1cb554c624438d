use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartGeometry, PathVertex};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ChartState, TooltipPlacement};

const BOUNDS_TOLERANCE: f64 = 1e-9;

/// Horizontal gridline with its value-axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YTick {
    pub value: f64,
    pub pixel_y: f64,
    pub label: String,
}

/// Date label under one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XTick {
    pub index: usize,
    pub pixel_x: f64,
    pub label: String,
}

/// Draw description for one visible series, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub key: String,
    pub label: String,
    pub color: String,
    pub line_path: String,
    pub area_path: String,
    pub line_points: Vec<PathVertex>,
}

/// Vertical guide at the hovered sample, spanning the plot height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverGuide {
    pub pixel_x: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub key: String,
    pub label: String,
    pub color: String,
    pub value: f64,
    pub value_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub rows: SmallVec<[TooltipRow; 4]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipFrame {
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub width: f64,
    pub height: f64,
    pub placement: TooltipPlacement,
    pub content: TooltipContent,
}

/// Backend-agnostic description of one chart draw pass.
///
/// In the `Empty` state every collection is empty and no hover output is set;
/// hosts render a placeholder instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub state: ChartState,
    pub geometry: ChartGeometry,
    pub ticks: Vec<YTick>,
    pub x_ticks: Vec<XTick>,
    pub series: Vec<SeriesFrame>,
    pub hover_guide: Option<HoverGuide>,
    pub tooltip: Option<TooltipFrame>,
}

impl ChartFrame {
    #[must_use]
    pub fn empty(geometry: ChartGeometry) -> Self {
        Self {
            state: ChartState::Empty,
            geometry,
            ticks: Vec::new(),
            x_ticks: Vec::new(),
            series: Vec::new(),
            hover_guide: None,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
            && self.x_ticks.is_empty()
            && self.series.is_empty()
            && self.hover_guide.is_none()
            && self.tooltip.is_none()
    }

    /// Checks that every coordinate is finite and the tooltip sits inside the
    /// plot area.
    pub fn validate(&self) -> ChartResult<()> {
        let geometry = self.geometry.validate()?;
        let plot = geometry.plot_area();

        for tick in &self.ticks {
            ensure_finite("tick pixel_y", tick.pixel_y)?;
        }
        for tick in &self.x_ticks {
            ensure_finite("x tick pixel_x", tick.pixel_x)?;
        }
        for series in &self.series {
            for vertex in &series.line_points {
                ensure_finite("series vertex x", vertex.x)?;
                ensure_finite("series vertex y", vertex.y)?;
            }
        }
        if let Some(guide) = self.hover_guide {
            ensure_finite("hover guide pixel_x", guide.pixel_x)?;
        }
        if let Some(tooltip) = &self.tooltip {
            ensure_finite("tooltip pixel_x", tooltip.pixel_x)?;
            ensure_finite("tooltip pixel_y", tooltip.pixel_y)?;
            let inside = tooltip.pixel_x >= plot.left - BOUNDS_TOLERANCE
                && tooltip.pixel_x + tooltip.width <= plot.right + BOUNDS_TOLERANCE
                && tooltip.pixel_y >= plot.top - BOUNDS_TOLERANCE
                && tooltip.pixel_y + tooltip.height <= plot.bottom + BOUNDS_TOLERANCE;
            if !inside {
                return Err(ChartError::InvalidData(
                    "tooltip box must lie inside the plot area".to_owned(),
                ));
            }
        }
        if self.state == ChartState::Empty && !self.is_empty() {
            return Err(ChartError::InvalidData(
                "empty chart state must not carry draw output".to_owned(),
            ));
        }
        Ok(())
    }
}

fn ensure_finite(name: &str, value: f64) -> ChartResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!("{name} must be finite")))
    }
}
