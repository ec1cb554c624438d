use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, Sample, Scale};
use crate::error::ChartResult;
use crate::interaction::{ChartState, HoverState};
use crate::render::Renderer;

use super::{ChartEngineConfig, CurrencyLabelFormatter, LabelFormatter, SeriesRegistry};

/// Scale and value-axis ticks derived from the current samples and visible
/// series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub scale: Scale,
    pub ticks: Vec<f64>,
}

/// Chart orchestrator consumed by dashboard screens.
///
/// Owns the samples, the series visibility and the hover index. Every output
/// is recomputed from that state on demand; nothing derived is cached.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) registry: SeriesRegistry,
    pub(super) samples: Vec<Sample>,
    pub(super) hover: HoverState,
    pub(super) formatter: Box<dyn LabelFormatter>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(
        renderer: R,
        config: ChartEngineConfig,
        registry: SeriesRegistry,
    ) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            registry,
            samples: Vec::new(),
            hover: HoverState::default(),
            formatter: Box::new(CurrencyLabelFormatter::default()),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        self.config.geometry
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        if self.samples.is_empty() {
            ChartState::Empty
        } else if self.hover.is_hovering() {
            ChartState::Hovering
        } else {
            ChartState::Ready
        }
    }

    /// Replaces the formatter used for value and date labels.
    pub fn set_label_formatter(&mut self, formatter: Box<dyn LabelFormatter>) {
        self.formatter = formatter;
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(feature = "cairo-backend")]
impl<R: Renderer + crate::render::CairoContextRenderer> ChartEngine<R> {
    /// Draws the current frame onto a host-owned cairo context.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        let frame = self.frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
