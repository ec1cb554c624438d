mod frame;
mod null_renderer;
mod primitives;

pub use frame::{
    ChartFrame, HoverGuide, SeriesFrame, TooltipContent, TooltipFrame, TooltipRow, XTick, YTick,
};
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `ChartFrame`, so drawing code stays
/// isolated from scaling, series and hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
