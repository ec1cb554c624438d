use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// No-op renderer for tests and headless use.
///
/// Frames are still validated, and the last frame's shape is recorded.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_series_count: usize,
    pub last_tick_count: usize,
    pub last_had_tooltip: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_series_count = frame.series.len();
        self.last_tick_count = frame.ticks.len();
        self.last_had_tooltip = frame.tooltip.is_some();
        Ok(())
    }
}
