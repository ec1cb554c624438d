mod hit_zone;
mod tooltip;

pub use hit_zone::{HitZone, hit_test, hit_zones};
pub use tooltip::{
    PLACEMENT_PRIORITY, TooltipBox, TooltipPlacement, TooltipPosition, compute_tooltip,
};

use serde::{Deserialize, Serialize};

/// Lifecycle of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartState {
    /// No samples; the host shows a placeholder instead of a chart.
    Empty,
    /// At least one sample and nothing hovered.
    Ready,
    /// A sample index is tracked by the hover state.
    Hovering,
}

/// Currently hovered sample, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn is_hovering(self) -> bool {
        self.index.is_some()
    }

    /// Tracks `index`; returns `true` when the hovered sample changed.
    pub fn on_pointer_enter(&mut self, index: usize) -> bool {
        let changed = self.index != Some(index);
        self.index = Some(index);
        changed
    }

    /// Clears the hover; returns `true` when something was hovered.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.index.take().is_some()
    }
}
