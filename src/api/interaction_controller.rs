use tracing::{trace, warn};

use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitZone, hit_test, hit_zones};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover.index()
    }

    /// Pointer entered the hit zone of sample `index`.
    ///
    /// Out-of-range indices are rejected and leave the state untouched.
    pub fn pointer_enter(&mut self, index: usize) -> ChartResult<()> {
        let sample_count = self.samples.len();
        if index >= sample_count {
            warn!(index, sample_count, "rejected hover outside sample range");
            return Err(ChartError::HoverIndexOutOfRange {
                index,
                sample_count,
            });
        }
        if self.hover.on_pointer_enter(index) {
            trace!(index, "hover index changed");
        }
        Ok(())
    }

    /// Pointer left every hit zone.
    pub fn pointer_leave(&mut self) {
        if self.hover.on_pointer_leave() {
            trace!("hover cleared");
        }
    }

    /// Hit-tests surface coordinates and updates hover accordingly.
    ///
    /// Returns the hovered index after the update.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        let hit = self.layout().and_then(|layout| {
            let zones = hit_zones(layout.scale);
            hit_test(&zones, layout.scale.plot_area(), x, y)
        });
        match hit {
            Some(index) => {
                if self.hover.on_pointer_enter(index) {
                    trace!(index, x, y, "hover index changed");
                }
            }
            None => self.pointer_leave(),
        }
        self.hover.index()
    }

    /// Hit zones for the current samples; empty when there is no data.
    #[must_use]
    pub fn hit_zones(&self) -> Vec<HitZone> {
        self.layout()
            .map(|layout| hit_zones(layout.scale))
            .unwrap_or_default()
    }
}
