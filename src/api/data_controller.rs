use tracing::{debug, trace};

use crate::core::Sample;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the sample set.
    ///
    /// Samples are kept in the given order. Any hover is cleared, so the chart
    /// lands in `Ready` (or `Empty` for an empty input).
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        let previous_count = self.samples.len();
        self.samples = samples;
        if self.hover.on_pointer_leave() {
            trace!("cleared hover after sample replacement");
        }
        debug!(
            previous_count,
            sample_count = self.samples.len(),
            state = ?self.state(),
            "set chart samples"
        );
    }

    /// Removes all samples, returning the chart to `Empty`.
    pub fn clear_samples(&mut self) {
        self.set_samples(Vec::new());
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}
