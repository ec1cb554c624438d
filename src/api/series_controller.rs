use tracing::debug;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, SeriesDefinition, SeriesRegistry};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn series_registry(&self) -> &SeriesRegistry {
        &self.registry
    }

    #[must_use]
    pub fn visible_series(&self) -> Vec<&SeriesDefinition> {
        self.registry.visible_series()
    }

    /// Flips visibility of `key`; hiding the last visible series is ignored.
    ///
    /// Returns whether anything changed. The hover index survives a toggle.
    pub fn toggle_series(&mut self, key: &str) -> ChartResult<bool> {
        let changed = self.registry.toggle(key)?;
        self.log_visibility_change(key, changed);
        Ok(changed)
    }

    pub fn set_series_visible(&mut self, key: &str, visible: bool) -> ChartResult<bool> {
        let changed = self.registry.set_visible(key, visible)?;
        self.log_visibility_change(key, changed);
        Ok(changed)
    }

    fn log_visibility_change(&self, key: &str, changed: bool) {
        if changed {
            debug!(
                key,
                visible_keys = ?self.registry.visible_keys(),
                "series visibility changed"
            );
        } else {
            debug!(key, "series visibility unchanged");
        }
    }
}
