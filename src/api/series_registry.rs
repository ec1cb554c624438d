use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::Sample;
use crate::error::{ChartError, ChartResult};

/// Custom accessor signature for derived metrics.
pub type ValueFn = Arc<dyn Fn(&Sample) -> f64 + Send + Sync>;

/// How a series reads its value out of a sample.
#[derive(Clone)]
pub enum ValueAccessor {
    /// Reads `sample.metrics[key]`.
    Metric(String),
    /// Computes the value from the whole sample (e.g. revenue minus cost).
    Custom(ValueFn),
}

impl ValueAccessor {
    #[must_use]
    pub fn metric(key: impl Into<String>) -> Self {
        Self::Metric(key.into())
    }

    #[must_use]
    pub fn custom<F>(accessor: F) -> Self
    where
        F: Fn(&Sample) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(accessor))
    }

    /// Missing metrics and non-finite results read as `0.0`.
    #[must_use]
    pub fn value_of(&self, sample: &Sample) -> f64 {
        let raw = match self {
            Self::Metric(key) => sample.metric(key),
            Self::Custom(accessor) => Some(accessor(sample)),
        };
        raw.filter(|value| value.is_finite()).unwrap_or(0.0)
    }
}

impl fmt::Debug for ValueAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric(key) => f.debug_tuple("Metric").field(key).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One renderable metric.
#[derive(Debug, Clone)]
pub struct SeriesDefinition {
    key: String,
    label: String,
    color: String,
    accessor: ValueAccessor,
    visible: bool,
}

impl SeriesDefinition {
    /// Series reading the sample metric named `key`.
    #[must_use]
    pub fn metric(
        key: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        let key = key.into();
        Self {
            accessor: ValueAccessor::Metric(key.clone()),
            key,
            label: label.into(),
            color: color.into(),
            visible: true,
        }
    }

    /// Series with an explicit accessor.
    #[must_use]
    pub fn with_accessor(
        key: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        accessor: ValueAccessor,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            color: color.into(),
            accessor,
            visible: true,
        }
    }

    /// Sets the initial visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Opaque display token handed through to the rendering surface.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn accessor(&self) -> &ValueAccessor {
        &self.accessor
    }

    #[must_use]
    pub fn value_of(&self, sample: &Sample) -> f64 {
        self.accessor.value_of(sample)
    }

    #[must_use]
    pub fn initially_visible(&self) -> bool {
        self.visible
    }
}

/// Ordered series declarations plus their current visibility.
///
/// Declaration order is draw order: earlier series render underneath later
/// ones. At least one series is visible at all times.
#[derive(Debug, Clone)]
pub struct SeriesRegistry {
    definitions: Vec<SeriesDefinition>,
    visibility: IndexMap<String, bool>,
}

impl SeriesRegistry {
    pub fn new(definitions: Vec<SeriesDefinition>) -> ChartResult<Self> {
        if definitions.is_empty() {
            return Err(ChartError::InvalidSeries(
                "at least one series must be declared".to_owned(),
            ));
        }

        let mut visibility = IndexMap::with_capacity(definitions.len());
        for definition in &definitions {
            if definition.key.trim().is_empty() {
                return Err(ChartError::InvalidSeries(
                    "series key must not be empty".to_owned(),
                ));
            }
            if visibility
                .insert(definition.key.clone(), definition.visible)
                .is_some()
            {
                return Err(ChartError::InvalidSeries(format!(
                    "duplicate series key `{}`",
                    definition.key
                )));
            }
        }
        if !visibility.values().any(|visible| *visible) {
            return Err(ChartError::InvalidSeries(
                "at least one series must start visible".to_owned(),
            ));
        }

        Ok(Self {
            definitions,
            visibility,
        })
    }

    #[must_use]
    pub fn definitions(&self) -> &[SeriesDefinition] {
        &self.definitions
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SeriesDefinition> {
        self.visibility
            .get_index_of(key)
            .map(|index| &self.definitions[index])
    }

    pub fn is_visible(&self, key: &str) -> ChartResult<bool> {
        self.visibility
            .get(key)
            .copied()
            .ok_or_else(|| ChartError::UnknownSeries(key.to_owned()))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visibility.values().filter(|visible| **visible).count()
    }

    /// Flips visibility of `key`.
    ///
    /// Returns `Ok(false)` without touching state when the flip would hide the
    /// last visible series.
    pub fn toggle(&mut self, key: &str) -> ChartResult<bool> {
        let visible = self.is_visible(key)?;
        self.set_visible(key, !visible)
    }

    /// Sets visibility of `key`; returns whether the state changed.
    ///
    /// Hiding the last visible series is a no-op.
    pub fn set_visible(&mut self, key: &str, visible: bool) -> ChartResult<bool> {
        let current = self.is_visible(key)?;
        if current == visible {
            return Ok(false);
        }
        if !visible && self.visible_count() == 1 {
            return Ok(false);
        }
        if let Some(slot) = self.visibility.get_mut(key) {
            *slot = visible;
        }
        Ok(true)
    }

    /// Visible series in declaration order.
    #[must_use]
    pub fn visible_series(&self) -> Vec<&SeriesDefinition> {
        self.definitions
            .iter()
            .zip(self.visibility.values())
            .filter_map(|(definition, visible)| visible.then_some(definition))
            .collect()
    }

    #[must_use]
    pub fn visible_keys(&self) -> Vec<&str> {
        self.visible_series()
            .into_iter()
            .map(SeriesDefinition::key)
            .collect()
    }

    /// First visible series; it anchors the tooltip.
    #[must_use]
    pub fn primary(&self) -> &SeriesDefinition {
        self.visible_series()
            .into_iter()
            .next()
            .unwrap_or(&self.definitions[0])
    }

    /// Largest value of any visible series across `samples`, floored at 0.
    #[must_use]
    pub fn shared_max(&self, samples: &[Sample]) -> f64 {
        let visible = self.visible_series();
        samples
            .iter()
            .flat_map(|sample| visible.iter().map(move |series| series.value_of(sample)))
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.into_inner().max(0.0))
    }
}
