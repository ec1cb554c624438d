use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One dated data point carrying any number of named metric values.
///
/// Samples are consumed in input order; the engine never sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: String,
    #[serde(default)]
    pub metrics: IndexMap<String, f64>,
}

impl Sample {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            metrics: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }

    /// Value for `key`, or `None` when the metric is absent.
    #[must_use]
    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }

    /// Parses `date` as a calendar date.
    ///
    /// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps (the date part is kept).
    pub fn calendar_date(&self) -> ChartResult<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

pub(crate) fn parse_calendar_date(raw: &str) -> ChartResult<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|e| ChartError::InvalidData(format!("unparseable sample date `{raw}`: {e}")))
}

/// Padding around the plot area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

impl Default for Padding {
    // Left side is wide enough for six-digit currency labels like "$250,000".
    fn default() -> Self {
        Self::new(72.0, 20.0, 20.0, 40.0)
    }
}

/// Fixed drawing-surface size plus paddings for one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: Padding,
}

impl ChartGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Rejects non-finite values, negative paddings and paddings that leave
    /// no room for the plot area.
    pub fn validate(self) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidGeometry {
            width: self.width,
            height: self.height,
        };

        let Padding {
            left,
            right,
            top,
            bottom,
        } = self.padding;
        let all_finite = [self.width, self.height, left, right, top, bottom]
            .iter()
            .all(|value| value.is_finite());
        if !all_finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(invalid());
        }
        if [left, right, top, bottom].iter().any(|value| *value < 0.0) {
            return Err(invalid());
        }
        if left + right >= self.width || top + bottom >= self.height {
            return Err(invalid());
        }
        Ok(self)
    }

    #[must_use]
    pub fn plot_area(self) -> PlotArea {
        PlotArea {
            left: self.padding.left,
            top: self.padding.top,
            right: self.width - self.padding.right,
            bottom: self.height - self.padding.bottom,
        }
    }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self::new(800.0, 300.0)
    }
}

/// Padded rectangle where data is drawn, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }
}
