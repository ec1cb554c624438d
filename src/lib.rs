//! trend-chart: time-series chart engine for marketplace analytics screens.
//!
//! The crate turns ordered, dated samples into a backend-agnostic
//! [`render::ChartFrame`]: nice value-axis ticks, evenly spaced sample
//! positions, line/area paths per visible series, and hover output (guide
//! line plus a tooltip clamped inside the plot area).
//!
//! Layering follows data flow: `core` holds pure math (ticks, scale, paths),
//! `interaction` holds hover state and tooltip placement, `api` wires both
//! into [`ChartEngine`], and `render` defines what a drawing surface receives.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, SeriesDefinition, SeriesRegistry};
pub use error::{ChartError, ChartResult};
