mod axis_ticks;
mod data_controller;
mod engine;
mod engine_config;
mod interaction_controller;
mod json_contract;
mod label_text_formatter;
mod render_frame_builder;
mod series_controller;
mod series_registry;

pub use axis_ticks::AXIS_X_LABEL_MIN_SPACING_PX;
pub use engine::{ChartEngine, ChartLayout};
pub use engine_config::ChartEngineConfig;
pub use json_contract::{CHART_FRAME_JSON_SCHEMA_V1, ChartFrameJsonContractV1};
pub use label_text_formatter::{CurrencyLabelFormatter, LabelFormatter};
pub use series_registry::{SeriesDefinition, SeriesRegistry, ValueAccessor, ValueFn};
