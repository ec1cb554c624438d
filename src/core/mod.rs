pub mod path;
pub mod scale;
pub mod ticks;
pub mod types;

pub use path::{PathVertex, SeriesPaths, build_paths, format_coordinate, line_path_from_vertices};
pub use scale::{Scale, make_scale};
pub use ticks::{DEFAULT_TICK_COUNT, MAX_TICK_COUNT, nice_step, plan_ticks};
pub use types::{ChartGeometry, Padding, PlotArea, Sample};
