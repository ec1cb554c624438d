use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart geometry: width={width}, height={height}")]
    InvalidGeometry { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid series declaration: {0}")]
    InvalidSeries(String),

    #[error("unknown series key: {0}")]
    UnknownSeries(String),

    #[error("hover index {index} is out of range for {sample_count} samples")]
    HoverIndexOutOfRange { index: usize, sample_count: usize },
}
