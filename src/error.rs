use thiserror::Error;

use crate::core::SeriesId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid range: upper={upper} must be >= lower={lower}")]
    InvalidRange { upper: f64, lower: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown series: {0}")]
    UnknownSeries(SeriesId),
}
