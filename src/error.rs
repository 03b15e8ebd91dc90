use thiserror::Error;

use crate::core::Timeframe;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("timeframe {0} has no samples")]
    EmptySeries(Timeframe),

    #[error("visible index range inverted after clamping: start={start}, end={end}")]
    DegenerateRange { start: usize, end: usize },

    #[error("axis bounds must be finite with max > min: min={min}, max={max}")]
    InvalidAxisBounds { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("fixture parse failed: {0}")]
    FixtureParse(#[from] serde_json::Error),
}
