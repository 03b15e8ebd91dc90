pub mod primitives;
pub mod series;
pub mod types;
pub mod window;

pub use series::{PriceSeries, Sample, SeriesSet};
pub use types::{AxisBounds, NormalizedRect, Timeframe};
