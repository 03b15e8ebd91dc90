use crate::core::{AxisBounds, NormalizedRect, PriceSeries, Timeframe};
use crate::error::{SyncError, SyncResult};

/// The chart viewport abstraction the synchronizer drives.
///
/// Implementations wrap a concrete chart component (main chart or minimap
/// slider). `actual_window_rect` is the currently rendered window, which may
/// lag a requested `set_window_rect` in animated hosts; `value_axis_bounds`
/// must reflect the axis's live actual minimum/maximum so callers always see
/// fresh bounds rather than a cached copy.
pub trait ChartViewport {
    fn window_rect(&self) -> NormalizedRect;

    fn set_window_rect(&mut self, rect: NormalizedRect);

    fn actual_window_rect(&self) -> NormalizedRect;

    fn value_axis_bounds(&self) -> AxisBounds;
}

/// A headless viewport for tests, benches, and embedding layers without a
/// live chart component. The rendered window tracks the requested window
/// immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InMemoryViewport {
    window: NormalizedRect,
    bounds: AxisBounds,
}

impl InMemoryViewport {
    #[must_use]
    pub fn new(bounds: AxisBounds) -> Self {
        Self {
            window: NormalizedRect::FULL,
            bounds,
        }
    }

    /// Builds a viewport whose axis bounds match a series' own price extent,
    /// the way an autoscaling chart derives them from its bound data.
    pub fn from_series(series: &PriceSeries) -> SyncResult<Self> {
        let (min, max) = series
            .price_extent()
            .ok_or(SyncError::EmptySeries(Timeframe::All))?;
        AxisBounds::new(min, max).validated().map(Self::new)
    }

    pub fn set_value_axis_bounds(&mut self, bounds: AxisBounds) {
        self.bounds = bounds;
    }
}

impl ChartViewport for InMemoryViewport {
    fn window_rect(&self) -> NormalizedRect {
        self.window
    }

    fn set_window_rect(&mut self, rect: NormalizedRect) {
        self.window = rect;
    }

    fn actual_window_rect(&self) -> NormalizedRect {
        self.window
    }

    fn value_axis_bounds(&self) -> AxisBounds {
        self.bounds
    }
}
