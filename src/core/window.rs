//! Window math shared by timeframe selection and minimap drags.
//!
//! All functions here are pure in their inputs. Horizontal windows are
//! right-anchored fractions of the `all` series; vertical windows are
//! normalized against the chart's actual value-axis bounds with the flipped
//! convention `top = 1 - y_frac_max`.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::core::series::{PriceSeries, price_extent};
use crate::core::types::{AxisBounds, NormalizedRect, Timeframe};
use crate::error::{SyncError, SyncResult};

/// Index into `all` of the first sample at-or-after `start`.
///
/// Clamped to the last valid index when `start` is later than every sample;
/// resolves to 0 when `start` precedes the whole series. Returns 0 for an
/// empty series; callers guard emptiness before converting to a window.
#[must_use]
pub fn timeframe_start_index(all: &PriceSeries, start: DateTime<Utc>) -> usize {
    let samples = all.samples();
    let at_or_after = samples.partition_point(|sample| sample.timestamp < start);
    at_or_after.min(samples.len().saturating_sub(1))
}

/// Converts a timeframe start into the right-anchored horizontal window.
///
/// `width = (N - i) / N` under the convention that the most recent sample
/// sits at relative position 1. Vertical fields carry over from `current`.
pub fn timeframe_window(
    all: &PriceSeries,
    start: DateTime<Utc>,
    current: NormalizedRect,
) -> SyncResult<NormalizedRect> {
    if all.is_empty() {
        return Err(SyncError::EmptySeries(Timeframe::All));
    }

    let n = all.len() as f64;
    let index = timeframe_start_index(all, start) as f64;
    let width = (n - index) / n;
    Ok(current.with_horizontal(1.0 - width, width))
}

/// Converts a horizontal window into inclusive sample indices.
///
/// `index_start = floor((N-1)·left)` clamped to ≥ 0,
/// `index_end = ceil((N-1)·(left + width))` clamped to ≤ N-1.
/// An inverted range after clamping is reported as `DegenerateRange`.
pub fn visible_index_range(len: usize, rect: NormalizedRect) -> SyncResult<(usize, usize)> {
    if len == 0 {
        return Err(SyncError::InvalidData(
            "cannot window an empty series".to_owned(),
        ));
    }
    if !rect.is_finite() {
        return Err(SyncError::InvalidData(
            "window rect must be finite".to_owned(),
        ));
    }

    let last = (len - 1) as f64;
    let start = (last * rect.left).floor().max(0.0);
    let end = (last * (rect.left + rect.width)).ceil().min(last);

    if end < start {
        return Err(SyncError::DegenerateRange {
            start: start as usize,
            end: end.max(0.0) as usize,
        });
    }

    Ok((start as usize, end as usize))
}

/// Recomputes the vertical window for a horizontal window over `series`.
///
/// Scans the visible samples for their price extent, normalizes it against
/// the axis bounds, and composes the final window: horizontal fields pass
/// through verbatim, vertical fields come from the normalized extent. A
/// degenerate index range falls back to the full-series price extent instead
/// of propagating NaN into the rendered window.
pub fn value_window(
    rect: NormalizedRect,
    series: &PriceSeries,
    bounds: AxisBounds,
) -> SyncResult<NormalizedRect> {
    let bounds = bounds.validated()?;

    let (min_price, max_price) = match visible_index_range(series.len(), rect) {
        Ok((start, end)) => {
            price_extent(&series.samples()[start..=end]).unwrap_or((bounds.min, bounds.max))
        }
        Err(SyncError::DegenerateRange { start, end }) => {
            warn!(
                start,
                end, "degenerate visible range; falling back to full-series price extent"
            );
            series.price_extent().unwrap_or((bounds.min, bounds.max))
        }
        Err(other) => return Err(other),
    };

    let y_frac_min = bounds.fraction_of(min_price);
    let y_frac_max = bounds.fraction_of(max_price);

    Ok(rect.with_vertical(1.0 - y_frac_max, y_frac_max - y_frac_min))
}
