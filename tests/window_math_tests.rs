use approx::assert_relative_eq;
use chrono::DateTime;
use zoomsync_rs::SyncError;
use zoomsync_rs::core::window::{value_window, visible_index_range};
use zoomsync_rs::core::{AxisBounds, NormalizedRect, PriceSeries, Sample};

fn series_with_prices(prices: &[f64]) -> PriceSeries {
    let samples = prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            let timestamp =
                DateTime::from_timestamp(86_400 * i as i64, 0).expect("valid timestamp");
            Sample::new(timestamp, price, 1_000.0)
        })
        .collect();
    PriceSeries::new(samples)
}

#[test]
fn half_window_selects_expected_indices() {
    let rect = NormalizedRect::FULL.with_horizontal(0.5, 0.5);
    let (start, end) = visible_index_range(5, rect).expect("valid range");

    assert_eq!(start, 2);
    assert_eq!(end, 4);
}

#[test]
fn half_window_maps_price_extent_into_value_window() {
    let series = series_with_prices(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    let rect = NormalizedRect::FULL.with_horizontal(0.5, 0.5);
    let bounds = AxisBounds::new(10.0, 50.0);

    let window = value_window(rect, &series, bounds).expect("value window");

    // visible samples are 30..50; 30 sits at fraction 0.5, 50 at 1.0
    assert_relative_eq!(window.top, 0.0);
    assert_relative_eq!(window.height, 0.5);
    assert_relative_eq!(window.left, 0.5);
    assert_relative_eq!(window.width, 0.5);
}

#[test]
fn full_window_returns_full_value_range() {
    let series = series_with_prices(&[42.0, 7.0, 99.0, 63.0]);
    let (min, max) = series.price_extent().expect("non-empty extent");

    let window = value_window(NormalizedRect::FULL, &series, AxisBounds::new(min, max))
        .expect("value window");

    assert_relative_eq!(window.top, 0.0);
    assert_relative_eq!(window.height, 1.0);
}

#[test]
fn negative_left_clamps_index_start_to_zero() {
    let rect = NormalizedRect::FULL.with_horizontal(-0.5, 1.0);
    let (start, end) = visible_index_range(5, rect).expect("valid range");

    assert_eq!(start, 0);
    assert_eq!(end, 2);
}

#[test]
fn negative_left_does_not_fail_value_window() {
    let series = series_with_prices(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    let rect = NormalizedRect::FULL.with_horizontal(-0.5, 1.0);

    let window =
        value_window(rect, &series, AxisBounds::new(10.0, 50.0)).expect("value window");

    assert!(window.is_finite());
    assert_relative_eq!(window.left, -0.5);
}

#[test]
fn inverted_range_is_reported_as_degenerate() {
    let rect = NormalizedRect::FULL.with_horizontal(2.0, 0.5);

    let result = visible_index_range(5, rect);
    assert!(matches!(result, Err(SyncError::DegenerateRange { .. })));
}

#[test]
fn window_entirely_left_of_series_is_degenerate() {
    let rect = NormalizedRect::FULL.with_horizontal(-2.0, 0.5);

    let result = visible_index_range(5, rect);
    assert!(matches!(result, Err(SyncError::DegenerateRange { .. })));
}

#[test]
fn degenerate_range_falls_back_to_full_series_extent() {
    let series = series_with_prices(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    let rect = NormalizedRect::FULL.with_horizontal(2.0, 0.5);

    let window =
        value_window(rect, &series, AxisBounds::new(10.0, 50.0)).expect("fallback window");

    // full-series extent against matching bounds spans the whole value axis
    assert_relative_eq!(window.top, 0.0);
    assert_relative_eq!(window.height, 1.0);
}

#[test]
fn value_window_is_idempotent() {
    let series = series_with_prices(&[12.0, 48.0, 36.0, 24.0, 60.0, 18.0]);
    let rect = NormalizedRect::FULL.with_horizontal(0.3, 0.4);
    let bounds = AxisBounds::new(10.0, 70.0);

    let first = value_window(rect, &series, bounds).expect("first");
    let second = value_window(rect, &series, bounds).expect("second");

    assert_eq!(first, second);
}

#[test]
fn invalid_axis_bounds_are_rejected() {
    let series = series_with_prices(&[10.0, 20.0]);

    let flat = value_window(NormalizedRect::FULL, &series, AxisBounds::new(5.0, 5.0));
    assert!(matches!(flat, Err(SyncError::InvalidAxisBounds { .. })));

    let inverted = value_window(NormalizedRect::FULL, &series, AxisBounds::new(5.0, 1.0));
    assert!(matches!(inverted, Err(SyncError::InvalidAxisBounds { .. })));

    let non_finite = value_window(
        NormalizedRect::FULL,
        &series,
        AxisBounds::new(f64::NAN, 1.0),
    );
    assert!(matches!(
        non_finite,
        Err(SyncError::InvalidAxisBounds { .. })
    ));
}

#[test]
fn empty_series_is_rejected() {
    let series = PriceSeries::new(Vec::new());

    let result = value_window(NormalizedRect::FULL, &series, AxisBounds::new(0.0, 1.0));
    assert!(matches!(result, Err(SyncError::InvalidData(_))));
}

#[test]
fn non_finite_rect_is_rejected() {
    let rect = NormalizedRect::new(f64::NAN, 0.5, 0.0, 1.0);

    let result = visible_index_range(5, rect);
    assert!(matches!(result, Err(SyncError::InvalidData(_))));
}
