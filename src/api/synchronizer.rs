use tracing::{debug, trace};

use crate::core::{NormalizedRect, SeriesSet, Timeframe, window};
use crate::error::{SyncError, SyncResult};

use super::ChartViewport;

/// Keeps the minimap's selection rectangle and the main chart's time/value
/// windows consistent.
///
/// Both charts stay bound to the `all` series at all times; timeframe
/// selection narrows only the visual window. That keeps minimap drags and
/// timeframe buttons on one data source instead of tracking a hidden
/// source-swap state machine.
pub struct ViewportSynchronizer<V: ChartViewport> {
    series: SeriesSet,
    main: Option<V>,
    minimap: Option<V>,
    selected: Timeframe,
}

impl<V: ChartViewport> ViewportSynchronizer<V> {
    #[must_use]
    pub fn new(series: SeriesSet) -> Self {
        Self {
            series,
            main: None,
            minimap: None,
            selected: Timeframe::All,
        }
    }

    pub fn attach_main(&mut self, viewport: V) {
        self.main = Some(viewport);
    }

    pub fn attach_minimap(&mut self, viewport: V) {
        self.minimap = Some(viewport);
    }

    #[must_use]
    pub fn main(&self) -> Option<&V> {
        self.main.as_ref()
    }

    #[must_use]
    pub fn minimap(&self) -> Option<&V> {
        self.minimap.as_ref()
    }

    #[must_use]
    pub fn selected_timeframe(&self) -> Timeframe {
        self.selected
    }

    #[must_use]
    pub fn series_set(&self) -> &SeriesSet {
        &self.series
    }

    /// Applies a timeframe selection: right-anchors the minimap window over
    /// the timeframe's span and recomputes the main chart's value window.
    ///
    /// Returns `Ok(false)` without touching anything when either viewport is
    /// not attached yet. Errors when the timeframe has no registered samples.
    pub fn select_timeframe(&mut self, timeframe: Timeframe) -> SyncResult<bool> {
        let start = self
            .series
            .series(timeframe)
            .and_then(|series| series.first())
            .map(|sample| sample.timestamp)
            .ok_or(SyncError::EmptySeries(timeframe))?;

        let (Some(main), Some(minimap)) = (&mut self.main, &mut self.minimap) else {
            debug!(%timeframe, "viewport not attached; skipping timeframe selection");
            return Ok(false);
        };

        let all = self.series.all();
        let minimap_rect = window::timeframe_window(all, start, minimap.window_rect())?;
        minimap.set_window_rect(minimap_rect);

        let zoom = compose_zoom(main.actual_window_rect(), minimap_rect);
        let applied = window::value_window(zoom, all, main.value_axis_bounds())?;
        main.set_window_rect(applied);

        self.selected = timeframe;
        debug!(
            %timeframe,
            left = applied.left,
            width = applied.width,
            "applied timeframe window"
        );
        Ok(true)
    }

    /// Reacts to a user-driven minimap drag/resize: realigns the selected
    /// timeframe to `all` and recomputes the main chart's value window from
    /// the minimap's current rectangle.
    pub fn minimap_window_changed(&mut self) -> SyncResult<bool> {
        let (Some(main), Some(minimap)) = (&mut self.main, &mut self.minimap) else {
            debug!("viewport not attached; skipping minimap window change");
            return Ok(false);
        };

        // The minimap always spans the full history, so drags realign the
        // selected timeframe to the full-history source.
        self.selected = Timeframe::All;

        let zoom = compose_zoom(main.actual_window_rect(), minimap.window_rect());
        let applied = window::value_window(zoom, self.series.all(), main.value_axis_bounds())?;
        main.set_window_rect(applied);

        trace!(
            left = applied.left,
            width = applied.width,
            "applied minimap window"
        );
        Ok(true)
    }
}

/// Horizontal fields from the slider window, vertical from the chart's
/// currently rendered window (recomputed right after).
fn compose_zoom(chart_window: NormalizedRect, slider_window: NormalizedRect) -> NormalizedRect {
    chart_window.with_horizontal(slider_window.left, slider_window.width)
}
