use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Timeframe;
use crate::core::primitives::decimal_to_f64;
use crate::error::{SyncError, SyncResult};

/// One time/price/volume observation.
///
/// The wire field for the timestamp is `date`, matching the historical
/// fixture format this crate loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub volume: f64,
}

impl Sample {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, price: f64, volume: f64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }

    /// Builds a sample from exact decimal price/volume values.
    pub fn from_decimal(
        timestamp: DateTime<Utc>,
        price: Decimal,
        volume: Decimal,
    ) -> SyncResult<Self> {
        Ok(Self {
            timestamp,
            price: decimal_to_f64(price, "price")?,
            volume: decimal_to_f64(volume, "volume")?,
        })
    }
}

/// An ordered, canonicalized collection of samples.
///
/// Construction sorts ascending by timestamp, drops samples with non-finite
/// price or volume, and collapses duplicate timestamps to the last sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    samples: Vec<Sample>,
}

impl PriceSeries {
    #[must_use]
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            samples: canonicalize_samples(samples),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Min/max price over the whole series, or `None` when empty.
    #[must_use]
    pub fn price_extent(&self) -> Option<(f64, f64)> {
        price_extent(&self.samples)
    }
}

/// Min/max price over a slice of samples.
#[must_use]
pub fn price_extent(samples: &[Sample]) -> Option<(f64, f64)> {
    let first = samples.first()?;
    let mut min = first.price;
    let mut max = first.price;
    for sample in &samples[1..] {
        min = min.min(sample.price);
        max = max.max(sample.price);
    }
    Some((min, max))
}

fn canonicalize_samples(mut samples: Vec<Sample>) -> Vec<Sample> {
    let original_len = samples.len();
    samples.retain(|sample| sample.price.is_finite() && sample.volume.is_finite());
    samples.sort_by_key(|sample| sample.timestamp);

    let mut deduped: Vec<Sample> = Vec::with_capacity(samples.len());
    let mut duplicate_count = 0_usize;
    for sample in samples {
        if let Some(last) = deduped.last_mut() {
            if sample.timestamp == last.timestamp {
                *last = sample;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(sample);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized samples on series construction"
        );
    }
    deduped
}

/// Named series per timeframe.
///
/// The `all` series is mandatory and is the canonical source for
/// index-to-value mapping; shorter timeframes are most-recent-anchored
/// subsets of it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    by_timeframe: IndexMap<Timeframe, PriceSeries>,
}

impl SeriesSet {
    pub fn new(all: PriceSeries) -> SyncResult<Self> {
        if all.is_empty() {
            return Err(SyncError::EmptySeries(Timeframe::All));
        }
        let mut by_timeframe = IndexMap::new();
        by_timeframe.insert(Timeframe::All, all);
        Ok(Self { by_timeframe })
    }

    /// Registers (or replaces) the series for a timeframe.
    pub fn insert(&mut self, timeframe: Timeframe, series: PriceSeries) {
        debug!(%timeframe, samples = series.len(), "registered timeframe series");
        self.by_timeframe.insert(timeframe, series);
    }

    #[must_use]
    pub fn series(&self, timeframe: Timeframe) -> Option<&PriceSeries> {
        self.by_timeframe.get(&timeframe)
    }

    #[must_use]
    pub fn all(&self) -> &PriceSeries {
        &self.by_timeframe[&Timeframe::All]
    }

    #[must_use]
    pub fn timeframes(&self) -> impl Iterator<Item = Timeframe> + '_ {
        self.by_timeframe.keys().copied()
    }

    /// Loads a series set from the historical fixture shape:
    /// a JSON object keyed by timeframe label, values arrays of samples.
    pub fn from_json_str(json: &str) -> SyncResult<Self> {
        let raw: IndexMap<Timeframe, Vec<Sample>> = serde_json::from_str(json)?;

        let mut by_series: IndexMap<Timeframe, PriceSeries> = raw
            .into_iter()
            .map(|(timeframe, samples)| (timeframe, PriceSeries::new(samples)))
            .collect();

        let all = by_series
            .shift_remove(&Timeframe::All)
            .ok_or_else(|| SyncError::InvalidData("fixture is missing the all series".to_owned()))?;

        let mut set = Self::new(all)?;
        for (timeframe, series) in by_series {
            set.insert(timeframe, series);
        }
        Ok(set)
    }
}
