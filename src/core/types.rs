use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

/// A rectangle in normalized axis coordinates.
///
/// Each field is a fraction of an axis's full extent. `left`/`width` map to
/// the horizontal (time) axis, `top`/`height` to the vertical (value) axis
/// with `top` increasing downward. `left + width` and `top + height` may land
/// outside `[0, 1]` after a scroll past series bounds; consumers clamp when
/// converting to indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
}

impl NormalizedRect {
    /// The identity window: the full extent of both axes.
    pub const FULL: Self = Self {
        left: 0.0,
        width: 1.0,
        top: 0.0,
        height: 1.0,
    };

    #[must_use]
    pub fn new(left: f64, width: f64, top: f64, height: f64) -> Self {
        Self {
            left,
            width,
            top,
            height,
        }
    }

    /// Returns a copy with the horizontal fields replaced.
    #[must_use]
    pub fn with_horizontal(self, left: f64, width: f64) -> Self {
        Self {
            left,
            width,
            ..self
        }
    }

    /// Returns a copy with the vertical fields replaced.
    #[must_use]
    pub fn with_vertical(self, top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            ..self
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite()
            && self.width.is_finite()
            && self.top.is_finite()
            && self.height.is_finite()
    }
}

impl Default for NormalizedRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// Actual minimum/maximum data values of a chart value axis.
///
/// These are owned and computed by the external chart component from the bound
/// series; the synchronizer queries them fresh at call time and never caches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    pub fn validated(self) -> SyncResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            return Err(SyncError::InvalidAxisBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(self)
    }

    /// Normalizes `value` into this axis's value-fraction space.
    #[must_use]
    pub fn fraction_of(self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// A named bucket selecting a contiguous, most-recent-anchored subset of the
/// full price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "all")]
    All,
}

impl Timeframe {
    /// Selector order as presented by timeframe button rows.
    pub const ALL_VALUES: [Self; 5] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::OneYear,
        Self::All,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::OneYear => "1y",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Self::OneDay),
            "1w" => Ok(Self::OneWeek),
            "1m" => Ok(Self::OneMonth),
            "1y" => Ok(Self::OneYear),
            "all" => Ok(Self::All),
            other => Err(SyncError::InvalidData(format!(
                "unknown timeframe label: {other}"
            ))),
        }
    }
}
