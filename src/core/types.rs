use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::PlotResult;

/// Container (drawing surface) size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Height over width, as used to derive the horizontal gridline count.
    #[must_use]
    pub fn aspect(self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

/// One ECG reading: unix timestamp in milliseconds and amplitude in millivolts.
///
/// Serialized as a `[timestamp, amplitude]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64)", into = "(i64, f64)")]
pub struct Sample {
    pub timestamp_ms: i64,
    pub amplitude_mv: f64,
}

impl Sample {
    #[must_use]
    pub fn new(timestamp_ms: i64, amplitude_mv: f64) -> Self {
        Self {
            timestamp_ms,
            amplitude_mv,
        }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, amplitude_mv: Decimal) -> PlotResult<Self> {
        Ok(Self {
            timestamp_ms: datetime_to_unix_millis(time),
            amplitude_mv: decimal_to_f64(amplitude_mv, "amplitude")?,
        })
    }
}

impl From<(i64, f64)> for Sample {
    fn from((timestamp_ms, amplitude_mv): (i64, f64)) -> Self {
        Self::new(timestamp_ms, amplitude_mv)
    }
}

impl From<Sample> for (i64, f64) {
    fn from(sample: Sample) -> Self {
        (sample.timestamp_ms, sample.amplitude_mv)
    }
}
