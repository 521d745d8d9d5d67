use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::error::{PlotError, PlotResult};

/// Validated ECG sample sequence.
///
/// Holds at least two samples with strictly increasing timestamps and finite
/// amplitudes, so the time span is positive and the mean is defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct EcgSeries {
    samples: Vec<Sample>,
}

impl EcgSeries {
    pub fn new(samples: Vec<Sample>) -> PlotResult<Self> {
        match samples.len() {
            0 => {
                return Err(PlotError::InvalidSeries(
                    "series must not be empty".to_owned(),
                ));
            }
            1 => {
                return Err(PlotError::InvalidSeries(
                    "series needs at least 2 samples to span time".to_owned(),
                ));
            }
            _ => {}
        }

        for (index, pair) in samples.windows(2).enumerate() {
            if pair[1].timestamp_ms <= pair[0].timestamp_ms {
                return Err(PlotError::InvalidSeries(format!(
                    "timestamps must be strictly increasing (index {})",
                    index + 1
                )));
            }
        }

        if let Some(index) = samples
            .iter()
            .position(|sample| !sample.amplitude_mv.is_finite())
        {
            return Err(PlotError::InvalidSeries(format!(
                "amplitude at index {index} must be finite"
            )));
        }

        Ok(Self { samples })
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true for a validated series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first_timestamp(&self) -> i64 {
        self.samples[0].timestamp_ms
    }

    #[must_use]
    pub fn last_timestamp(&self) -> i64 {
        self.samples[self.samples.len() - 1].timestamp_ms
    }

    /// Milliseconds between the first and the last sample.
    #[must_use]
    pub fn time_span_ms(&self) -> f64 {
        // f64 subtraction; the i64 difference may overflow.
        self.last_timestamp() as f64 - self.first_timestamp() as f64
    }

    #[must_use]
    pub fn mean_amplitude(&self) -> f64 {
        let sum: f64 = self.samples.iter().map(|sample| sample.amplitude_mv).sum();
        sum / self.samples.len() as f64
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl TryFrom<Vec<Sample>> for EcgSeries {
    type Error = PlotError;

    fn try_from(samples: Vec<Sample>) -> PlotResult<Self> {
        Self::new(samples)
    }
}

impl From<EcgSeries> for Vec<Sample> {
    fn from(series: EcgSeries) -> Self {
        series.into_samples()
    }
}
