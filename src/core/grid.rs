//! ECG paper geometry.
//!
//! A minor grid cell is 40 ms wide and 0.1 mV tall; every fifth line is bold
//! (200 ms x 0.5 mV major cells). [`GridRangeCalculator`] derives axis bounds
//! and gridline positions from a series and its container.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::round_to_tenths;
use crate::core::{EcgSeries, Sample, Viewport};
use crate::error::{PlotError, PlotResult};

/// Width of a minor grid cell in milliseconds.
pub const TIME_STEP_MS: f64 = 40.0;
/// Height of a minor grid cell in millivolts.
pub const AMPLITUDE_STEP_MV: f64 = 0.1;
/// Every `BOLD_LINE_CADENCE`-th line (0-indexed) is bold.
pub const BOLD_LINE_CADENCE: usize = 5;
pub const DEFAULT_RECTANGLE_RATIO: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridAxis {
    Time,
    Amplitude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineWeight {
    Bold,
    Normal,
}

impl LineWeight {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index % BOLD_LINE_CADENCE == 0 {
            Self::Bold
        } else {
            Self::Normal
        }
    }
}

/// One ECG paper line at a data-space `position` on `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub axis: GridAxis,
    pub position: f64,
    pub weight: LineWeight,
}

impl GridLine {
    #[must_use]
    pub fn is_bold(self) -> bool {
        self.weight == LineWeight::Bold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub time_min: f64,
    pub time_max: f64,
    pub amplitude_min: f64,
    pub amplitude_max: f64,
}

impl AxisBounds {
    #[must_use]
    pub fn time_span(self) -> f64 {
        self.time_max - self.time_min
    }

    #[must_use]
    pub fn amplitude_span(self) -> f64 {
        self.amplitude_max - self.amplitude_min
    }
}

/// Immutable result of one grid computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub time_step: f64,
    pub amplitude_step: f64,
    pub rectangle_ratio: f64,
    pub bounds: AxisBounds,
    pub mean_amplitude: f64,
    pub amplitude_half_range: f64,
    /// Vertical (time) line count, `time span / 40`; fractional for spans that
    /// are not a multiple of the step.
    pub vertical_line_count: f64,
    pub horizontal_line_count: f64,
    /// Start of amplitude gridline generation: `amplitude_min` rounded to one
    /// decimal. The displayed bounds are not rounded.
    pub amplitude_grid_start: f64,
    /// Time lines first, then amplitude lines.
    pub lines: Vec<GridLine>,
}

impl GridSpec {
    pub fn lines_on(&self, axis: GridAxis) -> impl Iterator<Item = &GridLine> + '_ {
        self.lines.iter().filter(move |line| line.axis == axis)
    }

    #[must_use]
    pub fn time_lines(&self) -> Vec<GridLine> {
        self.lines_on(GridAxis::Time).copied().collect()
    }

    #[must_use]
    pub fn amplitude_lines(&self) -> Vec<GridLine> {
        self.lines_on(GridAxis::Amplitude).copied().collect()
    }
}

/// Computes [`GridSpec`] values for a container and cell aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRangeCalculator {
    viewport: Viewport,
    rectangle_ratio: f64,
}

impl GridRangeCalculator {
    pub fn new(viewport: Viewport, rectangle_ratio: f64) -> PlotResult<Self> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidDimensions {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !rectangle_ratio.is_finite() || rectangle_ratio <= 0.0 {
            return Err(PlotError::InvalidConfig(
                "rectangle ratio must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            viewport,
            rectangle_ratio,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn rectangle_ratio(&self) -> f64 {
        self.rectangle_ratio
    }

    /// Validates raw samples into an [`EcgSeries`] and computes its grid.
    pub fn compute_samples(&self, samples: &[Sample]) -> PlotResult<GridSpec> {
        let series = EcgSeries::new(samples.to_vec())?;
        Ok(self.compute(&series))
    }

    #[must_use]
    pub fn compute(&self, series: &EcgSeries) -> GridSpec {
        let time_min = series.first_timestamp() as f64;
        let time_max = series.last_timestamp() as f64;
        let vertical_line_count = series.time_span_ms() / TIME_STEP_MS;
        let horizontal_line_count = vertical_line_count * self.viewport.aspect();
        let mean_amplitude = series.mean_amplitude();

        let amplitude_half_range =
            (horizontal_line_count * 0.5) * AMPLITUDE_STEP_MV * self.rectangle_ratio;
        let amplitude_min = mean_amplitude - amplitude_half_range;
        let amplitude_max = mean_amplitude + amplitude_half_range;
        let amplitude_grid_start = round_to_tenths(amplitude_min);

        let mut lines = build_gridlines(GridAxis::Time, time_min, time_max, TIME_STEP_MS);
        lines.extend(build_gridlines(
            GridAxis::Amplitude,
            amplitude_grid_start,
            amplitude_max,
            AMPLITUDE_STEP_MV,
        ));

        trace!(
            vertical_line_count,
            horizontal_line_count,
            mean_amplitude,
            gridlines = lines.len(),
            "computed ecg grid"
        );

        GridSpec {
            time_step: TIME_STEP_MS,
            amplitude_step: AMPLITUDE_STEP_MV,
            rectangle_ratio: self.rectangle_ratio,
            bounds: AxisBounds {
                time_min,
                time_max,
                amplitude_min,
                amplitude_max,
            },
            mean_amplitude,
            amplitude_half_range,
            vertical_line_count,
            horizontal_line_count,
            amplitude_grid_start,
            lines,
        }
    }
}

/// Steps from `start` (inclusive) to `end` (exclusive) by repeated addition of
/// `step`, flagging every fifth line bold.
///
/// Positions accumulate floating-point error exactly like an additive loop;
/// they are not recomputed as `start + i * step`.
#[must_use]
pub fn build_gridlines(axis: GridAxis, start: f64, end: f64, step: f64) -> Vec<GridLine> {
    let mut lines = Vec::new();
    if step.is_nan() || step <= 0.0 || !start.is_finite() || !end.is_finite() {
        return lines;
    }

    let mut position = start;
    let mut index = 0_usize;
    while position < end {
        lines.push(GridLine {
            axis,
            position,
            weight: LineWeight::for_index(index),
        });
        let next = position + step;
        if next <= position {
            // Step is below the float resolution at this magnitude.
            break;
        }
        position = next;
        index += 1;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::{GridAxis, LineWeight, build_gridlines};

    #[test]
    fn gridline_end_is_exclusive() {
        let lines = build_gridlines(GridAxis::Time, 0.0, 120.0, 40.0);
        let positions: Vec<f64> = lines.iter().map(|line| line.position).collect();
        assert_eq!(positions, vec![0.0, 40.0, 80.0]);
    }

    #[test]
    fn every_fifth_line_is_bold() {
        let lines = build_gridlines(GridAxis::Time, 0.0, 440.0, 40.0);
        assert_eq!(lines.len(), 11);
        for (index, line) in lines.iter().enumerate() {
            let expected = if index % 5 == 0 {
                LineWeight::Bold
            } else {
                LineWeight::Normal
            };
            assert_eq!(line.weight, expected, "line {index}");
        }
    }

    #[test]
    fn degenerate_inputs_produce_no_lines() {
        assert!(build_gridlines(GridAxis::Amplitude, 0.0, 1.0, 0.0).is_empty());
        assert!(build_gridlines(GridAxis::Amplitude, f64::NAN, 1.0, 0.1).is_empty());
        assert!(build_gridlines(GridAxis::Amplitude, 1.0, 1.0, 0.1).is_empty());
    }

    #[test]
    fn step_below_float_resolution_terminates() {
        let lines = build_gridlines(GridAxis::Time, 1.0e19, 1.1e19, 40.0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn amplitude_positions_accumulate_additively() {
        let lines = build_gridlines(GridAxis::Amplitude, 0.0, 0.35, 0.1);
        let positions: Vec<f64> = lines.iter().map(|line| line.position).collect();
        assert_eq!(positions, vec![0.0, 0.1, 0.2, 0.30000000000000004]);
    }
}
