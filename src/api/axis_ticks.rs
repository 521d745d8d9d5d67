use std::fmt::Write;

use chrono::DateTime;

use crate::core::{AxisView, format_fixed};

/// Minimum horizontal room per time label.
pub const TIME_LABEL_MIN_SPACING_PX: f64 = 80.0;
/// Minimum vertical room per amplitude label.
pub const AMPLITUDE_LABEL_MIN_SPACING_PX: f64 = 18.0;

/// Candidate time tick steps in milliseconds, all multiples of one bold cell.
const TIME_TICK_STEPS_MS: [f64; 12] = [
    200.0,
    400.0,
    1_000.0,
    2_000.0,
    5_000.0,
    10_000.0,
    30_000.0,
    60_000.0,
    300_000.0,
    600_000.0,
    1_800_000.0,
    3_600_000.0,
];

const AMPLITUDE_TICK_MULTIPLIERS: [f64; 9] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0];

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Time ticks for the visible window, labelled in UTC with `time_format`.
///
/// Labels that fail to format are skipped.
#[must_use]
pub fn time_axis_ticks(axis: &AxisView, width_px: f64, time_format: &str) -> Vec<AxisTick> {
    let span = axis.span();
    if !is_positive(span) || !is_positive(width_px) {
        return Vec::new();
    }

    let px_per_ms = width_px / span;
    // Past the largest candidate, widen to whole multiples of it.
    let step = TIME_TICK_STEPS_MS
        .iter()
        .copied()
        .find(|step| step * px_per_ms >= TIME_LABEL_MIN_SPACING_PX)
        .unwrap_or_else(|| {
            let largest = TIME_TICK_STEPS_MS[TIME_TICK_STEPS_MS.len() - 1];
            (TIME_LABEL_MIN_SPACING_PX / px_per_ms / largest).ceil() * largest
        });

    aligned_multiples(axis.min, axis.max, step)
        .filter_map(|value| {
            let time = DateTime::from_timestamp_millis(value.round() as i64)?;
            let mut label = String::new();
            write!(label, "{}", time.format(time_format)).ok()?;
            Some(AxisTick { value, label })
        })
        .collect()
}

/// Amplitude ticks at multiples of `tick_size`, thinned to fit `height_px`.
#[must_use]
pub fn amplitude_axis_ticks(
    axis: &AxisView,
    height_px: f64,
    tick_size: f64,
    decimals: u32,
) -> Vec<AxisTick> {
    let span = axis.span();
    if !is_positive(span) || !is_positive(height_px) || !is_positive(tick_size) {
        return Vec::new();
    }

    let px_per_unit = height_px / span;
    let step = AMPLITUDE_TICK_MULTIPLIERS
        .iter()
        .map(|multiplier| multiplier * tick_size)
        .find(|step| step * px_per_unit >= AMPLITUDE_LABEL_MIN_SPACING_PX)
        .unwrap_or(span);

    aligned_multiples(axis.min, axis.max, step)
        .map(|value| AxisTick {
            value,
            label: format_fixed(value, decimals),
        })
        .collect()
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Multiples of `step` inside `[min, max]`, computed as `k * step` so values do
/// not accumulate error.
fn aligned_multiples(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(move |k| k as f64 * step)
}
