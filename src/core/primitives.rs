use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{PlotError, PlotResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> PlotResult<f64> {
    value.to_f64().ok_or_else(|| {
        PlotError::InvalidSeries(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Rounds to one decimal place, half away from zero, on the exact binary value.
///
/// Non-finite or out-of-range inputs are returned unchanged.
#[must_use]
pub fn round_to_tenths(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

/// Formats `value` with exactly `decimals` fractional digits, rounding half away
/// from zero on the exact binary value.
#[must_use]
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let width = decimals as usize;
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.width$}")
        }
        None => format!("{value:.width$}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_fixed, round_to_tenths};

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenths(0.9625), 1.0);
        assert_eq!(round_to_tenths(0.94), 0.9);
        assert_eq!(round_to_tenths(-0.26), -0.3);
        assert_eq!(round_to_tenths(2.0), 2.0);
    }

    #[test]
    fn ties_follow_the_exact_binary_value() {
        // 0.25 is exact in binary, so it is a true midpoint.
        assert_eq!(round_to_tenths(0.25), 0.3);
        assert_eq!(round_to_tenths(-0.25), -0.3);
        // 0.35 is stored slightly below the midpoint.
        assert_eq!(round_to_tenths(0.35), 0.3);
    }

    #[test]
    fn fixed_formatting_pads_and_rounds() {
        assert_eq!(format_fixed(0.1, 2), "0.10");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(1.0, 0), "1");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_to_tenths(f64::NAN).is_nan());
        assert_eq!(round_to_tenths(f64::INFINITY), f64::INFINITY);
    }
}
