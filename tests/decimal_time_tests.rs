use chrono::TimeZone;
use chrono::Utc;
use rust_decimal::Decimal;

use ecg_plot::core::{EcgSeries, Sample};

#[test]
fn sample_from_decimal_time_is_supported() {
    let time = Utc
        .timestamp_millis_opt(1_700_000_000_250)
        .single()
        .expect("valid ts");
    let sample = Sample::from_decimal_time(time, Decimal::new(-1234, 3)).expect("sample");

    assert_eq!(sample.timestamp_ms, 1_700_000_000_250);
    assert!((sample.amplitude_mv + 1.234).abs() <= 1e-12);
}

#[test]
fn decimal_samples_build_a_series() {
    let start = Utc
        .timestamp_opt(1_700_000_000, 0)
        .single()
        .expect("valid ts");
    let samples = (0..10_i64)
        .map(|i| {
            Sample::from_decimal_time(
                start + chrono::Duration::milliseconds(i * 4),
                Decimal::new(i * 5, 2),
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .expect("samples");

    let series = EcgSeries::new(samples).expect("series");
    assert_eq!(series.time_span_ms(), 36.0);
    assert!((series.mean_amplitude() - 0.225).abs() <= 1e-12);
}
