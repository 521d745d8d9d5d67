use approx::relative_eq;
use ecg_plot::core::{GridAxis, GridRangeCalculator, Sample, Viewport};
use proptest::prelude::*;

fn samples_strategy() -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec((1i64..200i64, -5.0f64..5.0f64), 2..256).prop_map(|steps| {
        let mut timestamp = 1_600_000_000_000_i64;
        steps
            .into_iter()
            .map(|(delta, amplitude)| {
                timestamp += delta;
                Sample::new(timestamp, amplitude)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn amplitude_bounds_are_symmetric_about_mean(
        samples in samples_strategy(),
        width in 50u32..2_000u32,
        height in 50u32..1_000u32,
        ratio in 0.25f64..4.0f64,
    ) {
        let grid = GridRangeCalculator::new(Viewport::new(width, height), ratio)
            .expect("calculator")
            .compute_samples(&samples)
            .expect("grid");
        let mean = grid.mean_amplitude;
        prop_assert!(relative_eq!(
            mean - grid.bounds.amplitude_min,
            grid.bounds.amplitude_max - mean,
            epsilon = 1e-9,
            max_relative = 1e-9
        ));
        prop_assert!(grid.bounds.amplitude_min < grid.bounds.amplitude_max);
    }

    #[test]
    fn bold_flags_follow_five_line_cadence(
        samples in samples_strategy(),
        width in 50u32..2_000u32,
        height in 50u32..1_000u32,
    ) {
        let grid = GridRangeCalculator::new(Viewport::new(width, height), 1.0)
            .expect("calculator")
            .compute_samples(&samples)
            .expect("grid");
        for axis in [GridAxis::Time, GridAxis::Amplitude] {
            for (index, line) in grid.lines_on(axis).enumerate() {
                prop_assert_eq!(line.is_bold(), index % 5 == 0);
            }
        }
    }

    #[test]
    fn gridlines_stay_inside_their_axis_range(
        samples in samples_strategy(),
        width in 50u32..2_000u32,
        height in 50u32..1_000u32,
    ) {
        let grid = GridRangeCalculator::new(Viewport::new(width, height), 1.0)
            .expect("calculator")
            .compute_samples(&samples)
            .expect("grid");
        for line in grid.lines_on(GridAxis::Time) {
            prop_assert!(line.position >= grid.bounds.time_min);
            prop_assert!(line.position < grid.bounds.time_max);
        }
        for line in grid.lines_on(GridAxis::Amplitude) {
            prop_assert!(line.position >= grid.amplitude_grid_start);
            prop_assert!(line.position < grid.bounds.amplitude_max);
        }
    }

    #[test]
    fn computation_is_deterministic(
        samples in samples_strategy(),
        width in 50u32..2_000u32,
        height in 50u32..1_000u32,
    ) {
        let calculator = GridRangeCalculator::new(Viewport::new(width, height), 1.0)
            .expect("calculator");
        let first = calculator.compute_samples(&samples).expect("first");
        let second = calculator.compute_samples(&samples).expect("second");
        prop_assert_eq!(first, second);
    }
}
