//! Property-based tests for the filters crate.

use opencontrol_filters::RollingAverage;
use proptest::prelude::*;

proptest! {
    #[test]
    fn constant_input_converges_monotonically(
        start in -1e6f64..1e6,
        target in -1e6f64..1e6,
        sample_size in 1.0f64..100.0,
    ) {
        let mut avg = RollingAverage::with_initial(sample_size, start).expect("valid filter");
        let mut prev_gap = (avg.average() - target).abs();
        for _ in 0..500 {
            let _ = avg.update(target);
            let gap = (avg.average() - target).abs();
            prop_assert!(gap <= prev_gap + 1e-9);
            prev_gap = gap;
        }
    }

    #[test]
    fn average_stays_within_observed_range(
        seed in -1e3f64..1e3,
        samples in proptest::collection::vec(-1e3f64..1e3, 1..128),
        sample_size in 1.0f64..50.0,
    ) {
        let mut avg = RollingAverage::with_initial(sample_size, seed).expect("valid filter");
        let mut lo = seed;
        let mut hi = seed;
        for &sample in &samples {
            lo = lo.min(sample);
            hi = hi.max(sample);
            let updated = avg.update(sample);
            prop_assert!(updated >= lo - 1e-9);
            prop_assert!(updated <= hi + 1e-9);
        }
    }

    #[test]
    fn non_finite_samples_never_change_the_average(
        seed in -1e3f64..1e3,
        sample_size in 1.0f64..50.0,
    ) {
        let mut avg = RollingAverage::with_initial(sample_size, seed).expect("valid filter");
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let unchanged = avg.update(bad);
            prop_assert!((unchanged - seed).abs() <= f64::EPSILON * seed.abs().max(1.0));
        }
    }

    #[test]
    fn unit_window_tracks_input_exactly(
        samples in proptest::collection::vec(-1e6f64..1e6, 1..32),
    ) {
        // sample_size of 1 means each update replaces the average.
        let mut avg = RollingAverage::new(1.0).expect("valid filter");
        for &sample in &samples {
            let updated = avg.update(sample);
            prop_assert!((updated - sample).abs() <= 1e-9 * sample.abs().max(1.0));
        }
    }
}
