//! Single-pole exponential moving average.

use tracing::warn;

use crate::error::{FilterError, FilterResult};

/// Exponential moving average with smoothing factor `1 / sample_size`.
///
/// This is not a fixed-window arithmetic mean: no history is retained and
/// each update moves the average toward the new sample by
/// `(sample - average) / sample_size`.
///
/// # Example
///
/// ```
/// use opencontrol_filters::RollingAverage;
///
/// let mut avg = RollingAverage::new(4.0)?;
/// avg.update(8.0);
/// assert!((avg.average() - 2.0).abs() < 1e-12);
/// avg.update(8.0);
/// assert!((avg.average() - 3.5).abs() < 1e-12);
/// # Ok::<(), opencontrol_filters::FilterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingAverage {
    sample_size: f64,
    average: f64,
}

impl RollingAverage {
    /// Create a filter with the given smoothing window, starting at 0.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfiguration`] if `sample_size` is
    /// NaN, infinite, or not positive.
    pub fn new(sample_size: f64) -> FilterResult<Self> {
        Self::with_initial(sample_size, 0.0)
    }

    /// Create a filter seeded with an initial average.
    ///
    /// Seeding avoids the warm-up ramp from 0 when the steady-state level
    /// is known in advance.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfiguration`] if `sample_size` is
    /// NaN, infinite, or not positive, or if `seed` is non-finite.
    pub fn with_initial(sample_size: f64, seed: f64) -> FilterResult<Self> {
        if !sample_size.is_finite() || sample_size <= 0.0 {
            return Err(FilterError::invalid_configuration(format!(
                "sample_size must be finite and positive, got {sample_size}"
            )));
        }
        if !seed.is_finite() {
            return Err(FilterError::invalid_configuration(format!(
                "initial average must be finite, got {seed}"
            )));
        }
        Ok(Self {
            sample_size,
            average: seed,
        })
    }

    /// Current average. Does not update the filter.
    #[must_use]
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Smoothing window.
    #[must_use]
    pub fn sample_size(&self) -> f64 {
        self.sample_size
    }

    /// Fold a new sample into the average and return the updated value.
    ///
    /// A NaN or infinite sample is logged and ignored; the average is
    /// returned unchanged.
    pub fn update(&mut self, sample: f64) -> f64 {
        if !sample.is_finite() {
            warn!(sample, "ignoring non-finite sample");
            return self.average;
        }
        self.average += (sample - self.average) / self.sample_size;
        self.average
    }

    /// Return the average to 0.
    pub fn reset(&mut self) {
        self.average = 0.0;
    }

    /// Replace the average, keeping the smoothing window.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NonFiniteValue`] if `value` is NaN or
    /// infinite; the average is unchanged in that case.
    pub fn reset_to(&mut self, value: f64) -> FilterResult<()> {
        if !value.is_finite() {
            return Err(FilterError::non_finite_value(value));
        }
        self.average = value;
        Ok(())
    }
}
