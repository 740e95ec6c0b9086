//! Smoothing Filters for OpenControl
//!
//! This crate provides the rolling-average primitive used to smooth noisy
//! sensor samples before they reach a control law.
//!
//! # Overview
//!
//! [`RollingAverage`] is a single-pole exponential moving average: the
//! smoothing window `sample_size` sets the fraction of each new sample
//! folded into the running value. It retains no sample history, so memory
//! use and update cost are constant regardless of the window.
//!
//! Non-finite samples arriving from outside the type system are logged and
//! ignored rather than reported as errors, keeping the update path free of
//! failure values.
//!
//! # Example
//!
//! ```
//! use opencontrol_filters::RollingAverage;
//!
//! let mut avg = RollingAverage::new(10.0)?;
//! for reading in [21.0, 21.4, 20.9, 21.2] {
//!     avg.update(reading);
//! }
//! assert!(avg.average() > 0.0);
//! # Ok::<(), opencontrol_filters::FilterError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod prelude;
pub mod rolling;

pub use error::{FilterError, FilterResult};
pub use rolling::RollingAverage;
