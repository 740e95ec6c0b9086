//! P / PI / PID Feedback Controller for OpenControl
//!
//! This crate computes a control output from a configurable feedback law.
//! The loop type is derived from which gains are configured and forms a
//! chain: a proportional gain alone selects P, adding an integral gain
//! selects PI, adding a derivative gain selects PID. Each law variant
//! carries exactly the parameters its terms require, so the hot path never
//! inspects optional fields.
//!
//! # Overview
//!
//! - **Anti-windup**: the accumulated integral error is clamped into a
//!   configured range so sustained error cannot wind the integrator up
//!   without bound.
//! - **Validated configuration**: gains, sampling interval, and bounds are
//!   checked once at build time; a controller that exists is ready.
//! - **Monitoring accessors**: the integral sum and previous error are
//!   readable for debugging and telemetry.
//!
//! # Example
//!
//! ```
//! use opencontrol_pid::{PidConfig, PidController};
//!
//! let config = PidConfig::builder()
//!     .setpoint(72.0)
//!     .bias(0.0)
//!     .kc(1.2)
//!     .ki(0.3)
//!     .dt(0.05)
//!     .sum_bounds(-50.0, 50.0)
//!     .build()?;
//! let mut pid = PidController::new(config)?;
//!
//! let correction = pid.output(68.5)?;
//! assert!(correction > 0.0);
//! # Ok::<(), opencontrol_pid::PidError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod controller;
pub mod error;
pub mod prelude;

pub use config::{ControlLaw, LoopType, PidConfig, PidConfigBuilder, SumBounds};
pub use controller::PidController;
pub use error::{PidError, PidResult};
