//! Periodic Callback Scheduling for OpenControl
//!
//! This crate provides a reconfigurable interval scheduler: a callback is
//! invoked repeatedly on a background execution context with a fixed
//! period between firings.
//!
//! # Overview
//!
//! A dedicated timer thread owns the pending firing and is driven over a
//! bounded command channel. On each firing the next period is armed
//! **before** the callback is dispatched, so a slow callback delays
//! neither the next firing nor the timer itself; callback executions may
//! overlap if they outlast the interval.
//!
//! Every arming carries a generation number. `stop`, `change_interval`,
//! and `change_callback` bump the shared generation, so a firing that
//! observes a stale generation is discarded instead of invoking an
//! outdated callback. The window in which an already dispatched firing
//! still runs the old callback is a single comparison, and it can happen
//! at most once per reconfiguration.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::time::Duration;
//! use opencontrol_scheduler::IntervalScheduler;
//!
//! let samples = Arc::new(AtomicU64::new(0));
//! let counter = Arc::clone(&samples);
//! let mut scheduler = IntervalScheduler::new(Duration::from_millis(100), move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! })?;
//!
//! scheduler.start()?;
//! // ... application runs; the callback fires every 100ms ...
//! scheduler.change_interval(Duration::from_millis(250))?;
//! scheduler.stop()?;
//! # Ok::<(), opencontrol_scheduler::SchedulerError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod prelude;
pub mod scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use scheduler::{Callback, IntervalScheduler};
