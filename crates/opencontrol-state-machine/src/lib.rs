//! Table-Driven State Machine for OpenControl
//!
//! This crate executes a sequence of state-indexed transition functions
//! until one of them signals termination. Each transition receives the
//! argument list produced by the previous step and returns the next state
//! together with the next arguments; a negative next state is the sole
//! termination signal and is never executed as an index.
//!
//! # Overview
//!
//! - **Positional binding table**: one transition per state, bound in
//!   index order. Readiness requires the table length to match the
//!   configured state count exactly.
//! - **Caller-paced or internal stepping**: [`StateMachine::run`] executes
//!   a single step; [`StateMachine::run_internal_loop`] steps repeatedly
//!   with a configured delay until a terminal code appears.
//! - **Typed transitions**: transitions are ordinary closures, so an
//!   unbindable or wrongly shaped entry is a compile error rather than a
//!   runtime failure.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use opencontrol_state_machine::StateMachine;
//!
//! let mut machine: StateMachine<i32> = StateMachine::new(2, Duration::from_millis(1));
//! machine.bind(|mut args| {
//!     args.push(1);
//!     (1, args)
//! });
//! machine.bind(|args| (if args.len() < 3 { 0 } else { -1 }, args));
//!
//! let terminal = machine.run_internal_loop(Some(0))?;
//! assert_eq!(terminal, -1);
//! assert_eq!(machine.args(), &[1, 1, 1]);
//! # Ok::<(), opencontrol_state_machine::StateMachineError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod machine;
pub mod prelude;

pub use error::{StateMachineError, StateMachineResult};
pub use machine::{StateMachine, Transition};
