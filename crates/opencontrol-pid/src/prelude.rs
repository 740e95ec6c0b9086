//! Prelude module for common PID controller types.
//!
//! This module provides a convenient way to import the most commonly used
//! types from the PID crate.

pub use crate::config::{ControlLaw, LoopType, PidConfig, PidConfigBuilder, SumBounds};
pub use crate::controller::PidController;
pub use crate::error::{PidError, PidResult};
