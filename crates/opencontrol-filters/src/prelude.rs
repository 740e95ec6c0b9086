//! Prelude module for common filter types.
//!
//! This module provides a convenient way to import the most commonly used
//! types from the filters crate.

pub use crate::error::{FilterError, FilterResult};
pub use crate::rolling::RollingAverage;
