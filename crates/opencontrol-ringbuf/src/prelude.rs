//! Prelude module for common ring buffer types.
//!
//! This module provides a convenient way to import the most commonly used
//! types from the ring buffer crate.

pub use crate::error::{RingError, RingResult};
pub use crate::ring::CircularBuffer;
