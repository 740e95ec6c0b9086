//! Fixed-Capacity Ring Storage for OpenControl
//!
//! This crate provides a circular buffer with independent read and write
//! cursors and two runtime-togglable policies:
//!
//! - **Overwrite**: whether a write to an occupied slot evicts the unread
//!   entry or is rejected outright.
//! - **Chronological read**: whether an overwrite relocates the read cursor
//!   so the next read returns the most recently written entry instead of
//!   stale data behind the overwritten slot.
//!
//! # Overview
//!
//! The buffer is a fixed-length slot array with `reader` and `writer`
//! cursors advancing modulo the capacity. Reads are destructive: a slot is
//! cleared as its value is taken. An empty read is reported as `None`,
//! which is distinct from a rejected write ([`RingError::Full`]).
//!
//! # RT Safety Guarantees
//!
//! After construction all operations are allocation-free, O(1) except the
//! backlog-discarding [`CircularBuffer::jump_to_latest`] and the occupancy
//! count, and never block.
//!
//! # Example
//!
//! ```
//! use opencontrol_ringbuf::CircularBuffer;
//!
//! let mut buf = CircularBuffer::new(3, false, false)?;
//! buf.push(10)?;
//! buf.push(20)?;
//! assert_eq!(buf.pop(), Some(10));
//! assert_eq!(buf.pop(), Some(20));
//! assert_eq!(buf.pop(), None);
//! # Ok::<(), opencontrol_ringbuf::RingError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod prelude;
pub mod ring;

pub use error::{RingError, RingResult};
pub use ring::CircularBuffer;
