//! Error types for the ring buffer crate.

use thiserror::Error;

/// Errors that can occur during ring buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// Buffer was constructed with a capacity of zero.
    #[error("ring buffer capacity must be greater than 0")]
    ZeroCapacity,

    /// Write attempted on a full slot while the overwrite policy is disabled.
    ///
    /// The write is rejected and no cursor moves.
    #[error("ring buffer is full and overwrite is disabled")]
    Full,
}

/// A specialized `Result` type for ring buffer operations.
pub type RingResult<T> = std::result::Result<T, RingError>;
