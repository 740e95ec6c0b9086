//! Error types for the state machine crate.

use thiserror::Error;

/// Errors that can occur while validating or stepping a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateMachineError {
    /// Machine was configured with zero states.
    #[error("state machine has no states")]
    NoStates,

    /// Binding table length does not match the configured state count.
    #[error("binding table holds {found} transitions, expected {expected}")]
    BindingMismatch {
        /// Configured state count.
        expected: usize,
        /// Number of transitions actually bound.
        found: usize,
    },

    /// Current state is not a valid index into the binding table.
    ///
    /// Negative values are terminal codes; they are stored, never executed.
    #[error("state {0} is not a valid transition index")]
    InvalidState(i32),

    /// Requested start state is outside `[0, num_states)`.
    #[error("start state {0} is out of range")]
    InvalidStartState(i32),
}

/// A specialized `Result` type for state machine operations.
pub type StateMachineResult<T> = std::result::Result<T, StateMachineError>;
