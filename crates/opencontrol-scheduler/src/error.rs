//! Error types for the scheduler crate.

use thiserror::Error;

/// Errors that can occur during scheduler configuration and control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// Interval was rejected at construction or reconfiguration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `start` was called while the scheduler was already running.
    #[error("scheduler is already running")]
    AlreadyRunning,

    /// Timer thread exited and can no longer accept commands.
    #[error("timer thread is unavailable")]
    TimerUnavailable,

    /// Operating system refused to spawn the timer thread.
    #[error("failed to spawn timer thread: {0}")]
    SpawnFailed(String),
}

impl SchedulerError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

/// A specialized `Result` type for scheduler operations.
pub type SchedulerResult<T> = std::result::Result<T, SchedulerError>;
