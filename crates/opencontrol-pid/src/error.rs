//! Error types for the PID controller crate.

use thiserror::Error;

/// Errors that can occur during PID configuration and output computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PidError {
    /// Configuration is missing a required parameter or holds a non-finite
    /// value for the selected loop type.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Sensor reading passed to the controller was NaN or infinite.
    #[error("Non-finite reading: {0}")]
    NonFiniteReading(f64),

    /// Setpoint update was NaN or infinite.
    #[error("Non-finite setpoint: {0}")]
    NonFiniteSetpoint(f64),
}

impl PidError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    /// Create a non-finite reading error.
    #[must_use]
    pub fn non_finite_reading(reading: f64) -> Self {
        Self::NonFiniteReading(reading)
    }

    /// Create a non-finite setpoint error.
    #[must_use]
    pub fn non_finite_setpoint(setpoint: f64) -> Self {
        Self::NonFiniteSetpoint(setpoint)
    }
}

/// A specialized `Result` type for PID operations.
pub type PidResult<T> = std::result::Result<T, PidError>;
