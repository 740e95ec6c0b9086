//! Error types for the filters crate.

use thiserror::Error;

/// Errors that can occur during filter configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Smoothing window or seed value was rejected at construction.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Value passed to a state-replacing operation was NaN or infinite.
    #[error("Non-finite value: {0}")]
    NonFiniteValue(f64),
}

impl FilterError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    /// Create a non-finite value error.
    #[must_use]
    pub fn non_finite_value(value: f64) -> Self {
        Self::NonFiniteValue(value)
    }
}

/// A specialized `Result` type for filter operations.
pub type FilterResult<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FilterError::invalid_configuration("sample_size must be positive");
        assert!(err.to_string().contains("sample_size"));

        let err = FilterError::non_finite_value(f64::NAN);
        assert!(err.to_string().contains("Non-finite"));
    }
}
