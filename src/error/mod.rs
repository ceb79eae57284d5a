//! Error handling for the screening estimator.
//!
//! Only boundary validation and reference-table lookups can fail. The
//! estimation pipeline itself never errors: degenerate numeric input
//! (zero success rate, empty eligible pool) resolves to a defined zero
//! result instead.

/// Specialized error type for estimator boundary operations
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    /// Caller-supplied input outside the accepted range
    #[error("Validation error: {0}")]
    Validation(String),

    /// A reference table has no entry for the requested key
    #[error("Reference data error: {0}")]
    ReferenceData(String),
}

impl EstimatorError {
    /// Create a validation error with a formatted message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a reference-data error with a formatted message
    pub fn reference_data(message: impl Into<String>) -> Self {
        Self::ReferenceData(message.into())
    }
}

/// Result type for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;
