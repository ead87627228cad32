//! # Error Types
//!
//! Structured error types for fit_core. Each sensor package either produces
//! a summary or one of these errors; callers decide whether to keep going.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::errors::{FitError, FitResult};
//!
//! fn check_duration(duration_h: f64) -> FitResult<()> {
//!     if duration_h <= 0.0 {
//!         return Err(FitError::invalid_arguments(
//!             "RUN",
//!             "duration must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_duration(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fit_core operations
pub type FitResult<T> = Result<T, FitError>;

/// Structured error type for workout operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FitError {
    /// The workout code does not name a known workout
    #[error("Invalid workout type: '{code}'")]
    InvalidWorkoutType { code: String },

    /// Wrong number of arguments, or an argument of the wrong kind
    #[error("Invalid arguments for {workout_type}: {reason}")]
    InvalidArguments {
        workout_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl FitError {
    /// Create an InvalidWorkoutType error
    pub fn invalid_workout_type(code: impl Into<String>) -> Self {
        FitError::InvalidWorkoutType { code: code.into() }
    }

    /// Create an InvalidArguments error
    pub fn invalid_arguments(workout_type: impl Into<String>, reason: impl Into<String>) -> Self {
        FitError::InvalidArguments {
            workout_type: workout_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FitError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        FitError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors scoped to a single package; the rest of a batch can
    /// still be processed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FitError::InvalidWorkoutType { .. } | FitError::InvalidArguments { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FitError::InvalidWorkoutType { .. } => "INVALID_WORKOUT_TYPE",
            FitError::InvalidArguments { .. } => "INVALID_ARGUMENTS",
            FitError::FileError { .. } => "FILE_ERROR",
            FitError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
