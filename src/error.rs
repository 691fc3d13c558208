//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A non-positive or non-numeric amount was supplied for a new entry
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The persisted ledger exists but could not be read or parsed
    #[error("Failed to load {path}: {reason}")]
    LoadFailure { path: String, reason: String },

    /// The ledger could not be written to disk
    #[error("Failed to save {path}: {reason}")]
    SaveFailure { path: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create a load failure for the given file
    pub fn load_failure(path: &Path, reason: impl ToString) -> Self {
        Self::LoadFailure {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a save failure for the given file
    pub fn save_failure(path: &Path, reason: impl ToString) -> Self {
        Self::SaveFailure {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = BudgetError::InvalidAmount("amount must be positive".into());
        assert_eq!(err.to_string(), "Invalid amount: amount must be positive");
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_load_and_save_failures_name_the_file() {
        let path = PathBuf::from("/tmp/budget_data.json");

        let err = BudgetError::load_failure(&path, "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Failed to load /tmp/budget_data.json: expected value at line 1"
        );

        let err = BudgetError::save_failure(&path, "permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to save /tmp/budget_data.json: permission denied"
        );
        assert!(!err.is_invalid_amount());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
