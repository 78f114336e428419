//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The record service rejected the whole call
    #[error("Record service error: {0}")]
    Service(String),

    /// One or more records inside a batch call failed
    #[error("Failed to {operation}: {}", failures.join("; "))]
    Batch {
        operation: String,
        failures: Vec<String>,
    },

    /// A record came back from the service with a missing or malformed field
    #[error("Unexpected record data: {0}")]
    Wire(String),

    /// Local record store errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FintrackError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for bills
    pub fn bill_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Bill",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for savings goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Savings goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from a per-record batch failure
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch { .. })
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;
