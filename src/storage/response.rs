//! Response shapes returned by a `RecordClient`
//!
//! Every call reports `success` at the call level. Batch calls also report a
//! result per record, and a failed item carries its own message and field
//! errors. Conversion into `FintrackResult` happens here so every service
//! surfaces failures the same way.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

use crate::error::{FintrackError, FintrackResult};

/// A record as exchanged with the record service
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FetchResponse {
    pub fn ok(data: Vec<Record>) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            message: Some(message.into()),
        }
    }

    /// The fetched records, or a service error when the call failed
    pub fn into_records(self, operation: &str) -> FintrackResult<Vec<Record>> {
        if !self.success {
            return Err(service_failure(operation, self.message));
        }
        Ok(self.data)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecordResponse {
    pub fn ok(data: Option<Record>) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// The record if it exists; `None` when the service found nothing
    pub fn into_record(self, operation: &str) -> FintrackResult<Option<Record>> {
        if !self.success {
            return Err(service_failure(operation, self.message));
        }
        Ok(self.data)
    }
}

/// A field-level validation failure reported for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "fieldLabel")]
    pub field_label: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_label: field_label.into(),
            message: message.into(),
        }
    }
}

/// Outcome for a single record inside a batch call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl BatchResult {
    pub fn ok(data: Option<Record>) -> Self {
        Self {
            success: true,
            data,
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors,
        }
    }

    /// Human-readable description of why this item failed
    pub fn failure_text(&self) -> String {
        let mut parts = Vec::new();
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            parts.push(message.to_string());
        }
        for err in &self.errors {
            parts.push(format!("{}: {}", err.field_label, err.message));
        }
        if parts.is_empty() {
            parts.push("unknown failure".to_string());
        }
        parts.join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Vec<BatchResult>,
}

impl BatchResponse {
    pub fn ok(results: Vec<BatchResult>) -> Self {
        Self {
            success: true,
            message: None,
            results,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            results: Vec::new(),
        }
    }

    /// The records returned by successful items.
    ///
    /// A failed call is a `Service` error. Any failed item fails the whole
    /// conversion with a `Batch` error listing every failure, even though the
    /// service may already have committed the other items.
    pub fn into_records(self, operation: &str) -> FintrackResult<Vec<Record>> {
        if !self.success {
            return Err(service_failure(operation, self.message));
        }

        let failures: Vec<String> = self
            .results
            .iter()
            .filter(|r| !r.success)
            .map(BatchResult::failure_text)
            .collect();

        if !failures.is_empty() {
            error!(operation, failures = ?failures, "batch items failed");
            return Err(FintrackError::Batch {
                operation: operation.to_string(),
                failures,
            });
        }

        Ok(self.results.into_iter().filter_map(|r| r.data).collect())
    }
}

fn service_failure(operation: &str, message: Option<String>) -> FintrackError {
    let message = message.unwrap_or_else(|| "no message".to_string());
    error!(operation, %message, "record service call failed");
    FintrackError::Service(format!("failed to {}: {}", operation, message))
}
