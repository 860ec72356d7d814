//! Upstream data service error shape
//!
//! The hosted data service reports failures as a structured object with
//! a message plus optional `code`, `details`, and `hint` fields. This
//! module defines that shape so both error conventions (raised and
//! embedded in a result) normalize to the same type before reporting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::event::ErrorDetails;

/// A failure reported by the upstream data service
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ServiceError {
    /// Human-readable failure message
    pub message: String,
    /// Service-specific error code (e.g. a Postgres SQLSTATE)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Extended detail text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Remediation hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ServiceError {
    /// Creates an error with the given message and no extras.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }

    /// Sets the error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the detail text
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Sets the remediation hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Normalizes a raised error into the service error shape.
    ///
    /// The top-level message becomes `message`; any wrapped causes are
    /// joined into `details` so the full chain survives in the log.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let mut service_error = Self::new(err.to_string());
        let causes: Vec<String> = err.chain().skip(1).map(|c| c.to_string()).collect();
        if !causes.is_empty() {
            service_error.details = Some(causes.join(": "));
        }
        service_error
    }
}

impl From<&ServiceError> for ErrorDetails {
    fn from(error: &ServiceError) -> Self {
        let mut details = ErrorDetails::new(error.message.clone());
        details.code = error.code.clone();
        details.details = error.details.clone();
        details.hint = error.hint.clone();
        details
    }
}
