//! Diagnostic event domain entities
//!
//! This module defines the record type for the capped diagnostic log:
//! one immutable event per observed failure, with identity, timestamp,
//! operation label, status, and a structured detail payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier for a diagnostic event, derived from the wall clock.
///
/// The value is the Unix epoch millisecond tick at creation time, so
/// identifiers are non-decreasing as long as the wall clock is. Two
/// events created within the same millisecond share an identifier;
/// this is accepted and not corrected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates an identifier from the current wall-clock millisecond tick.
    #[must_use]
    pub fn next() -> Self {
        Self(Utc::now().timestamp_millis().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a recorded diagnostic event
///
/// Only failures are recorded today; the enum exists so additional
/// severities can be added without changing the event shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// A failure was observed
    Error,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Structured detail payload of a diagnostic event
///
/// Carries the failure message plus whatever the error source provided:
/// the upstream service's `code`/`details`/`hint` fields, a captured
/// stack trace for render failures, and free-form context supplied by
/// the call site (e.g. the supervised component label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Human-readable failure message
    pub message: String,
    /// Error code from the upstream service, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Extended detail text from the upstream service, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Remediation hint from the upstream service, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Captured stack/backtrace text, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Free-form structured context supplied by the call site
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub context: Value,
}

impl ErrorDetails {
    /// Creates a detail payload with the given message and no extras.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
            stack: None,
            context: Value::Null,
        }
    }

    /// Sets the upstream error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the upstream detail text
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Sets the upstream remediation hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Sets the captured stack trace text
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Sets the call-site context payload
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }
}

/// One immutable record of an observed failure
///
/// Created by the error reporter at the moment a failure is observed
/// and persisted immediately. Events are never modified after creation;
/// they disappear only through an explicit clear-all or by capacity
/// eviction from the log store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// Unique-within-process identifier (wall-clock derived)
    id: EventId,
    /// When the failure was observed
    timestamp: DateTime<Utc>,
    /// Operation label, e.g. `"select_birds"` or `"error_boundary"`
    operation: String,
    /// Event status
    status: EventStatus,
    /// Structured failure details
    details: ErrorDetails,
}

impl DiagnosticEvent {
    /// Creates a new event stamped with the current time.
    pub fn new(
        operation: impl Into<String>,
        status: EventStatus,
        details: ErrorDetails,
    ) -> Self {
        Self {
            id: EventId::next(),
            timestamp: Utc::now(),
            operation: operation.into(),
            status,
            details,
        }
    }

    /// Creates a new error event stamped with the current time.
    pub fn error(operation: impl Into<String>, details: ErrorDetails) -> Self {
        Self::new(operation, EventStatus::Error, details)
    }

    /// Returns the event identifier
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// Returns when the failure was observed
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the operation label
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Returns the event status
    pub fn status(&self) -> EventStatus {
        self.status
    }

    /// Returns the structured failure details
    pub fn details(&self) -> &ErrorDetails {
        &self.details
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_event_id_is_millisecond_tick() {
        let before = Utc::now().timestamp_millis();
        let id = EventId::next();
        let after = Utc::now().timestamp_millis();

        let tick: i64 = id.as_str().parse().unwrap();
        assert!(tick >= before && tick <= after);
    }

    #[test]
    fn test_event_id_non_decreasing() {
        let a = EventId::next();
        let b = EventId::next();
        let a: i64 = a.as_str().parse().unwrap();
        let b: i64 = b.as_str().parse().unwrap();
        assert!(b >= a);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&EventStatus::Error).unwrap();
        assert_eq!(json, "\"error\"");

        let status: EventStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, EventStatus::Error);
        assert_eq!(status.to_string(), "error");
    }

    #[test]
    fn test_details_builder() {
        let details = ErrorDetails::new("row not found")
            .with_code("PGRST116")
            .with_hint("check the id filter")
            .with_context(json!({"table": "birds"}));

        assert_eq!(details.message, "row not found");
        assert_eq!(details.code.as_deref(), Some("PGRST116"));
        assert_eq!(details.hint.as_deref(), Some("check the id filter"));
        assert!(details.details.is_none());
        assert!(details.stack.is_none());
        assert_eq!(details.context["table"], "birds");
    }

    #[test]
    fn test_event_construction() {
        let event = DiagnosticEvent::error("select_birds", ErrorDetails::new("boom"));

        assert_eq!(event.operation(), "select_birds");
        assert_eq!(event.status(), EventStatus::Error);
        assert_eq!(event.details().message, "boom");
        assert!(!event.id().as_str().is_empty());
    }

    #[test]
    fn test_event_round_trip() {
        let event = DiagnosticEvent::error(
            "insert_chicks",
            ErrorDetails::new("duplicate key")
                .with_code("23505")
                .with_details("Key (band_no)=(A17) already exists.")
                .with_context(json!({"source": "embedded"})),
        );

        let json = serde_json::to_string(&event).unwrap();
        let back: DiagnosticEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(back, event);
        assert_eq!(back.timestamp(), event.timestamp());
    }

    #[test]
    fn test_optional_fields_omitted_from_json() {
        let event = DiagnosticEvent::error("delete_incubations", ErrorDetails::new("gone"));
        let json = serde_json::to_value(&event).unwrap();

        let details = &json["details"];
        assert!(details.get("code").is_none());
        assert!(details.get("stack").is_none());
        assert!(details.get("context").is_none());
    }
}
