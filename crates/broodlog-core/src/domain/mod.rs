//! Domain entities for diagnostic capture
//!
//! This module contains the core domain types for Broodlog:
//! - Diagnostic events recorded when a failure is observed
//! - The upstream data service's error shape
//!
//! All types here are pure data; persistence and notification live
//! behind the port traits in [`crate::ports`].

pub mod errors;
pub mod event;

// Re-export commonly used types
pub use errors::ServiceError;
pub use event::{DiagnosticEvent, ErrorDetails, EventId, EventStatus};
