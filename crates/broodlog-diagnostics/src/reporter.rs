//! ErrorReporter - terminal sink for observed failures
//!
//! Normalizes a failure plus contextual metadata into a diagnostic
//! event, persists it through [`LogStore`], and raises a transient
//! error toast. All methods are non-fatal: failures inside reporting
//! are logged via `tracing::warn!` but never propagated, so reporting
//! can never introduce a new failure mode into the calling path.

use std::sync::Arc;

use broodlog_core::domain::{DiagnosticEvent, ErrorDetails, ServiceError};
use broodlog_core::ports::{IToastService, Toast};
use serde_json::Value;

use crate::log_store::LogStore;

/// Best-effort diagnostic sink
///
/// One reporter instance is shared by every capture site (query
/// instrumentation, render guards), so all events flow through the
/// same log store and notification surface.
pub struct ErrorReporter {
    store: LogStore,
    toasts: Arc<dyn IToastService>,
    toast_timeout_ms: Option<u64>,
}

impl ErrorReporter {
    /// Creates a reporter writing to `store` and toasting via `toasts`.
    pub fn new(store: LogStore, toasts: Arc<dyn IToastService>) -> Self {
        Self {
            store,
            toasts,
            toast_timeout_ms: None,
        }
    }

    /// Overrides the auto-dismiss timeout of raised toasts.
    pub fn with_toast_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.toast_timeout_ms = Some(timeout_ms);
        self
    }

    /// Records a data service failure observed during `operation`.
    ///
    /// Builds an error event from the service error's fields plus the
    /// supplied call-site context, appends it, and toasts the error
    /// message. Never raises.
    pub async fn report(&self, operation: &str, error: &ServiceError, context: Value) {
        let details = ErrorDetails::from(error).with_context(context);
        self.report_details(operation, details).await;
    }

    /// Records a failure from an already-built detail payload.
    ///
    /// Lower-level entry point used by capture sites that attach extra
    /// material such as a stack trace. Never raises.
    pub async fn report_details(&self, operation: &str, details: ErrorDetails) {
        tracing::error!(
            operation = %operation,
            message = %details.message,
            context = %details.context,
            "diagnostic event captured"
        );

        let message = details.message.clone();
        let event = DiagnosticEvent::error(operation, details);

        if let Err(e) = self.store.append(event) {
            tracing::warn!(error = %e, "Failed to persist diagnostic event");
        }

        let mut toast = Toast::error(message);
        if let Some(timeout_ms) = self.toast_timeout_ms {
            toast = toast.with_timeout_ms(timeout_ms);
        }
        if let Err(e) = self.toasts.notify(&toast).await {
            tracing::warn!(error = %e, "Failed to deliver error toast");
        }
    }

    /// Returns the retained diagnostic events, newest first.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.store.read_all()
    }

    /// Deletes the persisted diagnostic log. Never raises.
    pub fn clear(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear diagnostic log");
        }
    }
}
