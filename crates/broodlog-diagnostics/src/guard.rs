//! RenderGuard - supervisor boundary for view construction
//!
//! Contains otherwise-fatal failures escaping the construction of a
//! supervised view subtree. A failure transitions the guard to the
//! `Failed` state, is reported with the `"error_boundary"` operation
//! label, and leaves the host to render a recovery view from the
//! captured failure instead of crashing the whole application.
//!
//! Recovery is explicit and user-initiated: `retry` remounts the
//! subtree from scratch, and a full reload (discarding all in-memory
//! state) is the host dropping the guard along with everything else.
//! There is no automatic recovery, retry limit, or backoff; a subtree
//! that keeps failing simply re-enters `Failed` on each retry.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use broodlog_core::domain::ErrorDetails;
use serde_json::json;

use crate::reporter::ErrorReporter;

/// Operation label recorded for contained render failures.
pub const ERROR_BOUNDARY_OPERATION: &str = "error_boundary";

/// Supervision state of a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// The supervised subtree renders normally
    Normal,
    /// A render failure was contained; the recovery view is shown
    Failed,
}

/// Captured detail of a contained render failure
#[derive(Debug, Clone)]
pub struct RenderFailure {
    /// The failure or panic message
    pub message: String,
    /// Backtrace captured at the moment of containment
    pub stack: String,
}

/// Two-state supervisor around fallible view construction
///
/// The guard is created in [`GuardState::Normal`]. While failed, the
/// supervised subtree is not attempted again until an explicit
/// [`RenderGuard::retry`] or [`RenderGuard::reset`].
pub struct RenderGuard {
    component: String,
    reporter: Arc<ErrorReporter>,
    failure: Option<RenderFailure>,
}

impl RenderGuard {
    /// Creates a guard supervising the subtree labeled `component`.
    pub fn new(component: impl Into<String>, reporter: Arc<ErrorReporter>) -> Self {
        Self {
            component: component.into(),
            reporter,
            failure: None,
        }
    }

    /// Returns the current supervision state.
    pub fn state(&self) -> GuardState {
        if self.failure.is_some() {
            GuardState::Failed
        } else {
            GuardState::Normal
        }
    }

    /// Returns the captured failure while in the failed state.
    ///
    /// The host renders its recovery view (message, stack, retry and
    /// reload actions) from this.
    pub fn failure(&self) -> Option<&RenderFailure> {
        self.failure.as_ref()
    }

    /// Attempts to construct the supervised subtree.
    ///
    /// Both an `Err` return and a panic escaping `build` are contained:
    /// the guard transitions to `Failed`, reports the failure with a
    /// captured backtrace and the component label, and yields `None`.
    /// While already failed, the subtree is not attempted and `None` is
    /// returned immediately.
    pub async fn render<T, F>(&mut self, build: F) -> Option<T>
    where
        F: FnOnce() -> anyhow::Result<T>,
    {
        if self.failure.is_some() {
            return None;
        }

        match catch_unwind(AssertUnwindSafe(build)) {
            Ok(Ok(view)) => Some(view),
            Ok(Err(e)) => {
                self.contain(format!("{e:#}")).await;
                None
            }
            Err(payload) => {
                let message = panic_message(&*payload);
                drop(payload);
                self.contain(message).await;
                None
            }
        }
    }

    /// Clears the failed state and re-attempts construction from scratch.
    ///
    /// A fresh mount: nothing from the failed attempt is replayed.
    pub async fn retry<T, F>(&mut self, build: F) -> Option<T>
    where
        F: FnOnce() -> anyhow::Result<T>,
    {
        self.reset();
        self.render(build).await
    }

    /// Clears the failed state without re-rendering.
    pub fn reset(&mut self) {
        self.failure = None;
    }

    async fn contain(&mut self, message: String) {
        let stack = std::backtrace::Backtrace::force_capture().to_string();

        let details = ErrorDetails::new(message.clone())
            .with_stack(stack.clone())
            .with_context(json!({ "component": self.component }));
        self.reporter
            .report_details(ERROR_BOUNDARY_OPERATION, details)
            .await;

        self.failure = Some(RenderFailure { message, stack });
    }
}

/// Extracts the message from a panic payload, as panic hooks do.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use broodlog_core::ports::{ILocalStorage, IToastService, Toast};

    use super::*;
    use crate::log_store::LogStore;

    struct MemoryStorage {
        values: Mutex<HashMap<String, String>>,
    }

    impl MemoryStorage {
        fn new() -> Self {
            Self {
                values: Mutex::new(HashMap::new()),
            }
        }
    }

    impl ILocalStorage for MemoryStorage {
        fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }
        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
        fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct NullToasts;

    #[async_trait::async_trait]
    impl IToastService for NullToasts {
        async fn notify(&self, _toast: &Toast) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn reporter() -> Arc<ErrorReporter> {
        Arc::new(ErrorReporter::new(
            LogStore::new(Arc::new(MemoryStorage::new())),
            Arc::new(NullToasts),
        ))
    }

    #[tokio::test]
    async fn test_successful_render_stays_normal() {
        let reporter = reporter();
        let mut guard = RenderGuard::new("bird_table", Arc::clone(&reporter));

        let view = guard.render(|| Ok::<_, anyhow::Error>("rows")).await;

        assert_eq!(view, Some("rows"));
        assert_eq!(guard.state(), GuardState::Normal);
        assert!(reporter.events().is_empty());
    }

    #[tokio::test]
    async fn test_error_return_is_contained() {
        let reporter = reporter();
        let mut guard = RenderGuard::new("bird_table", Arc::clone(&reporter));

        let view: Option<&str> = guard
            .render(|| Err(anyhow::anyhow!("missing species column")))
            .await;

        assert!(view.is_none());
        assert_eq!(guard.state(), GuardState::Failed);

        let failure = guard.failure().unwrap();
        assert_eq!(failure.message, "missing species column");
        assert!(!failure.stack.is_empty());

        let events = reporter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].operation(), ERROR_BOUNDARY_OPERATION);
        assert_eq!(events[0].details().context["component"], "bird_table");
        assert!(events[0].details().stack.is_some());
    }

    #[tokio::test]
    async fn test_panic_is_contained() {
        let reporter = reporter();
        let mut guard = RenderGuard::new("incubation_chart", Arc::clone(&reporter));

        let view: Option<()> = guard.render(|| panic!("index out of range")).await;

        assert!(view.is_none());
        assert_eq!(guard.state(), GuardState::Failed);
        assert_eq!(guard.failure().unwrap().message, "index out of range");

        let events = reporter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].details().message, "index out of range");
    }

    #[tokio::test]
    async fn test_failed_guard_does_not_reattempt() {
        let reporter = reporter();
        let mut guard = RenderGuard::new("chick_list", Arc::clone(&reporter));

        let _: Option<()> = guard.render(|| Err(anyhow::anyhow!("boom"))).await;
        assert_eq!(guard.state(), GuardState::Failed);

        let mut attempted = false;
        let view = guard
            .render(|| {
                attempted = true;
                Ok(())
            })
            .await;

        assert!(view.is_none());
        assert!(!attempted, "a failed guard must not remount without retry");
        assert_eq!(reporter.events().len(), 1);
    }

    #[tokio::test]
    async fn test_retry_remounts_from_scratch() {
        let reporter = reporter();
        let mut guard = RenderGuard::new("chick_list", Arc::clone(&reporter));

        let _: Option<()> = guard.render(|| Err(anyhow::anyhow!("boom"))).await;
        assert_eq!(guard.state(), GuardState::Failed);

        let view = guard.retry(|| Ok::<_, anyhow::Error>("fresh")).await;

        assert_eq!(view, Some("fresh"));
        assert_eq!(guard.state(), GuardState::Normal);
        assert!(guard.failure().is_none());
    }

    #[tokio::test]
    async fn test_repeated_failures_each_reported() {
        let reporter = reporter();
        let mut guard = RenderGuard::new("chick_list", Arc::clone(&reporter));

        let _: Option<()> = guard.render(|| Err(anyhow::anyhow!("first"))).await;
        let _: Option<()> = guard.retry(|| Err(anyhow::anyhow!("second"))).await;

        assert_eq!(guard.state(), GuardState::Failed);
        let events = reporter.events();
        assert_eq!(events.len(), 2);
        // Newest first
        assert_eq!(events[0].details().message, "second");
        assert_eq!(events[1].details().message, "first");
    }

    #[tokio::test]
    async fn test_reporter_failure_does_not_break_containment() {
        struct BrokenStorage;
        impl ILocalStorage for BrokenStorage {
            fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
                anyhow::bail!("storage unavailable")
            }
            fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
                anyhow::bail!("storage unavailable")
            }
            fn remove(&self, _key: &str) -> anyhow::Result<()> {
                anyhow::bail!("storage unavailable")
            }
        }

        let reporter = Arc::new(ErrorReporter::new(
            LogStore::new(Arc::new(BrokenStorage)),
            Arc::new(NullToasts),
        ));
        let mut guard = RenderGuard::new("bird_table", reporter);

        let view: Option<()> = guard.render(|| Err(anyhow::anyhow!("boom"))).await;
        assert!(view.is_none());
        assert_eq!(guard.state(), GuardState::Failed);
    }
}
