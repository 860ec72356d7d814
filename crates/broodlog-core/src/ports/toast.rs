//! Toast notification port (driven/secondary port)
//!
//! This module defines the interface for transient user-visible
//! notifications. Implementations may render in-app toast stacks,
//! desktop notifications, or a fallback mechanism.
//!
//! ## Design Notes
//!
//! - Toasts are fire-and-forget; the caller does not wait for user
//!   interaction or dismissal.
//! - Multiple toasts may be visible at once; each dismisses itself
//!   independently after its own timeout.
//! - Uses `anyhow::Result` because delivery failures are
//!   adapter-specific and callers treat them as non-fatal.

use serde::{Deserialize, Serialize};

/// Default time a toast stays visible before auto-dismissing.
pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 5000;

/// Severity of a toast, affecting how it is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    /// Informational message
    Info,
    /// Something failed
    Error,
}

impl std::fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ToastLevel::Info => "info",
            ToastLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A transient notification to display to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    /// Message text shown to the user
    pub message: String,
    /// Severity level
    pub level: ToastLevel,
    /// Milliseconds before the toast dismisses itself
    pub timeout_ms: u64,
}

impl Toast {
    /// Creates an informational toast with the default timeout.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Info,
            timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }

    /// Creates an error toast with the default timeout.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_level(ToastLevel::Error)
    }

    /// Sets the severity level
    pub fn with_level(mut self, level: ToastLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the auto-dismiss timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// Port trait for pushing transient notifications to the mounted UI
#[async_trait::async_trait]
pub trait IToastService: Send + Sync {
    /// Pushes a toast onto the notification surface
    ///
    /// The toast dismisses itself after `toast.timeout_ms`; the call
    /// returns as soon as the toast is handed off.
    async fn notify(&self, toast: &Toast) -> anyhow::Result<()>;
}
