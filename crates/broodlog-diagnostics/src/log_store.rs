//! Capped, persisted diagnostic log
//!
//! Keeps the most recent diagnostic events, newest first, serialized as
//! one JSON value under a fixed key in local storage. Every mutation is
//! a full read-modify-write cycle; there is no concurrency control, so
//! interleaved appends resolve last-writer-wins.

use std::sync::Arc;

use broodlog_core::domain::DiagnosticEvent;
use broodlog_core::ports::ILocalStorage;

/// Storage key the event sequence is persisted under.
pub const STORAGE_KEY: &str = "broodlog_error_log";

/// Maximum number of events retained; older events are evicted.
pub const MAX_EVENTS: usize = 100;

/// Append-only, capped diagnostic log backed by local storage
///
/// Events are immutable once appended and disappear only through
/// [`LogStore::clear`] or capacity eviction. Reads are tolerant: a
/// missing, unreadable, or malformed persisted value degrades to an
/// empty log instead of an error.
pub struct LogStore {
    storage: Arc<dyn ILocalStorage>,
    key: String,
}

impl LogStore {
    /// Creates a log store persisting under [`STORAGE_KEY`].
    pub fn new(storage: Arc<dyn ILocalStorage>) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Creates a log store persisting under a custom key.
    pub fn with_key(storage: Arc<dyn ILocalStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Inserts `event` at the front of the log and persists the result.
    ///
    /// The sequence is truncated to the [`MAX_EVENTS`] most recent
    /// entries before writing; insertion past capacity silently evicts
    /// the oldest event.
    pub fn append(&self, event: DiagnosticEvent) -> anyhow::Result<()> {
        let mut events = self.read_all();
        events.insert(0, event);
        events.truncate(MAX_EVENTS);

        let serialized = serde_json::to_string(&events)?;
        self.storage.set(&self.key, &serialized)
    }

    /// Returns all retained events, newest first.
    ///
    /// An absent key, an unavailable storage medium, or a malformed
    /// persisted value all yield an empty vector.
    pub fn read_all(&self) -> Vec<DiagnosticEvent> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read diagnostic log from storage");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed diagnostic log in storage, treating as empty");
                Vec::new()
            }
        }
    }

    /// Removes the persisted log entirely.
    pub fn clear(&self) -> anyhow::Result<()> {
        self.storage.remove(&self.key)
    }
}
