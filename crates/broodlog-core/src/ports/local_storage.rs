//! Local storage port (driven/secondary port)
//!
//! This module defines the interface for the small keyed value store
//! the diagnostic log persists into. The model is deliberately minimal:
//! string keys mapped to whole string values, replaced wholesale on
//! every write. No partial or append-only primitive is assumed.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because storage errors are adapter-specific
//!   (filesystem, browser storage, etc.) and callers degrade gracefully
//!   rather than classify them.
//! - Operations are synchronous; values are small (a bounded JSON
//!   sequence) and adapters are local to the device.

/// Port trait for keyed whole-value local storage
///
/// ## Implementation Notes
///
/// - `get` returns `Ok(None)` when the key has never been written or
///   was removed; `Err` is reserved for the medium being unavailable.
/// - `set` replaces any prior value for the key.
/// - `remove` is idempotent; removing an absent key is not an error.
pub trait ILocalStorage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}
