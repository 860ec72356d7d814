//! Broodlog Diagnostics - Error capture and diagnostic logging
//!
//! Provides:
//! - `LogStore`: capped, newest-first diagnostic log persisted to local storage
//! - `ErrorReporter`: best-effort sink that records failures and raises toasts
//! - `RenderGuard`: supervisor boundary that contains view-construction failures
//! - `FileStorage`: file-backed `ILocalStorage` adapter

pub mod guard;
pub mod log_store;
pub mod reporter;
pub mod storage;

pub use guard::{GuardState, RenderFailure, RenderGuard, ERROR_BOUNDARY_OPERATION};
pub use log_store::{LogStore, MAX_EVENTS, STORAGE_KEY};
pub use reporter::ErrorReporter;
pub use storage::FileStorage;
