//! Broodlog Client - Instrumented data access
//!
//! Provides:
//! - `InstrumentedClient`: wraps any `IDataClient` so failures are
//!   reported to the diagnostics subsystem without changing the
//!   outcome or payload seen by the caller
//! - `QueryFailure`: the two failure conventions of the upstream
//!   service, normalized to one shape before reporting

pub mod instrument;

pub use instrument::{InstrumentedClient, QueryFailure};
