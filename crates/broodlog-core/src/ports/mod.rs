//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the diagnostics
//! core depends on, but whose implementations live in adapter crates
//! or in the host application.
//!
//! ## Ports Overview
//!
//! - [`ILocalStorage`] - Keyed whole-value local device storage
//! - [`IToastService`] - Transient, auto-dismissing user notifications
//! - [`IDataClient`] - The upstream hosted data service client

pub mod data_client;
pub mod local_storage;
pub mod toast;

pub use data_client::{Filter, FilterOp, IDataClient, Ordering, QueryResult, QuerySpec};
pub use local_storage::ILocalStorage;
pub use toast::{IToastService, Toast, ToastLevel};
