//! Broodlog Core - Domain types and port definitions
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `DiagnosticEvent`, `ErrorDetails`, `ServiceError`
//! - **Port definitions** - Traits for adapters: `ILocalStorage`, `IToastService`, `IDataClient`
//! - **Configuration** - Typed YAML configuration with defaults
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure diagnostic types with no I/O.
//! Ports define trait interfaces that adapter crates (and the host
//! application's data-access layer) implement.

pub mod config;
pub mod domain;
pub mod ports;
