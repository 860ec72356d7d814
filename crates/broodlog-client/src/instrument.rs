//! Instrumented data client
//!
//! Presents the same operation surface as the underlying data client
//! while funneling every observed failure into the error reporter.
//! Instrumentation is a pure observation tap: the success or failure
//! outcome, and the payload, reach the caller unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use broodlog_core::domain::ServiceError;
use broodlog_core::ports::{IDataClient, QueryResult, QuerySpec};
use broodlog_diagnostics::ErrorReporter;
use serde_json::{json, Value};

/// The two failure conventions of the upstream service
///
/// A call either raises, or returns a result object carrying an
/// embedded error field. Both are normalized to one [`ServiceError`]
/// shape before the event is recorded.
#[derive(Debug)]
pub enum QueryFailure<'a> {
    /// The call raised
    Raised(&'a anyhow::Error),
    /// The call returned a result with a populated error field
    Embedded(&'a ServiceError),
}

impl QueryFailure<'_> {
    /// Normalizes either convention into the service error shape.
    pub fn normalized(&self) -> ServiceError {
        match self {
            QueryFailure::Raised(e) => ServiceError::from_error(e),
            QueryFailure::Embedded(e) => (*e).clone(),
        }
    }

    /// Label recorded in event context to tell the conventions apart.
    pub fn source(&self) -> &'static str {
        match self {
            QueryFailure::Raised(_) => "raised",
            QueryFailure::Embedded(_) => "embedded",
        }
    }
}

/// Observation wrapper around a data client
///
/// Each operation invokes the inner client and, when the outcome is a
/// failure under either convention, reports it with the operation
/// label `"<verb>_<table>"` (remote procedures: `"rpc_<function>"`).
/// Query specs and row payloads pass through opaquely.
pub struct InstrumentedClient {
    inner: Arc<dyn IDataClient>,
    reporter: Arc<ErrorReporter>,
}

impl InstrumentedClient {
    /// Wraps `inner` so failures are reported via `reporter`.
    pub fn new(inner: Arc<dyn IDataClient>, reporter: Arc<ErrorReporter>) -> Self {
        Self { inner, reporter }
    }

    async fn observe(
        &self,
        operation: String,
        outcome: anyhow::Result<QueryResult>,
    ) -> anyhow::Result<QueryResult> {
        match outcome {
            Err(raised) => {
                self.report(&operation, QueryFailure::Raised(&raised)).await;
                Err(raised)
            }
            Ok(result) => {
                if let Some(embedded) = &result.error {
                    self.report(&operation, QueryFailure::Embedded(embedded))
                        .await;
                }
                Ok(result)
            }
        }
    }

    async fn report(&self, operation: &str, failure: QueryFailure<'_>) {
        let error = failure.normalized();
        let context: Value = json!({ "source": failure.source() });
        self.reporter.report(operation, &error, context).await;
    }
}

#[async_trait]
impl IDataClient for InstrumentedClient {
    async fn select(&self, table: &str, query: &QuerySpec) -> anyhow::Result<QueryResult> {
        let outcome = self.inner.select(table, query).await;
        self.observe(format!("select_{table}"), outcome).await
    }

    async fn insert(&self, table: &str, rows: Value) -> anyhow::Result<QueryResult> {
        let outcome = self.inner.insert(table, rows).await;
        self.observe(format!("insert_{table}"), outcome).await
    }

    async fn update(
        &self,
        table: &str,
        changes: Value,
        query: &QuerySpec,
    ) -> anyhow::Result<QueryResult> {
        let outcome = self.inner.update(table, changes, query).await;
        self.observe(format!("update_{table}"), outcome).await
    }

    async fn delete(&self, table: &str, query: &QuerySpec) -> anyhow::Result<QueryResult> {
        let outcome = self.inner.delete(table, query).await;
        self.observe(format!("delete_{table}"), outcome).await
    }

    async fn rpc(&self, function: &str, args: Value) -> anyhow::Result<QueryResult> {
        let outcome = self.inner.rpc(function, args).await;
        self.observe(format!("rpc_{function}"), outcome).await
    }
}
