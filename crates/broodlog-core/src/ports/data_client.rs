//! Data client port (driven/secondary port)
//!
//! This module defines the interface for the externally hosted data
//! service the application stores its records in (birds, incubations,
//! chicks). The service exposes table-scoped reads and writes plus
//! named remote procedures.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because transport errors are adapter-specific.
//! - A call can fail two ways, and both must be supported: it raises
//!   (`Err`), or it returns a [`QueryResult`] whose `error` field is
//!   populated — the embedded-error convention of the wrapped service.
//! - [`QuerySpec`] is a pure description of filters and modifiers. It
//!   records clauses for the adapter to interpret; nothing in this
//!   layer evaluates them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ServiceError;

/// Comparison operator in a filter clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Equal to
    Eq,
    /// Not equal to
    Neq,
    /// Greater than
    Gt,
    /// Greater than or equal to
    Gte,
    /// Less than
    Lt,
    /// Less than or equal to
    Lte,
    /// Pattern match (SQL LIKE semantics)
    Like,
    /// Member of a value list
    In,
    /// IS comparison (null / boolean)
    Is,
}

/// One filter clause: `column <op> value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: Value,
}

/// Result ordering: column plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    pub column: String,
    pub ascending: bool,
}

/// A composable description of a table query
///
/// Built fluently at call sites and passed through to the data client
/// unchanged. All fields are optional; an empty spec selects everything.
///
/// # Example
///
/// ```
/// use broodlog_core::ports::QuerySpec;
///
/// let spec = QuerySpec::new()
///     .eq("species", "quail")
///     .gte("hatch_date", "2026-01-01")
///     .order_desc("hatch_date")
///     .limit(20);
/// assert_eq!(spec.filters.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Column list to return (`None` means all columns)
    pub columns: Option<String>,
    /// Filter clauses, combined with AND logic
    pub filters: Vec<Filter>,
    /// Result ordering
    pub order: Option<Ordering>,
    /// Maximum number of rows
    pub limit: Option<u32>,
    /// Inclusive row range for pagination (offset pair)
    pub range: Option<(u32, u32)>,
}

impl QuerySpec {
    /// Creates an empty spec (matches all rows, all columns)
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the returned columns
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    fn filter(mut self, column: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op,
            value: value.into(),
        });
        self
    }

    /// Adds an equality clause
    pub fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Eq, value)
    }

    /// Adds an inequality clause
    pub fn neq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Neq, value)
    }

    /// Adds a greater-than clause
    pub fn gt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Gt, value)
    }

    /// Adds a greater-than-or-equal clause
    pub fn gte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Gte, value)
    }

    /// Adds a less-than clause
    pub fn lt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Lt, value)
    }

    /// Adds a less-than-or-equal clause
    pub fn lte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Lte, value)
    }

    /// Adds a pattern-match clause
    pub fn like(self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.filter(column, FilterOp::Like, pattern.into())
    }

    /// Adds a membership clause
    pub fn is_in(self, column: impl Into<String>, values: Vec<Value>) -> Self {
        self.filter(column, FilterOp::In, Value::Array(values))
    }

    /// Adds an IS clause (null / boolean comparison)
    pub fn is(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(column, FilterOp::Is, value)
    }

    /// Orders results ascending by `column`
    pub fn order_asc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Ordering {
            column: column.into(),
            ascending: true,
        });
        self
    }

    /// Orders results descending by `column`
    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order = Some(Ordering {
            column: column.into(),
            ascending: false,
        });
        self
    }

    /// Caps the number of returned rows
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Selects an inclusive row range for pagination
    pub fn range(mut self, from: u32, to: u32) -> Self {
        self.range = Some((from, to));
        self
    }

    /// Returns true if no filters or modifiers are set
    pub fn is_empty(&self) -> bool {
        self.columns.is_none()
            && self.filters.is_empty()
            && self.order.is_none()
            && self.limit.is_none()
            && self.range.is_none()
    }
}

/// Outcome of a data service call
///
/// The service's convention: a call that reaches the server returns
/// both a `data` payload and an optional `error`. A populated `error`
/// with a successful transport is the embedded-error case; callers
/// must check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Returned rows or procedure output (`Null` on failure)
    pub data: Value,
    /// Embedded service error, if the operation failed server-side
    pub error: Option<ServiceError>,
}

impl QueryResult {
    /// Creates a successful result carrying `data`.
    pub fn ok(data: Value) -> Self {
        Self { data, error: None }
    }

    /// Creates a failed result carrying an embedded error.
    pub fn err(error: ServiceError) -> Self {
        Self {
            data: Value::Null,
            error: Some(error),
        }
    }

    /// Returns true if the result carries an embedded error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

/// Port trait for the hosted data service client
///
/// This is the operation surface the instrumentation layer wraps:
/// table-scoped read/insert/update/delete plus named remote procedure
/// invocation. Arguments are opaque to the diagnostics subsystem and
/// pass through unchanged.
#[async_trait::async_trait]
pub trait IDataClient: Send + Sync {
    /// Reads rows from `table` according to `query`.
    async fn select(&self, table: &str, query: &QuerySpec) -> anyhow::Result<QueryResult>;

    /// Inserts `rows` (an object or array of objects) into `table`.
    async fn insert(&self, table: &str, rows: Value) -> anyhow::Result<QueryResult>;

    /// Applies `changes` to the rows of `table` matched by `query`.
    async fn update(
        &self,
        table: &str,
        changes: Value,
        query: &QuerySpec,
    ) -> anyhow::Result<QueryResult>;

    /// Deletes the rows of `table` matched by `query`.
    async fn delete(&self, table: &str, query: &QuerySpec) -> anyhow::Result<QueryResult>;

    /// Invokes the named remote procedure with `args`.
    async fn rpc(&self, function: &str, args: Value) -> anyhow::Result<QueryResult>;
}
