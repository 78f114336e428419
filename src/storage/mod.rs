//! Record storage layer for fintrack
//!
//! Everything that knows about the record service lives here: the client
//! trait, the request and response shapes, table and field names, and the
//! translation between wire records and models. `LocalRecordStore` is the
//! JSON-file implementation used by the CLI.

pub mod client;
pub mod file_io;
pub mod local;
pub mod mapping;
pub mod query;
pub mod response;
pub mod tables;

pub use client::RecordClient;
pub use local::LocalRecordStore;
pub use query::{
    Condition, ConditionGroup, FetchQuery, FieldSelector, FieldValue, GroupOperator, Operator, OrderBy,
    SortDirection,
};
pub use response::{BatchResponse, BatchResult, FetchResponse, FieldError, Record, RecordResponse};
