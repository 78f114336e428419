//! The record-service boundary
//!
//! Services never talk to a concrete backend. They are handed a
//! `&dyn RecordClient` when constructed, which keeps tests isolated and
//! leaves room for a hosted client next to [`super::LocalRecordStore`].

use crate::error::FintrackResult;

use super::query::{FetchQuery, FieldSelector};
use super::response::{BatchResponse, FetchResponse, Record, RecordResponse};

/// Uniform create/read/update/delete over named tables.
///
/// `Err` is reserved for transport problems (the call could not be made).
/// A call the service refused comes back as `Ok` with `success: false`.
pub trait RecordClient {
    fn fetch_records(&self, table: &str, query: &FetchQuery) -> FintrackResult<FetchResponse>;

    fn get_record_by_id(
        &self,
        table: &str,
        id: i64,
        fields: &[FieldSelector],
    ) -> FintrackResult<RecordResponse>;

    fn create_records(&self, table: &str, records: Vec<Record>) -> FintrackResult<BatchResponse>;

    /// Each record must carry its `Id`. Only the fields present are changed.
    fn update_records(&self, table: &str, records: Vec<Record>) -> FintrackResult<BatchResponse>;

    fn delete_records(&self, table: &str, ids: &[i64]) -> FintrackResult<BatchResponse>;
}
