//! Round trips shared by every entity service
//!
//! Each helper makes one `RecordClient` call and turns call-level and
//! per-item failures into `FintrackError`s.

use tracing::debug;

use crate::error::{FintrackError, FintrackResult};
use crate::storage::{FetchQuery, FieldSelector, Record, RecordClient};

pub(crate) fn fetch_all<T>(
    client: &dyn RecordClient,
    table: &str,
    query: &FetchQuery,
    operation: &str,
    map: fn(&Record) -> FintrackResult<T>,
) -> FintrackResult<Vec<T>> {
    debug!(table, operation, "fetching records");
    let records = client.fetch_records(table, query)?.into_records(operation)?;
    records.iter().map(map).collect()
}

pub(crate) fn fetch_by_id<T>(
    client: &dyn RecordClient,
    table: &str,
    id: i64,
    fields: &[FieldSelector],
    operation: &str,
    map: fn(&Record) -> FintrackResult<T>,
) -> FintrackResult<Option<T>> {
    debug!(table, id, operation, "fetching record");
    client
        .get_record_by_id(table, id, fields)?
        .into_record(operation)?
        .as_ref()
        .map(map)
        .transpose()
}

/// Create one record and return it as stored
pub(crate) fn create_one(
    client: &dyn RecordClient,
    table: &str,
    record: Record,
    operation: &str,
) -> FintrackResult<Record> {
    debug!(table, operation, "creating record");
    client
        .create_records(table, vec![record])?
        .into_records(operation)?
        .pop()
        .ok_or_else(|| no_record(operation))
}

/// Apply a partial update; `record` must carry its `Id`
pub(crate) fn update_one(
    client: &dyn RecordClient,
    table: &str,
    record: Record,
    operation: &str,
) -> FintrackResult<Record> {
    debug!(table, operation, "updating record");
    client
        .update_records(table, vec![record])?
        .into_records(operation)?
        .pop()
        .ok_or_else(|| no_record(operation))
}

pub(crate) fn delete_one(
    client: &dyn RecordClient,
    table: &str,
    id: i64,
    operation: &str,
) -> FintrackResult<()> {
    debug!(table, id, operation, "deleting record");
    client.delete_records(table, &[id])?.into_records(operation)?;
    Ok(())
}

fn no_record(operation: &str) -> FintrackError {
    FintrackError::Service(format!("failed to {}: no record returned", operation))
}
