//! In-process record service persisted to a single JSON file
//!
//! `LocalRecordStore` implements [`RecordClient`] with the same contract as
//! the hosted service: per-item batch results, field errors for invalid
//! records, reference expansion on read, and filtering/ordering on fetch.
//! Every mutating call that changes anything is written to disk atomically
//! before it returns.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{FintrackError, FintrackResult};

use super::client::RecordClient;
use super::file_io::{read_json, write_json_atomic};
use super::query::{compare_values, FetchQuery, FieldSelector, FieldValue, SortDirection};
use super::response::{
    BatchResponse, BatchResult, FetchResponse, FieldError, Record, RecordResponse,
};
use super::tables::{self, is_known_table, reference_target};

/// On-disk layout of the store file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    /// Highest id handed out so far; ids are unique across tables
    #[serde(default)]
    last_id: i64,
    #[serde(default)]
    tables: BTreeMap<String, Vec<Record>>,
}

impl StoreData {
    fn rows(&self, table: &str) -> &[Record] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    fn find(&self, table: &str, id: i64) -> Option<&Record> {
        self.rows(table).iter().find(|r| record_id(r) == Some(id))
    }

    /// What a record offers to a condition on `field`
    fn field_value(&self, table: &str, record: &Record, field: &str) -> FieldValue {
        let Some(value) = record.get(field).filter(|v| !v.is_null()) else {
            return FieldValue::Missing;
        };
        match reference_target(table, field) {
            Some(target) => FieldValue::Reference {
                id: value.clone(),
                name: value
                    .as_i64()
                    .and_then(|id| self.find(target, id))
                    .and_then(|r| r.get(tables::NAME))
                    .cloned(),
            },
            None => FieldValue::Plain(value.clone()),
        }
    }

    /// Copy the selected fields, expanding references that ask for it
    fn project(&self, table: &str, record: &Record, fields: &[FieldSelector]) -> Record {
        if fields.is_empty() {
            return record.clone();
        }

        let mut out = Record::new();
        if let Some(id) = record.get(tables::ID) {
            out.insert(tables::ID.to_string(), id.clone());
        }
        for selector in fields {
            let value = record.get(&selector.name).cloned().unwrap_or(Value::Null);
            let value = match (
                &selector.reference_field,
                reference_target(table, &selector.name),
            ) {
                (Some(referenced), Some(target)) => self.expand(target, &value, referenced),
                _ => value,
            };
            out.insert(selector.name.clone(), value);
        }
        out
    }

    fn expand(&self, target: &str, value: &Value, referenced: &str) -> Value {
        let Some(row) = value.as_i64().and_then(|id| self.find(target, id)) else {
            return Value::Null;
        };
        let mut expanded = Record::new();
        expanded.insert(tables::ID.to_string(), value.clone());
        expanded.insert(
            referenced.to_string(),
            row.get(referenced).cloned().unwrap_or(Value::Null),
        );
        Value::Object(expanded)
    }

    /// Field errors the hosted service would report for this record
    fn check_fields(&self, table: &str, record: &Record, creating: bool) -> Vec<FieldError> {
        let mut errors = Vec::new();

        match record.get(tables::NAME) {
            Some(Value::String(name)) if !name.trim().is_empty() => {}
            None if !creating => {}
            _ => errors.push(FieldError::new(tables::NAME, "is required")),
        }

        for (field, value) in record {
            if field == tables::ID {
                continue;
            }
            if matches!(value, Value::Array(_) | Value::Object(_)) {
                errors.push(FieldError::new(field.as_str(), "must be a single value"));
                continue;
            }
            if let Some(target) = reference_target(table, field) {
                let exists = value.as_i64().and_then(|id| self.find(target, id)).is_some();
                if !value.is_null() && !exists {
                    errors.push(FieldError::new(field.as_str(), "references a missing record"));
                }
            }
        }

        errors
    }

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

fn record_id(record: &Record) -> Option<i64> {
    record.get(tables::ID).and_then(Value::as_i64)
}

fn timestamp() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn unknown_table(table: &str) -> String {
    format!("Unknown table '{}'", table)
}

/// Record service backed by a JSON file (or by nothing, for tests)
pub struct LocalRecordStore {
    path: Option<PathBuf>,
    data: RwLock<StoreData>,
}

impl LocalRecordStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> FintrackResult<Self> {
        let path = path.into();
        let data: StoreData = read_json(&path)?;
        debug!(path = %path.display(), last_id = data.last_id, "opened record store");
        Ok(Self {
            path: Some(path),
            data: RwLock::new(data),
        })
    }

    /// A store that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(StoreData::default()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of records in a table
    pub fn count(&self, table: &str) -> FintrackResult<usize> {
        Ok(self.read()?.rows(table).len())
    }

    fn read(&self) -> FintrackResult<RwLockReadGuard<'_, StoreData>> {
        self.data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FintrackResult<RwLockWriteGuard<'_, StoreData>> {
        self.data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    fn persist(&self, data: &StoreData) -> FintrackResult<()> {
        match &self.path {
            Some(path) => write_json_atomic(path, data),
            None => Ok(()),
        }
    }
}

impl RecordClient for LocalRecordStore {
    fn fetch_records(&self, table: &str, query: &FetchQuery) -> FintrackResult<FetchResponse> {
        if !is_known_table(table) {
            return Ok(FetchResponse::failed(unknown_table(table)));
        }
        let data = self.read()?;

        let mut matched: Vec<&Record> = data
            .rows(table)
            .iter()
            .filter(|r| query.accepts(|field| data.field_value(table, r, field)))
            .collect();

        matched.sort_by(|a, b| {
            query
                .order_by
                .iter()
                .map(|order| {
                    let left = a.get(&order.field).unwrap_or(&Value::Null);
                    let right = b.get(&order.field).unwrap_or(&Value::Null);
                    match order.direction {
                        SortDirection::Asc => compare_values(left, right),
                        SortDirection::Desc => compare_values(right, left),
                    }
                })
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        let records: Vec<Record> = matched
            .into_iter()
            .map(|r| data.project(table, r, &query.fields))
            .collect();

        debug!(table, count = records.len(), "fetched records");
        Ok(FetchResponse::ok(records))
    }

    fn get_record_by_id(
        &self,
        table: &str,
        id: i64,
        fields: &[FieldSelector],
    ) -> FintrackResult<RecordResponse> {
        if !is_known_table(table) {
            return Ok(RecordResponse::failed(unknown_table(table)));
        }
        let data = self.read()?;
        let found = data.find(table, id).map(|r| data.project(table, r, fields));
        debug!(table, id, found = found.is_some(), "fetched record by id");
        Ok(RecordResponse::ok(found))
    }

    fn create_records(&self, table: &str, records: Vec<Record>) -> FintrackResult<BatchResponse> {
        if !is_known_table(table) {
            return Ok(BatchResponse::failed(unknown_table(table)));
        }
        // Changes go to a copy that replaces the tables once it is on disk
        let mut guard = self.write()?;
        let mut data = guard.clone();
        let mut results = Vec::with_capacity(records.len());
        let mut changed = false;

        for mut record in records {
            let errors = data.check_fields(table, &record, true);
            if !errors.is_empty() {
                results.push(BatchResult::failed("Invalid record", errors));
                continue;
            }

            let id = data.next_id();
            let now = timestamp();
            record.insert(tables::ID.to_string(), Value::from(id));
            record.insert(tables::CREATED_ON.to_string(), now.clone());
            record.insert(tables::MODIFIED_ON.to_string(), now);

            data.tables
                .entry(table.to_string())
                .or_default()
                .push(record.clone());
            results.push(BatchResult::ok(Some(record)));
            changed = true;
        }

        if changed {
            self.persist(&data)?;
            *guard = data;
        }
        debug!(table, results = results.len(), "created records");
        Ok(BatchResponse::ok(results))
    }

    fn update_records(&self, table: &str, records: Vec<Record>) -> FintrackResult<BatchResponse> {
        if !is_known_table(table) {
            return Ok(BatchResponse::failed(unknown_table(table)));
        }
        let mut guard = self.write()?;
        let mut data = guard.clone();
        let mut results = Vec::with_capacity(records.len());
        let mut changed = false;

        for record in records {
            let Some(id) = record_id(&record) else {
                results.push(BatchResult::failed(
                    "Record is missing its Id",
                    vec![FieldError::new(tables::ID, "is required")],
                ));
                continue;
            };
            if data.find(table, id).is_none() {
                results.push(BatchResult::failed(
                    format!("Record {} not found", id),
                    Vec::new(),
                ));
                continue;
            }
            let errors = data.check_fields(table, &record, false);
            if !errors.is_empty() {
                results.push(BatchResult::failed("Invalid record", errors));
                continue;
            }

            let rows = data.tables.entry(table.to_string()).or_default();
            if let Some(row) = rows.iter_mut().find(|r| record_id(r) == Some(id)) {
                for (field, value) in record {
                    if field != tables::ID {
                        row.insert(field, value);
                    }
                }
                row.insert(tables::MODIFIED_ON.to_string(), timestamp());
                results.push(BatchResult::ok(Some(row.clone())));
                changed = true;
            }
        }

        if changed {
            self.persist(&data)?;
            *guard = data;
        }
        debug!(table, results = results.len(), "updated records");
        Ok(BatchResponse::ok(results))
    }

    fn delete_records(&self, table: &str, ids: &[i64]) -> FintrackResult<BatchResponse> {
        if !is_known_table(table) {
            return Ok(BatchResponse::failed(unknown_table(table)));
        }
        let mut guard = self.write()?;
        let mut data = guard.clone();
        let mut results = Vec::with_capacity(ids.len());
        let mut changed = false;

        let rows = data.tables.entry(table.to_string()).or_default();
        for &id in ids {
            match rows.iter().position(|r| record_id(r) == Some(id)) {
                Some(index) => {
                    rows.remove(index);
                    results.push(BatchResult::ok(None));
                    changed = true;
                }
                None => results.push(BatchResult::failed(
                    format!("Record {} not found", id),
                    Vec::new(),
                )),
            }
        }

        if changed {
            self.persist(&data)?;
            *guard = data;
        }
        debug!(table, results = results.len(), "deleted records");
        Ok(BatchResponse::ok(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::query::{Condition, ConditionGroup};
    use serde_json::json;
    use tempfile::TempDir;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    fn create_one(store: &LocalRecordStore, table: &str, value: Value) -> i64 {
        let records = store
            .create_records(table, vec![record(value)])
            .unwrap()
            .into_records("create")
            .unwrap();
        records[0]["Id"].as_i64().unwrap()
    }

    #[test]
    fn test_create_assigns_ids_and_timestamps() {
        let store = LocalRecordStore::in_memory();
        let first = create_one(&store, "bills_c", json!({"Name": "Rent"}));
        let second = create_one(&store, "bills_c", json!({"Name": "Power"}));
        assert!(second > first);

        let fetched = store.get_record_by_id("bills_c", first, &[]).unwrap();
        let row = fetched.data.unwrap();
        assert_eq!(row["Name"], json!("Rent"));
        assert!(row.contains_key("CreatedOn"));
    }

    #[test]
    fn test_reference_expanded_when_requested() {
        let store = LocalRecordStore::in_memory();
        let food = create_one(&store, "Category_c", json!({"Name": "Food"}));
        create_one(
            &store,
            "Budget_c",
            json!({"Name": "Food Budget", "month_c": "2025-01", "category_c": food}),
        );

        let query = FetchQuery::new().select(vec![
            FieldSelector::field("Name"),
            FieldSelector::reference("category_c", "Name"),
        ]);
        let rows = store.fetch_records("Budget_c", &query).unwrap().data;
        assert_eq!(rows[0]["category_c"], json!({"Id": food, "Name": "Food"}));
        assert!(!rows[0].contains_key("month_c"));

        let bare = FetchQuery::new().select(vec![FieldSelector::field("category_c")]);
        let rows = store.fetch_records("Budget_c", &bare).unwrap().data;
        assert_eq!(rows[0]["category_c"], json!(food));
    }

    #[test]
    fn test_reference_condition_matches_by_name() {
        let store = LocalRecordStore::in_memory();
        let food = create_one(&store, "Category_c", json!({"Name": "Food"}));
        let rent = create_one(&store, "Category_c", json!({"Name": "Housing"}));
        for (name, category) in [("Groceries", food), ("Rent", rent)] {
            create_one(
                &store,
                "Transaction_c",
                json!({"Name": name, "date_c": "2025-01-02", "category_c": category}),
            );
        }

        let query = FetchQuery::new().group(ConditionGroup::all(vec![
            Condition::equal_to("category_c", "Food"),
            Condition::starts_with("date_c", "2025-01"),
        ]));
        let rows = store.fetch_records("Transaction_c", &query).unwrap().data;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Name"], json!("Groceries"));
    }

    #[test]
    fn test_order_by_descending() {
        let store = LocalRecordStore::in_memory();
        for (name, amount) in [("a", 10), ("b", 30), ("c", 20)] {
            create_one(&store, "bills_c", json!({"Name": name, "amount_c": amount}));
        }
        let query = FetchQuery::new().order("amount_c", SortDirection::Desc);
        let names: Vec<Value> = store
            .fetch_records("bills_c", &query)
            .unwrap()
            .data
            .into_iter()
            .map(|r| r["Name"].clone())
            .collect();
        assert_eq!(names, vec![json!("b"), json!("c"), json!("a")]);
    }

    #[test]
    fn test_batch_partial_failure_commits_valid_items() {
        let store = LocalRecordStore::in_memory();
        let response = store
            .create_records(
                "bills_c",
                vec![
                    record(json!({"Name": "Rent"})),
                    record(json!({"Name": "  "})),
                    record(json!({"Name": "Water"})),
                ],
            )
            .unwrap();

        assert!(response.success);
        assert_eq!(
            response.results.iter().filter(|r| r.success).count(),
            2
        );
        assert_eq!(response.results[1].errors[0].field_label, "Name");
        assert_eq!(store.count("bills_c").unwrap(), 2);

        let err = response.into_records("create bills").unwrap_err();
        assert!(err.is_batch());
    }

    #[test]
    fn test_missing_reference_rejected() {
        let store = LocalRecordStore::in_memory();
        let response = store
            .create_records(
                "Budget_c",
                vec![record(json!({"Name": "Ghost", "category_c": 99}))],
            )
            .unwrap();
        assert!(!response.results[0].success);
        assert_eq!(response.results[0].errors[0].field_label, "category_c");
    }

    #[test]
    fn test_update_merges_fields() {
        let store = LocalRecordStore::in_memory();
        let id = create_one(&store, "bills_c", json!({"Name": "Rent", "status_c": "unpaid"}));

        let response = store
            .update_records("bills_c", vec![record(json!({"Id": id, "status_c": "paid"}))])
            .unwrap();
        let updated = response.into_records("update bill").unwrap();
        assert_eq!(updated[0]["Name"], json!("Rent"));
        assert_eq!(updated[0]["status_c"], json!("paid"));
    }

    #[test]
    fn test_update_and_delete_missing_id_fail_per_item() {
        let store = LocalRecordStore::in_memory();
        let update = store
            .update_records("bills_c", vec![record(json!({"Id": 41, "Name": "x"}))])
            .unwrap();
        assert!(!update.results[0].success);

        let delete = store.delete_records("bills_c", &[41]).unwrap();
        assert_eq!(delete.results[0].message.as_deref(), Some("Record 41 not found"));
    }

    #[test]
    fn test_unknown_table_fails_call() {
        let store = LocalRecordStore::in_memory();
        let response = store.fetch_records("payees_c", &FetchQuery::new()).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("records.json");

        let id = {
            let store = LocalRecordStore::open(&path).unwrap();
            create_one(&store, "accounts_c", json!({"Name": "Checking", "balance_c": 120.5}))
        };
        assert!(path.exists());

        let reopened = LocalRecordStore::open(&path).unwrap();
        let row = reopened
            .get_record_by_id("accounts_c", id, &[FieldSelector::field("balance_c")])
            .unwrap()
            .data
            .unwrap();
        assert_eq!(row["balance_c"], json!(120.5));

        let next = create_one(&reopened, "accounts_c", json!({"Name": "Savings"}));
        assert!(next > id);
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        let store = LocalRecordStore::open(&path).unwrap();
        let kept = create_one(&store, "bills_c", json!({"Name": "Rent"}));

        // a directory where the temp file goes makes every save fail
        let blocker = path.with_extension("json.tmp");
        std::fs::create_dir(&blocker).unwrap();

        let created = store.create_records("bills_c", vec![record(json!({"Name": "Gym"}))]);
        assert!(created.is_err());
        let updated = store.update_records(
            "bills_c",
            vec![record(json!({"Id": kept, "Name": "Mortgage"}))],
        );
        assert!(updated.is_err());
        assert!(store.delete_records("bills_c", &[kept]).is_err());

        assert_eq!(store.count("bills_c").unwrap(), 1);
        let row = store
            .get_record_by_id("bills_c", kept, &[])
            .unwrap()
            .data
            .unwrap();
        assert_eq!(row["Name"], json!("Rent"));

        std::fs::remove_dir(&blocker).unwrap();
        let next = create_one(&store, "bills_c", json!({"Name": "Gym"}));
        assert_eq!(next, kept + 1);
    }

    #[test]
    fn test_numeric_name_does_not_match_reference_id() {
        let store = LocalRecordStore::in_memory();
        let food = create_one(&store, "Category_c", json!({"Name": "Food"}));
        let numeric = create_one(&store, "Category_c", json!({"Name": food.to_string()}));
        for (name, category) in [("Groceries", food), ("Other", numeric)] {
            create_one(
                &store,
                "Transaction_c",
                json!({"Name": name, "date_c": "2025-01-02", "category_c": category}),
            );
        }

        let by_name = FetchQuery::new().filter(Condition::equal_to("category_c", food.to_string()));
        let rows = store.fetch_records("Transaction_c", &by_name).unwrap().data;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Name"], json!("Other"));

        let by_id = FetchQuery::new().filter(Condition::equal_to("category_c", food));
        let rows = store.fetch_records("Transaction_c", &by_id).unwrap().data;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Name"], json!("Groceries"));
    }
}
