//! Bill service

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Bill, BillId, BillStatus, NewBill};
use crate::reports::{resolve, BillStatusCounts, EffectiveBillStatus};
use crate::storage::mapping::{
    bill_fields, bill_from_record, bill_status_record, bill_to_record, with_id,
};
use crate::storage::tables::bills;
use crate::storage::{FetchQuery, RecordClient, SortDirection};

use super::records::{create_one, delete_one, fetch_all, fetch_by_id, update_one};

/// Service for bill management
pub struct BillService<'a> {
    client: &'a dyn RecordClient,
}

impl<'a> BillService<'a> {
    pub fn new(client: &'a dyn RecordClient) -> Self {
        Self { client }
    }

    /// All bills, soonest due first
    pub fn list(&self) -> FintrackResult<Vec<Bill>> {
        let query = FetchQuery::new()
            .select(bill_fields())
            .order(bills::DUE_DATE, SortDirection::Asc);
        fetch_all(self.client, bills::TABLE, &query, "list bills", bill_from_record)
    }

    /// Bills carrying `tag` (case-insensitive)
    pub fn list_tagged(&self, tag: &str) -> FintrackResult<Vec<Bill>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|b| b.has_tag(tag.trim()))
            .collect())
    }

    pub fn get(&self, id: BillId) -> FintrackResult<Bill> {
        fetch_by_id(
            self.client,
            bills::TABLE,
            id.get(),
            &bill_fields(),
            "get bill",
            bill_from_record,
        )?
        .ok_or_else(|| FintrackError::bill_not_found(id.to_string()))
    }

    pub fn create(&self, bill: &NewBill) -> FintrackResult<Bill> {
        bill.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let created = create_one(self.client, bills::TABLE, bill_to_record(bill), "create bill")?;
        bill_from_record(&created)
    }

    pub fn update(&self, id: BillId, bill: &NewBill) -> FintrackResult<Bill> {
        bill.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        self.get(id)?;

        let updated = update_one(
            self.client,
            bills::TABLE,
            with_id(bill_to_record(bill), id.get()),
            "update bill",
        )?;
        bill_from_record(&updated)
    }

    /// Store `paid`; the bill then resolves as paid whatever its due date
    pub fn mark_paid(&self, id: BillId) -> FintrackResult<Bill> {
        self.get(id)?;
        let updated = update_one(
            self.client,
            bills::TABLE,
            bill_status_record(id, BillStatus::Paid),
            "mark bill paid",
        )?;
        bill_from_record(&updated)
    }

    pub fn delete(&self, id: BillId) -> FintrackResult<Bill> {
        let bill = self.get(id)?;
        delete_one(self.client, bills::TABLE, id.get(), "delete bill")?;
        Ok(bill)
    }

    /// Every bill paired with its status as of `today`
    pub fn with_status(&self, today: NaiveDate) -> FintrackResult<Vec<(Bill, EffectiveBillStatus)>> {
        Ok(self
            .list()?
            .into_iter()
            .map(|bill| {
                let status = resolve(&bill, today);
                (bill, status)
            })
            .collect())
    }

    pub fn status_counts(&self, today: NaiveDate) -> FintrackResult<BillStatusCounts> {
        Ok(BillStatusCounts::from_bills(&self.list()?, today))
    }
}
