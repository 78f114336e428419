//! Transaction service
//!
//! Like budgets, transactions are written with a category id and read back
//! with the category name.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{BudgetMonth, NewTransaction, Transaction, TransactionId};
use crate::reports::{CategoryBreakdown, IncomeExpenseTrend};
use crate::storage::mapping::{
    transaction_fields, transaction_from_record, transaction_to_record, with_id,
};
use crate::storage::tables::{transactions, ID};
use crate::storage::{Condition, ConditionGroup, FetchQuery, RecordClient, SortDirection};

use super::category::CategoryResolver;
use super::records::{create_one, delete_one, fetch_all, fetch_by_id, update_one};

/// Service for transaction management
pub struct TransactionService<'a> {
    client: &'a dyn RecordClient,
    categories: CategoryResolver<'a>,
}

impl<'a> TransactionService<'a> {
    pub fn new(client: &'a dyn RecordClient) -> Self {
        Self {
            client,
            categories: CategoryResolver::new(client),
        }
    }

    /// All transactions, newest first
    pub fn list(&self) -> FintrackResult<Vec<Transaction>> {
        self.fetch(self.base_query(), "list transactions")
    }

    pub fn list_for_month(&self, month: BudgetMonth) -> FintrackResult<Vec<Transaction>> {
        let query = self
            .base_query()
            .filter(Condition::starts_with(transactions::DATE, month.to_string()));
        self.fetch(query, "list transactions for month")
    }

    /// Transactions in any of `months`, fetched in one call
    pub fn list_for_months(&self, months: &[BudgetMonth]) -> FintrackResult<Vec<Transaction>> {
        if months.is_empty() {
            return Ok(Vec::new());
        }
        let query = self.base_query().group(ConditionGroup::any(
            months
                .iter()
                .map(|m| Condition::starts_with(transactions::DATE, m.to_string()))
                .collect(),
        ));
        self.fetch(query, "list transactions for months")
    }

    pub fn list_for_category(&self, category: &str) -> FintrackResult<Vec<Transaction>> {
        let category_id = self.categories.id_for(category)?;
        let query = self
            .base_query()
            .filter(Condition::equal_to(transactions::CATEGORY, category_id.get()));
        self.fetch(query, "list transactions for category")
    }

    pub fn get(&self, id: TransactionId) -> FintrackResult<Transaction> {
        fetch_by_id(
            self.client,
            transactions::TABLE,
            id.get(),
            &transaction_fields(),
            "get transaction",
            transaction_from_record,
        )?
        .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))
    }

    pub fn create(&self, txn: &NewTransaction) -> FintrackResult<Transaction> {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        let category = self.categories.id_for(&txn.category)?;

        let created = create_one(
            self.client,
            transactions::TABLE,
            transaction_to_record(txn, category),
            "create transaction",
        )?;
        let created = transaction_from_record(&created)?;
        self.get(created.id)
    }

    pub fn update(&self, id: TransactionId, txn: &NewTransaction) -> FintrackResult<Transaction> {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        self.get(id)?;
        let category = self.categories.id_for(&txn.category)?;

        update_one(
            self.client,
            transactions::TABLE,
            with_id(transaction_to_record(txn, category), id.get()),
            "update transaction",
        )?;
        self.get(id)
    }

    pub fn delete(&self, id: TransactionId) -> FintrackResult<Transaction> {
        let txn = self.get(id)?;
        delete_one(self.client, transactions::TABLE, id.get(), "delete transaction")?;
        Ok(txn)
    }

    /// Income, expense and net for each of `months`
    pub fn income_expense_trend(&self, months: &[BudgetMonth]) -> FintrackResult<IncomeExpenseTrend> {
        let transactions = self.list_for_months(months)?;
        Ok(IncomeExpenseTrend::generate(months, &transactions))
    }

    /// Expense totals per category for one month
    pub fn category_breakdown(&self, month: BudgetMonth) -> FintrackResult<CategoryBreakdown> {
        Ok(CategoryBreakdown::generate(&self.list_for_month(month)?))
    }

    fn base_query(&self) -> FetchQuery {
        FetchQuery::new()
            .select(transaction_fields())
            .order(transactions::DATE, SortDirection::Desc)
            .order(ID, SortDirection::Desc)
    }

    fn fetch(&self, query: FetchQuery, operation: &str) -> FintrackResult<Vec<Transaction>> {
        fetch_all(
            self.client,
            transactions::TABLE,
            &query,
            operation,
            transaction_from_record,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewCategory, TransactionKind};
    use crate::services::CategoryService;
    use crate::storage::LocalRecordStore;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> LocalRecordStore {
        let store = LocalRecordStore::in_memory();
        let categories = CategoryService::new(&store);
        for name in ["Food", "Salary", "Housing"] {
            categories.create(&NewCategory::custom(name)).unwrap();
        }
        store
    }

    fn add(
        service: &TransactionService<'_>,
        kind: TransactionKind,
        units: i64,
        on: NaiveDate,
        category: &str,
    ) -> Transaction {
        service
            .create(&NewTransaction::new(kind, Money::from_units(units), on, category))
            .unwrap()
    }

    #[test]
    fn test_create_reads_back_category_name() {
        let store = setup();
        let service = TransactionService::new(&store);

        let txn = service
            .create(
                &NewTransaction::new(
                    TransactionKind::Expense,
                    Money::from_cents(1250),
                    date(2025, 3, 2),
                    "Food",
                )
                .with_description("Lunch"),
            )
            .unwrap();

        assert_eq!(txn.category, "Food");
        assert_eq!(txn.name, "Lunch");
        assert_eq!(service.get(txn.id).unwrap(), txn);
    }

    #[test]
    fn test_unknown_category() {
        let store = setup();
        let service = TransactionService::new(&store);
        let err = service
            .create(&NewTransaction::new(
                TransactionKind::Expense,
                Money::from_units(5),
                date(2025, 3, 2),
                "Travel",
            ))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_filters_by_month_and_category() {
        let store = setup();
        let service = TransactionService::new(&store);
        add(&service, TransactionKind::Expense, 10, date(2025, 3, 2), "Food");
        add(&service, TransactionKind::Expense, 20, date(2025, 3, 9), "Housing");
        add(&service, TransactionKind::Expense, 30, date(2025, 4, 1), "Food");

        let march = BudgetMonth::new(2025, 3).unwrap();
        let in_march = service.list_for_month(march).unwrap();
        assert_eq!(in_march.len(), 2);
        assert_eq!(in_march[0].date, date(2025, 3, 9));

        let food = service.list_for_category("Food").unwrap();
        assert_eq!(food.len(), 2);
        assert!(food.iter().all(|t| t.category == "Food"));
    }

    #[test]
    fn test_category_filter_uses_name_not_id() {
        let store = setup();
        CategoryService::new(&store)
            .create(&NewCategory::custom("1"))
            .unwrap();
        let service = TransactionService::new(&store);
        add(&service, TransactionKind::Expense, 10, date(2025, 3, 2), "Food");
        add(&service, TransactionKind::Expense, 20, date(2025, 3, 3), "1");

        let numeric = service.list_for_category("1").unwrap();
        assert_eq!(numeric.len(), 1);
        assert_eq!(numeric[0].category, "1");
        assert!(service
            .list_for_category("Travel")
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_trend_and_breakdown() {
        let store = setup();
        let service = TransactionService::new(&store);
        add(&service, TransactionKind::Income, 3000, date(2025, 3, 1), "Salary");
        add(&service, TransactionKind::Expense, 900, date(2025, 3, 3), "Housing");
        add(&service, TransactionKind::Expense, 100, date(2025, 3, 4), "Food");
        add(&service, TransactionKind::Expense, 50, date(2025, 4, 4), "Food");

        let march = BudgetMonth::new(2025, 3).unwrap();
        let trend = service.income_expense_trend(&[march, march.next()]).unwrap();
        assert_eq!(trend.months[0].net(), Money::from_units(2000));
        assert_eq!(trend.months[1].expense, Money::from_units(50));

        let breakdown = service.category_breakdown(march).unwrap();
        assert_eq!(breakdown.rows[0].category, "Housing");
        assert_eq!(breakdown.total_expense, Money::from_units(1000));
    }

    #[test]
    fn test_update_and_delete() {
        let store = setup();
        let service = TransactionService::new(&store);
        let txn = add(&service, TransactionKind::Expense, 10, date(2025, 3, 2), "Food");

        let mut changes = NewTransaction::from(&txn);
        changes.category = "Housing".into();
        changes.amount = Money::from_units(15);
        let updated = service.update(txn.id, &changes).unwrap();
        assert_eq!(updated.category, "Housing");
        assert_eq!(updated.amount, Money::from_units(15));

        service.delete(txn.id).unwrap();
        assert!(service.get(txn.id).unwrap_err().is_not_found());
        assert!(service.delete(txn.id).unwrap_err().is_not_found());
    }
}
