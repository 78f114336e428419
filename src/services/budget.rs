//! Budget service
//!
//! Budgets reference their category by id in the record service; callers
//! only ever see the category name.

use tracing::info;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, BudgetId, BudgetMonth, Money, NewBudget};
use crate::reports::BudgetSummary;
use crate::storage::mapping::{
    budget_create_record, budget_fields, budget_from_record, budget_spent_record,
    budget_to_record, with_id,
};
use crate::storage::tables::{budgets, NAME};
use crate::storage::{Condition, ConditionGroup, FetchQuery, RecordClient, SortDirection};

use super::category::CategoryResolver;
use super::records::{create_one, delete_one, fetch_all, fetch_by_id, update_one};

/// Service for budget management
pub struct BudgetService<'a> {
    client: &'a dyn RecordClient,
    categories: CategoryResolver<'a>,
}

impl<'a> BudgetService<'a> {
    pub fn new(client: &'a dyn RecordClient) -> Self {
        Self {
            client,
            categories: CategoryResolver::new(client),
        }
    }

    /// All budgets, latest month first
    pub fn list(&self) -> FintrackResult<Vec<Budget>> {
        let query = FetchQuery::new()
            .select(budget_fields())
            .order(budgets::MONTH, SortDirection::Desc)
            .order(NAME, SortDirection::Asc);
        self.fetch(&query, "list budgets")
    }

    pub fn list_for_month(&self, month: BudgetMonth) -> FintrackResult<Vec<Budget>> {
        let query = FetchQuery::new()
            .select(budget_fields())
            .filter(Condition::equal_to(budgets::MONTH, month.to_string()))
            .order(NAME, SortDirection::Asc);
        self.fetch(&query, "list budgets for month")
    }

    pub fn get(&self, id: BudgetId) -> FintrackResult<Budget> {
        fetch_by_id(
            self.client,
            budgets::TABLE,
            id.get(),
            &budget_fields(),
            "get budget",
            budget_from_record,
        )?
        .ok_or_else(|| FintrackError::budget_not_found(id.to_string()))
    }

    /// Create a budget. New budgets start with nothing spent.
    pub fn create(&self, budget: &NewBudget) -> FintrackResult<Budget> {
        budget
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        let category = self.categories.id_for(&budget.category)?;

        let created = create_one(
            self.client,
            budgets::TABLE,
            budget_create_record(budget, category),
            "create budget",
        )?;
        let created = budget_from_record(&created)?;
        self.get(created.id)
    }

    /// Update everything except `spent` and `rollover`
    pub fn update(&self, id: BudgetId, budget: &NewBudget) -> FintrackResult<Budget> {
        budget
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        self.get(id)?;
        let category = self.categories.id_for(&budget.category)?;

        update_one(
            self.client,
            budgets::TABLE,
            with_id(budget_to_record(budget, category), id.get()),
            "update budget",
        )?;
        self.get(id)
    }

    /// Set the spent amount of the budget for `category` in `month`
    pub fn update_spent(
        &self,
        category: &str,
        month: BudgetMonth,
        spent: Money,
    ) -> FintrackResult<Budget> {
        if spent.is_negative() {
            return Err(FintrackError::Validation("Spent cannot be negative".into()));
        }

        let category_id = self.categories.id_for(category)?;
        let query = FetchQuery::new()
            .select(budget_fields())
            .group(ConditionGroup::all(vec![
                Condition::equal_to(budgets::MONTH, month.to_string()),
                Condition::equal_to(budgets::CATEGORY, category_id.get()),
            ]));
        let budget = self
            .fetch(&query, "find budget")?
            .into_iter()
            .next()
            .ok_or_else(|| {
                FintrackError::budget_not_found(format!("{} for {}", category.trim(), month))
            })?;

        update_one(
            self.client,
            budgets::TABLE,
            budget_spent_record(budget.id, spent),
            "update budget spending",
        )?;
        info!(budget = budget.id.get(), %month, "updated budget spending");
        self.get(budget.id)
    }

    pub fn delete(&self, id: BudgetId) -> FintrackResult<Budget> {
        let budget = self.get(id)?;
        delete_one(self.client, budgets::TABLE, id.get(), "delete budget")?;
        Ok(budget)
    }

    /// Totals for one month, along with the budgets they were built from
    pub fn summary(&self, month: BudgetMonth) -> FintrackResult<(BudgetSummary, Vec<Budget>)> {
        let budgets = self.list_for_month(month)?;
        Ok((BudgetSummary::for_month(&budgets, month), budgets))
    }

    fn fetch(&self, query: &FetchQuery, operation: &str) -> FintrackResult<Vec<Budget>> {
        fetch_all(self.client, budgets::TABLE, query, operation, budget_from_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStatus, NewCategory};
    use crate::services::CategoryService;
    use crate::storage::LocalRecordStore;

    fn jan() -> BudgetMonth {
        BudgetMonth::new(2025, 1).unwrap()
    }

    fn store_with_categories(names: &[&str]) -> LocalRecordStore {
        let store = LocalRecordStore::in_memory();
        let categories = CategoryService::new(&store);
        for name in names {
            categories.create(&NewCategory::custom(*name)).unwrap();
        }
        store
    }

    #[test]
    fn test_category_name_round_trip() {
        let store = store_with_categories(&["Food", "Housing"]);
        let service = BudgetService::new(&store);

        let created = service
            .create(&NewBudget::new("Food", jan(), Money::from_units(400)))
            .unwrap();
        assert_eq!(created.category, "Food");
        assert_eq!(created.name, "Food Budget");
        assert_eq!(created.spent, Money::zero());
        assert_eq!(created.status, BudgetStatus::Planned);

        let fetched = service.get(created.id).unwrap();
        assert_eq!(fetched.category, "Food");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let store = store_with_categories(&[]);
        let service = BudgetService::new(&store);

        let err = service
            .create(&NewBudget::new("Travel", jan(), Money::from_units(100)))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.count("Budget_c").unwrap(), 0);
    }

    #[test]
    fn test_update_keeps_spent() {
        let store = store_with_categories(&["Food", "Housing"]);
        let service = BudgetService::new(&store);
        let budget = service
            .create(&NewBudget::new("Food", jan(), Money::from_units(400)))
            .unwrap();
        service
            .update_spent("Food", jan(), Money::from_units(120))
            .unwrap();

        let mut changes = NewBudget::new("Housing", jan(), Money::from_units(900));
        changes.status = BudgetStatus::Pending;
        let updated = service.update(budget.id, &changes).unwrap();

        assert_eq!(updated.category, "Housing");
        assert_eq!(updated.status, BudgetStatus::Pending);
        assert_eq!(updated.spent, Money::from_units(120));
    }

    #[test]
    fn test_update_spent_targets_month_and_category() {
        let store = store_with_categories(&["Food"]);
        let service = BudgetService::new(&store);
        let feb = jan().next();
        service
            .create(&NewBudget::new("Food", jan(), Money::from_units(400)))
            .unwrap();
        let february = service
            .create(&NewBudget::new("Food", feb, Money::from_units(400)))
            .unwrap();

        let updated = service
            .update_spent("Food", feb, Money::from_units(90))
            .unwrap();
        assert_eq!(updated.id, february.id);
        assert_eq!(updated.spent, Money::from_units(90));

        let missing = service
            .update_spent("Food", feb.next(), Money::from_units(1))
            .unwrap_err();
        assert!(missing.is_not_found());
    }

    #[test]
    fn test_update_spent_with_numeric_category_name() {
        // "Food" gets id 1, so the category named "1" must not resolve to it
        let store = store_with_categories(&["Food", "1"]);
        let service = BudgetService::new(&store);
        let food = service
            .create(&NewBudget::new("Food", jan(), Money::from_units(400)))
            .unwrap();
        let numeric = service
            .create(&NewBudget::new("1", jan(), Money::from_units(50)))
            .unwrap();

        let updated = service
            .update_spent("1", jan(), Money::from_units(42))
            .unwrap();
        assert_eq!(updated.id, numeric.id);
        assert_eq!(updated.category, "1");
        assert_eq!(service.get(food.id).unwrap().spent, Money::zero());

        let err = service
            .update_spent("Travel", jan(), Money::from_units(1))
            .unwrap_err();
        assert_eq!(err.to_string(), "Category not found: Travel");
    }

    #[test]
    fn test_month_summary() {
        let store = store_with_categories(&["Food", "Housing"]);
        let service = BudgetService::new(&store);
        service
            .create(&NewBudget::new("Food", jan(), Money::from_units(400)))
            .unwrap();
        service
            .create(&NewBudget::new("Housing", jan(), Money::from_units(600)))
            .unwrap();
        service
            .create(&NewBudget::new("Food", jan().next(), Money::from_units(50)))
            .unwrap();
        service
            .update_spent("Housing", jan(), Money::from_units(250))
            .unwrap();

        let (summary, budgets) = service.summary(jan()).unwrap();
        assert_eq!(budgets.len(), 2);
        assert_eq!(summary.total_budget, Money::from_units(1000));
        assert_eq!(summary.total_spent, Money::from_units(250));
        assert_eq!(summary.percentage, 25.0);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let store = store_with_categories(&[]);
        let service = BudgetService::new(&store);
        assert!(service.delete(BudgetId::new(5)).unwrap_err().is_not_found());
    }
}
