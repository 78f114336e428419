//! Savings goal service

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, NewSavingsGoal, SavingsGoal, SavingsGoalId, ValidationError};
use crate::reports::GoalSummary;
use crate::storage::mapping::{
    goal_amount_record, goal_create_record, goal_fields, goal_from_record, goal_to_record,
    with_id,
};
use crate::storage::tables::savings_goals;
use crate::storage::{FetchQuery, RecordClient};

use super::records::{create_one, delete_one, fetch_all, fetch_by_id, update_one};

/// Service for savings goals
pub struct SavingsGoalService<'a> {
    client: &'a dyn RecordClient,
}

impl<'a> SavingsGoalService<'a> {
    pub fn new(client: &'a dyn RecordClient) -> Self {
        Self { client }
    }

    /// All goals by priority (high first), then nearest deadline, then name
    pub fn list(&self) -> FintrackResult<Vec<SavingsGoal>> {
        let query = FetchQuery::new().select(goal_fields());
        let mut goals = fetch_all(
            self.client,
            savings_goals::TABLE,
            &query,
            "list savings goals",
            goal_from_record,
        )?;
        goals.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| match (a.deadline, b.deadline) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(goals)
    }

    pub fn get(&self, id: SavingsGoalId) -> FintrackResult<SavingsGoal> {
        fetch_by_id(
            self.client,
            savings_goals::TABLE,
            id.get(),
            &goal_fields(),
            "get savings goal",
            goal_from_record,
        )?
        .ok_or_else(|| FintrackError::goal_not_found(id.to_string()))
    }

    /// Create a goal with nothing saved yet
    pub fn create(&self, goal: &NewSavingsGoal) -> FintrackResult<SavingsGoal> {
        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let created = create_one(
            self.client,
            savings_goals::TABLE,
            goal_create_record(goal),
            "create savings goal",
        )?;
        goal_from_record(&created)
    }

    /// Update everything except the saved amount
    pub fn update(&self, id: SavingsGoalId, goal: &NewSavingsGoal) -> FintrackResult<SavingsGoal> {
        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        self.get(id)?;

        let updated = update_one(
            self.client,
            savings_goals::TABLE,
            with_id(goal_to_record(goal), id.get()),
            "update savings goal",
        )?;
        goal_from_record(&updated)
    }

    /// Add `amount` to the saved amount. Only that field is written, and the
    /// target may be overshot.
    pub fn add_contribution(&self, id: SavingsGoalId, amount: Money) -> FintrackResult<SavingsGoal> {
        if !amount.is_positive() {
            return Err(FintrackError::Validation(
                ValidationError::NotPositive("Contribution").to_string(),
            ));
        }

        let mut goal = self.get(id)?;
        goal.add_contribution(amount);
        update_one(
            self.client,
            savings_goals::TABLE,
            goal_amount_record(id, goal.current_amount),
            "add contribution",
        )?;
        Ok(goal)
    }

    pub fn delete(&self, id: SavingsGoalId) -> FintrackResult<SavingsGoal> {
        let goal = self.get(id)?;
        delete_one(self.client, savings_goals::TABLE, id.get(), "delete savings goal")?;
        Ok(goal)
    }

    pub fn summary(&self) -> FintrackResult<GoalSummary> {
        Ok(GoalSummary::from_goals(&self.list()?))
    }
}
