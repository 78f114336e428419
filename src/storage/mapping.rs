//! Translation between wire records and domain models
//!
//! Reading is strict about shape: enumerated fields must hold a known value
//! and dates must parse, otherwise the record is rejected with a
//! `FintrackError::Wire`. Optional fields fall back to the same defaults the
//! record service applies (`spent` 0, status `Planned`/`unpaid`, ...).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    join_tags, parse_tags, Account, AccountId, AccountType, Bill, BillId, BillStatus, Budget,
    BudgetId, BudgetMonth, BudgetStatus, Category, CategoryId, GoalPriority, Money, NewAccount,
    NewBill, NewBudget, NewCategory, NewSavingsGoal, NewTransaction, SavingsGoal, SavingsGoalId,
    Transaction, TransactionId, TransactionKind,
};

use super::query::FieldSelector;
use super::response::Record;
use super::tables::{self, accounts, bills, budgets, categories, savings_goals, transactions};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Typed access to the fields of one wire record
struct RecordReader<'a> {
    table: &'static str,
    record: &'a Record,
}

impl<'a> RecordReader<'a> {
    fn new(table: &'static str, record: &'a Record) -> Self {
        Self { table, record }
    }

    fn malformed(&self, field: &str, detail: impl std::fmt::Display) -> FintrackError {
        FintrackError::Wire(format!("{}.{}: {}", self.table, field, detail))
    }

    /// Present and not null
    fn value(&self, field: &str) -> Option<&'a Value> {
        self.record.get(field).filter(|v| !v.is_null())
    }

    fn id(&self) -> FintrackResult<i64> {
        self.value(tables::ID)
            .and_then(Value::as_i64)
            .ok_or_else(|| self.malformed(tables::ID, "missing or not an integer"))
    }

    fn string(&self, field: &str) -> String {
        match self.value(field) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    fn decimal(&self, field: &str) -> FintrackResult<f64> {
        match self.value(field) {
            None => Ok(0.0),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| self.malformed(field, "number out of range")),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(0.0),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.malformed(field, format!("'{}' is not a number", s))),
            Some(other) => Err(self.malformed(field, format!("{} is not a number", other))),
        }
    }

    fn money(&self, field: &str) -> FintrackResult<Money> {
        self.decimal(field).map(Money::from_decimal)
    }

    fn boolean(&self, field: &str, default: bool) -> FintrackResult<bool> {
        match self.value(field) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(self.malformed(field, format!("'{}' is not a boolean", s))),
            },
            Some(other) => Err(self.malformed(field, format!("{} is not a boolean", other))),
        }
    }

    /// Dates may arrive with a time part ("2025-03-01T00:00:00Z"); only the
    /// calendar date is kept.
    fn optional_date(&self, field: &str) -> FintrackResult<Option<NaiveDate>> {
        let raw = self.string(field);
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let date_part = raw.split('T').next().unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, DATE_FORMAT)
            .map(Some)
            .map_err(|_| self.malformed(field, format!("'{}' is not a date", raw)))
    }

    fn date(&self, field: &str) -> FintrackResult<NaiveDate> {
        self.optional_date(field)?
            .ok_or_else(|| self.malformed(field, "date is required"))
    }

    fn timestamp(&self, field: &str) -> FintrackResult<Option<DateTime<Utc>>> {
        let raw = self.string(field);
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Some(parsed.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Some(naive.and_utc()))
            .map_err(|_| self.malformed(field, format!("'{}' is not a timestamp", raw)))
    }

    /// Closed enumerations: blank means `default`, unknown text is rejected
    fn enumerated<T>(
        &self,
        field: &str,
        parse: fn(&str) -> Option<T>,
        default: Option<T>,
    ) -> FintrackResult<T> {
        let raw = self.string(field);
        if raw.trim().is_empty() {
            return default.ok_or_else(|| self.malformed(field, "value is required"));
        }
        parse(&raw).ok_or_else(|| self.malformed(field, format!("unknown value '{}'", raw)))
    }

    /// Name of the referenced record when the reference was expanded
    fn reference_name(&self, field: &str) -> String {
        match self.value(field) {
            Some(Value::Object(map)) => map
                .get(tables::NAME)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        }
    }
}

fn money_value(amount: Money) -> Value {
    Value::from(amount.to_decimal())
}

fn date_value(date: NaiveDate) -> Value {
    Value::String(date.format(DATE_FORMAT).to_string())
}

/// Add the record id, as required by `update_records`
pub fn with_id(mut record: Record, id: i64) -> Record {
    record.insert(tables::ID.to_string(), Value::from(id));
    record
}

fn plain_fields(names: &[&str]) -> Vec<FieldSelector> {
    names.iter().map(|n| FieldSelector::field(*n)).collect()
}

// --- accounts ---

pub fn account_fields() -> Vec<FieldSelector> {
    plain_fields(&[
        tables::NAME,
        accounts::TYPE,
        accounts::BALANCE,
        accounts::INSTITUTION,
        accounts::INTEREST_RATE,
        accounts::MINIMUM_BALANCE,
        accounts::IS_ACTIVE,
    ])
}

pub fn account_from_record(record: &Record) -> FintrackResult<Account> {
    let r = RecordReader::new(accounts::TABLE, record);
    Ok(Account {
        id: AccountId::new(r.id()?),
        name: r.string(tables::NAME),
        account_type: r.enumerated(
            accounts::TYPE,
            AccountType::parse,
            Some(AccountType::default()),
        )?,
        balance: r.money(accounts::BALANCE)?,
        institution: r.string(accounts::INSTITUTION),
        interest_rate: r.decimal(accounts::INTEREST_RATE)?,
        minimum_balance: r.money(accounts::MINIMUM_BALANCE)?,
        is_active: r.boolean(accounts::IS_ACTIVE, true)?,
    })
}

pub fn account_to_record(account: &NewAccount) -> Record {
    let mut record = Record::new();
    record.insert(tables::NAME.into(), Value::from(account.name.trim()));
    record.insert(accounts::TYPE.into(), Value::from(account.account_type.as_wire()));
    record.insert(accounts::BALANCE.into(), money_value(account.balance));
    record.insert(accounts::INSTITUTION.into(), Value::from(account.institution.as_str()));
    record.insert(accounts::INTEREST_RATE.into(), Value::from(account.interest_rate));
    record.insert(accounts::MINIMUM_BALANCE.into(), money_value(account.minimum_balance));
    record.insert(accounts::IS_ACTIVE.into(), Value::Bool(account.is_active));
    record
}

// --- budgets ---

pub fn budget_fields() -> Vec<FieldSelector> {
    let mut fields = plain_fields(&[
        tables::NAME,
        budgets::MONTH,
        budgets::MONTHLY_LIMIT,
        budgets::SPENT,
        budgets::ROLLOVER,
        budgets::DESCRIPTION,
        budgets::STATUS,
    ]);
    fields.push(FieldSelector::reference(budgets::CATEGORY, tables::NAME));
    fields
}

pub fn budget_from_record(record: &Record) -> FintrackResult<Budget> {
    let r = RecordReader::new(budgets::TABLE, record);
    let month_raw = r.string(budgets::MONTH);
    let month = BudgetMonth::parse(&month_raw).map_err(|e| r.malformed(budgets::MONTH, e))?;

    Ok(Budget {
        id: BudgetId::new(r.id()?),
        name: r.string(tables::NAME),
        category: r.reference_name(budgets::CATEGORY),
        month,
        monthly_limit: r.money(budgets::MONTHLY_LIMIT)?,
        spent: r.money(budgets::SPENT)?,
        rollover: r.money(budgets::ROLLOVER)?,
        description: r.string(budgets::DESCRIPTION),
        status: r.enumerated(
            budgets::STATUS,
            BudgetStatus::parse,
            Some(BudgetStatus::default()),
        )?,
    })
}

/// Fields written on create and update. `spent` and `rollover` are left to
/// [`budget_spent_record`] and the create defaults.
pub fn budget_to_record(budget: &NewBudget, category: CategoryId) -> Record {
    let mut record = Record::new();
    record.insert(tables::NAME.into(), Value::from(budget.display_name()));
    record.insert(budgets::MONTH.into(), Value::from(budget.month.to_string()));
    record.insert(budgets::MONTHLY_LIMIT.into(), money_value(budget.monthly_limit));
    record.insert(budgets::DESCRIPTION.into(), Value::from(budget.description.as_str()));
    record.insert(budgets::STATUS.into(), Value::from(budget.status.as_wire()));
    record.insert(budgets::CATEGORY.into(), Value::from(category.get()));
    record
}

pub fn budget_create_record(budget: &NewBudget, category: CategoryId) -> Record {
    let mut record = budget_to_record(budget, category);
    record.insert(budgets::SPENT.into(), money_value(Money::zero()));
    record.insert(budgets::ROLLOVER.into(), money_value(Money::zero()));
    record
}

pub fn budget_spent_record(id: BudgetId, spent: Money) -> Record {
    let mut record = Record::new();
    record.insert(budgets::SPENT.into(), money_value(spent));
    with_id(record, id.get())
}

// --- bills ---

pub fn bill_fields() -> Vec<FieldSelector> {
    plain_fields(&[
        tables::NAME,
        bills::TAGS,
        bills::DUE_DATE,
        bills::AMOUNT,
        bills::STATUS,
    ])
}

pub fn bill_from_record(record: &Record) -> FintrackResult<Bill> {
    let r = RecordReader::new(bills::TABLE, record);
    Ok(Bill {
        id: BillId::new(r.id()?),
        name: r.string(tables::NAME),
        tags: parse_tags(&r.string(bills::TAGS)),
        due_date: r.date(bills::DUE_DATE)?,
        amount: r.money(bills::AMOUNT)?,
        status: r.enumerated(bills::STATUS, BillStatus::parse, Some(BillStatus::default()))?,
    })
}

pub fn bill_to_record(bill: &NewBill) -> Record {
    let mut record = Record::new();
    record.insert(tables::NAME.into(), Value::from(bill.name.trim()));
    record.insert(bills::TAGS.into(), Value::from(join_tags(&bill.tags)));
    record.insert(bills::DUE_DATE.into(), date_value(bill.due_date));
    record.insert(bills::AMOUNT.into(), money_value(bill.amount));
    record.insert(bills::STATUS.into(), Value::from(bill.status.as_wire()));
    record
}

pub fn bill_status_record(id: BillId, status: BillStatus) -> Record {
    let mut record = Record::new();
    record.insert(bills::STATUS.into(), Value::from(status.as_wire()));
    with_id(record, id.get())
}

// --- transactions ---

pub fn transaction_fields() -> Vec<FieldSelector> {
    let mut fields = plain_fields(&[
        tables::NAME,
        transactions::AMOUNT,
        transactions::DATE,
        transactions::DESCRIPTION,
        transactions::NOTES,
        transactions::TYPE,
    ]);
    fields.push(FieldSelector::reference(transactions::CATEGORY, tables::NAME));
    fields
}

pub fn transaction_from_record(record: &Record) -> FintrackResult<Transaction> {
    let r = RecordReader::new(transactions::TABLE, record);
    Ok(Transaction {
        id: TransactionId::new(r.id()?),
        name: r.string(tables::NAME),
        amount: r.money(transactions::AMOUNT)?,
        date: r.date(transactions::DATE)?,
        description: r.string(transactions::DESCRIPTION),
        notes: r.string(transactions::NOTES),
        kind: r.enumerated(transactions::TYPE, TransactionKind::parse, None)?,
        category: r.reference_name(transactions::CATEGORY),
    })
}

pub fn transaction_to_record(txn: &NewTransaction, category: CategoryId) -> Record {
    let mut record = Record::new();
    record.insert(tables::NAME.into(), Value::from(txn.display_name()));
    record.insert(transactions::AMOUNT.into(), money_value(txn.amount));
    record.insert(transactions::DATE.into(), date_value(txn.date));
    record.insert(transactions::DESCRIPTION.into(), Value::from(txn.description.as_str()));
    record.insert(transactions::NOTES.into(), Value::from(txn.notes.as_str()));
    record.insert(transactions::TYPE.into(), Value::from(txn.kind.as_wire()));
    record.insert(transactions::CATEGORY.into(), Value::from(category.get()));
    record
}

// --- savings goals ---

pub fn goal_fields() -> Vec<FieldSelector> {
    plain_fields(&[
        tables::NAME,
        savings_goals::TARGET_AMOUNT,
        savings_goals::CURRENT_AMOUNT,
        savings_goals::DEADLINE,
        savings_goals::PRIORITY,
        savings_goals::TAGS,
        savings_goals::NOTE,
        tables::CREATED_ON,
    ])
}

pub fn goal_from_record(record: &Record) -> FintrackResult<SavingsGoal> {
    let r = RecordReader::new(savings_goals::TABLE, record);
    Ok(SavingsGoal {
        id: SavingsGoalId::new(r.id()?),
        name: r.string(tables::NAME),
        target_amount: r.money(savings_goals::TARGET_AMOUNT)?,
        current_amount: r.money(savings_goals::CURRENT_AMOUNT)?,
        deadline: r.optional_date(savings_goals::DEADLINE)?,
        priority: r.enumerated(
            savings_goals::PRIORITY,
            GoalPriority::parse,
            Some(GoalPriority::default()),
        )?,
        tags: parse_tags(&r.string(savings_goals::TAGS)),
        note: r.string(savings_goals::NOTE),
        created_at: r.timestamp(tables::CREATED_ON)?,
    })
}

/// Fields written on create and update; the current amount is only written
/// by [`goal_create_record`] and [`goal_amount_record`].
pub fn goal_to_record(goal: &NewSavingsGoal) -> Record {
    let mut record = Record::new();
    record.insert(tables::NAME.into(), Value::from(goal.name.trim()));
    record.insert(savings_goals::TARGET_AMOUNT.into(), money_value(goal.target_amount));
    record.insert(
        savings_goals::DEADLINE.into(),
        goal.deadline.map(date_value).unwrap_or(Value::Null),
    );
    record.insert(savings_goals::PRIORITY.into(), Value::from(goal.priority.as_wire()));
    record.insert(savings_goals::TAGS.into(), Value::from(join_tags(&goal.tags)));
    record.insert(savings_goals::NOTE.into(), Value::from(goal.note.as_str()));
    record
}

pub fn goal_create_record(goal: &NewSavingsGoal) -> Record {
    let mut record = goal_to_record(goal);
    record.insert(savings_goals::CURRENT_AMOUNT.into(), money_value(Money::zero()));
    record
}

pub fn goal_amount_record(id: SavingsGoalId, current_amount: Money) -> Record {
    let mut record = Record::new();
    record.insert(savings_goals::CURRENT_AMOUNT.into(), money_value(current_amount));
    with_id(record, id.get())
}

// --- categories ---

pub fn category_fields() -> Vec<FieldSelector> {
    plain_fields(&[
        tables::NAME,
        categories::COLOR,
        categories::ICON,
        categories::IS_CUSTOM,
    ])
}

pub fn category_from_record(record: &Record) -> FintrackResult<Category> {
    let r = RecordReader::new(categories::TABLE, record);
    Ok(Category {
        id: CategoryId::new(r.id()?),
        name: r.string(tables::NAME),
        color: r.string(categories::COLOR),
        icon: r.string(categories::ICON),
        is_custom: r.boolean(categories::IS_CUSTOM, false)?,
    })
}

pub fn category_to_record(category: &NewCategory) -> Record {
    let mut record = Record::new();
    record.insert(tables::NAME.into(), Value::from(category.name.trim()));
    record.insert(categories::COLOR.into(), Value::from(category.color.as_str()));
    record.insert(categories::ICON.into(), Value::from(category.icon.as_str()));
    record.insert(categories::IS_CUSTOM.into(), Value::Bool(category.is_custom));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test records must be objects"),
        }
    }

    #[test]
    fn test_account_from_record() {
        let account = account_from_record(&record(json!({
            "Id": 4,
            "Name": "Visa",
            "type_c": "credit_card",
            "balance_c": -250.4,
            "interestRate_c": "19.99",
        })))
        .unwrap();

        assert_eq!(account.id, AccountId::new(4));
        assert_eq!(account.account_type, AccountType::Credit);
        assert_eq!(account.balance, Money::from_cents(-25040));
        assert_eq!(account.interest_rate, 19.99);
        assert_eq!(account.minimum_balance, Money::zero());
        assert!(account.is_active);
    }

    #[test]
    fn test_unknown_account_type_rejected() {
        let err = account_from_record(&record(json!({
            "Id": 1, "Name": "Piggy", "type_c": "cash"
        })))
        .unwrap_err();
        assert!(matches!(err, FintrackError::Wire(_)));
        assert!(err.to_string().contains("type_c"));
    }

    #[test]
    fn test_budget_defaults_and_reference() {
        let budget = budget_from_record(&record(json!({
            "Id": 9,
            "Name": "Food Budget",
            "month_c": "2025-01",
            "monthlyLimit_c": 400,
            "category_c": {"Id": 2, "Name": "Food"}
        })))
        .unwrap();

        assert_eq!(budget.category, "Food");
        assert_eq!(budget.spent, Money::zero());
        assert_eq!(budget.status, BudgetStatus::Planned);
        assert_eq!(budget.month, BudgetMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn test_budget_bad_status_rejected() {
        let err = budget_from_record(&record(json!({
            "Id": 9, "Name": "Food Budget", "month_c": "2025-01", "status_c": "Archived"
        })))
        .unwrap_err();
        assert!(matches!(err, FintrackError::Wire(_)));
    }

    #[test]
    fn test_bill_date_with_time_part() {
        let bill = bill_from_record(&record(json!({
            "Id": 3,
            "Name": "Rent",
            "Tags": "housing, monthly",
            "due_date_c": "2025-05-01T00:00:00.000Z",
            "amount_c": 1200,
        })))
        .unwrap();

        assert_eq!(bill.due_date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(bill.tags, vec!["housing".to_string(), "monthly".to_string()]);
        assert_eq!(bill.status, BillStatus::Unpaid);
    }

    #[test]
    fn test_transaction_requires_type() {
        let err = transaction_from_record(&record(json!({
            "Id": 1, "Name": "Coffee", "amount_c": 4.5, "date_c": "2025-03-02"
        })))
        .unwrap_err();
        assert!(err.to_string().contains("type_c"));
    }

    #[test]
    fn test_goal_optional_fields() {
        let goal = goal_from_record(&record(json!({
            "Id": 5,
            "Name": "Trip",
            "targetAmount_c": 2000,
            "currentAmount_c": 150.25,
            "deadline_c": null,
            "CreatedOn": "2025-02-01T12:30:00Z",
        })))
        .unwrap();

        assert_eq!(goal.deadline, None);
        assert_eq!(goal.priority, GoalPriority::Medium);
        assert_eq!(goal.current_amount, Money::from_cents(15025));
        assert!(goal.created_at.is_some());
    }

    #[test]
    fn test_budget_record_writes_category_id() {
        let month = BudgetMonth::new(2025, 1).unwrap();
        let new = NewBudget::new("Food", month, Money::from_units(300));
        let rec = budget_create_record(&new, CategoryId::new(2));

        assert_eq!(rec["Name"], json!("Food Budget"));
        assert_eq!(rec["category_c"], json!(2));
        assert_eq!(rec["month_c"], json!("2025-01"));
        assert_eq!(rec["monthlyLimit_c"], json!(300.0));
        assert_eq!(rec["spent_c"], json!(0.0));
    }

    #[test]
    fn test_partial_update_records_carry_id() {
        let rec = goal_amount_record(SavingsGoalId::new(7), Money::from_units(110));
        assert_eq!(rec.len(), 2);
        assert_eq!(rec["Id"], json!(7));
        assert_eq!(rec["currentAmount_c"], json!(110.0));
    }
}
