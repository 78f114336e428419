//! Table and field names used by the record service
//!
//! Custom fields carry a `_c` suffix. Nothing outside `storage` should need
//! these names.

/// Primary key present on every record
pub const ID: &str = "Id";
/// Display name present on every record
pub const NAME: &str = "Name";
/// Timestamps maintained by the record service
pub const CREATED_ON: &str = "CreatedOn";
pub const MODIFIED_ON: &str = "ModifiedOn";

pub mod accounts {
    pub const TABLE: &str = "accounts_c";
    pub const TYPE: &str = "type_c";
    pub const BALANCE: &str = "balance_c";
    pub const INSTITUTION: &str = "institution_c";
    pub const INTEREST_RATE: &str = "interestRate_c";
    pub const MINIMUM_BALANCE: &str = "minimumBalance_c";
    pub const IS_ACTIVE: &str = "isActive_c";
}

pub mod budgets {
    pub const TABLE: &str = "Budget_c";
    pub const MONTH: &str = "month_c";
    pub const MONTHLY_LIMIT: &str = "monthlyLimit_c";
    pub const SPENT: &str = "spent_c";
    pub const ROLLOVER: &str = "rollover_c";
    pub const DESCRIPTION: &str = "description_c";
    pub const STATUS: &str = "status_c";
    pub const CATEGORY: &str = "category_c";
}

pub mod bills {
    pub const TABLE: &str = "bills_c";
    pub const TAGS: &str = "Tags";
    pub const DUE_DATE: &str = "due_date_c";
    pub const AMOUNT: &str = "amount_c";
    pub const STATUS: &str = "status_c";
}

pub mod transactions {
    pub const TABLE: &str = "Transaction_c";
    pub const AMOUNT: &str = "amount_c";
    pub const DATE: &str = "date_c";
    pub const DESCRIPTION: &str = "description_c";
    pub const NOTES: &str = "notes_c";
    pub const TYPE: &str = "type_c";
    pub const CATEGORY: &str = "category_c";
}

pub mod savings_goals {
    pub const TABLE: &str = "SavingsGoal_c";
    pub const TARGET_AMOUNT: &str = "targetAmount_c";
    pub const CURRENT_AMOUNT: &str = "currentAmount_c";
    pub const DEADLINE: &str = "deadline_c";
    pub const PRIORITY: &str = "priority_c";
    pub const TAGS: &str = "Tags";
    pub const NOTE: &str = "note_c";
}

pub mod categories {
    pub const TABLE: &str = "Category_c";
    pub const COLOR: &str = "color_c";
    pub const ICON: &str = "icon_c";
    pub const IS_CUSTOM: &str = "isCustom_c";
}

/// Every table the record store knows about
pub const ALL_TABLES: &[&str] = &[
    accounts::TABLE,
    budgets::TABLE,
    bills::TABLE,
    transactions::TABLE,
    savings_goals::TABLE,
    categories::TABLE,
];

/// The table a reference field points into, if `field` on `table` is one
pub fn reference_target(table: &str, field: &str) -> Option<&'static str> {
    match (table, field) {
        (budgets::TABLE, budgets::CATEGORY) => Some(categories::TABLE),
        (transactions::TABLE, transactions::CATEGORY) => Some(categories::TABLE),
        _ => None,
    }
}

pub fn is_known_table(table: &str) -> bool {
    ALL_TABLES.contains(&table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_references() {
        assert_eq!(
            reference_target("Budget_c", "category_c"),
            Some("Category_c")
        );
        assert_eq!(
            reference_target("Transaction_c", "category_c"),
            Some("Category_c")
        );
        assert_eq!(reference_target("bills_c", "category_c"), None);
    }

    #[test]
    fn test_known_tables() {
        assert!(is_known_table("SavingsGoal_c"));
        assert!(!is_known_table("payees_c"));
    }
}
