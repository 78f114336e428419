//! Account service
//!
//! CRUD over the accounts table plus the account totals report.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Account, AccountId, NewAccount};
use crate::reports::AccountSummary;
use crate::storage::mapping::{account_fields, account_from_record, account_to_record, with_id};
use crate::storage::tables::{accounts, CREATED_ON, ID, NAME};
use crate::storage::{Condition, FetchQuery, RecordClient, SortDirection};

use super::records::{create_one, delete_one, fetch_all, fetch_by_id, update_one};

/// Service for account management
pub struct AccountService<'a> {
    client: &'a dyn RecordClient,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(client: &'a dyn RecordClient) -> Self {
        Self { client }
    }

    /// All accounts, newest first
    pub fn list(&self) -> FintrackResult<Vec<Account>> {
        let query = FetchQuery::new()
            .select(account_fields())
            .order(CREATED_ON, SortDirection::Desc)
            .order(ID, SortDirection::Desc);
        fetch_all(
            self.client,
            accounts::TABLE,
            &query,
            "list accounts",
            account_from_record,
        )
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> FintrackResult<Account> {
        fetch_by_id(
            self.client,
            accounts::TABLE,
            id.get(),
            &account_fields(),
            "get account",
            account_from_record,
        )?
        .ok_or_else(|| FintrackError::account_not_found(id.to_string()))
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> FintrackResult<Account> {
        let query = FetchQuery::new()
            .select(account_fields())
            .filter(Condition::equal_to(NAME, identifier.trim()));
        let by_name = fetch_all(
            self.client,
            accounts::TABLE,
            &query,
            "find account",
            account_from_record,
        )?;
        if let Some(account) = by_name.into_iter().next() {
            return Ok(account);
        }

        match identifier.parse::<AccountId>() {
            Ok(id) => self.get(id),
            Err(_) => Err(FintrackError::account_not_found(identifier)),
        }
    }

    /// Create a new account
    pub fn create(&self, account: &NewAccount) -> FintrackResult<Account> {
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let created = create_one(
            self.client,
            accounts::TABLE,
            account_to_record(account),
            "create account",
        )?;
        account_from_record(&created)
    }

    /// Replace an account's fields
    pub fn update(&self, id: AccountId, account: &NewAccount) -> FintrackResult<Account> {
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        self.get(id)?;

        let updated = update_one(
            self.client,
            accounts::TABLE,
            with_id(account_to_record(account), id.get()),
            "update account",
        )?;
        account_from_record(&updated)
    }

    /// Delete an account, returning what was removed
    pub fn delete(&self, id: AccountId) -> FintrackResult<Account> {
        let account = self.get(id)?;
        delete_one(self.client, accounts::TABLE, id.get(), "delete account")?;
        Ok(account)
    }

    /// Totals across every account
    pub fn summary(&self) -> FintrackResult<AccountSummary> {
        Ok(AccountSummary::from_accounts(&self.list()?))
    }
}
