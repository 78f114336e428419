//! Category service
//!
//! Categories are looked up by name when budgets and transactions are
//! written. [`CategoryResolver`] is that lookup; [`CategoryService`] is the
//! CRUD surface plus seeding of the default set.

use tracing::{debug, info};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{default_categories, Category, CategoryId, NewCategory};
use crate::storage::mapping::{category_fields, category_from_record, category_to_record, with_id};
use crate::storage::tables::{categories, NAME};
use crate::storage::{Condition, FetchQuery, FieldSelector, RecordClient, SortDirection};

use super::records::{create_one, delete_one, fetch_all, fetch_by_id, update_one};

/// Resolves category names to record ids and back
pub struct CategoryResolver<'a> {
    client: &'a dyn RecordClient,
}

impl<'a> CategoryResolver<'a> {
    pub fn new(client: &'a dyn RecordClient) -> Self {
        Self { client }
    }

    /// Id of the category with exactly this name
    pub fn id_for(&self, name: &str) -> FintrackResult<CategoryId> {
        let name = name.trim();
        let query = FetchQuery::new()
            .select(vec![FieldSelector::field(NAME)])
            .filter(Condition::equal_to(NAME, name));
        let found = fetch_all(
            self.client,
            categories::TABLE,
            &query,
            "look up category",
            category_from_record,
        )?;

        match found.first() {
            Some(category) => {
                debug!(name, id = category.id.get(), "resolved category");
                Ok(category.id)
            }
            None => Err(FintrackError::category_not_found(name)),
        }
    }

    pub fn name_for(&self, id: CategoryId) -> FintrackResult<String> {
        fetch_by_id(
            self.client,
            categories::TABLE,
            id.get(),
            &category_fields(),
            "get category",
            category_from_record,
        )?
        .map(|c| c.name)
        .ok_or_else(|| FintrackError::category_not_found(id.to_string()))
    }
}

/// Service for category management
pub struct CategoryService<'a> {
    client: &'a dyn RecordClient,
}

impl<'a> CategoryService<'a> {
    pub fn new(client: &'a dyn RecordClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> FintrackResult<Vec<Category>> {
        let query = FetchQuery::new()
            .select(category_fields())
            .order(NAME, SortDirection::Asc);
        fetch_all(
            self.client,
            categories::TABLE,
            &query,
            "list categories",
            category_from_record,
        )
    }

    pub fn get(&self, id: CategoryId) -> FintrackResult<Category> {
        fetch_by_id(
            self.client,
            categories::TABLE,
            id.get(),
            &category_fields(),
            "get category",
            category_from_record,
        )?
        .ok_or_else(|| FintrackError::category_not_found(id.to_string()))
    }

    /// Find a category by exact name
    pub fn find_by_name(&self, name: &str) -> FintrackResult<Option<Category>> {
        let query = FetchQuery::new()
            .select(category_fields())
            .filter(Condition::equal_to(NAME, name.trim()));
        Ok(fetch_all(
            self.client,
            categories::TABLE,
            &query,
            "find category",
            category_from_record,
        )?
        .into_iter()
        .next())
    }

    /// Find a category by name or by id ("Food", "cat-3", "3")
    pub fn find(&self, identifier: &str) -> FintrackResult<Category> {
        if let Some(category) = self.find_by_name(identifier)? {
            return Ok(category);
        }
        match identifier.parse::<CategoryId>() {
            Ok(id) => self.get(id),
            Err(_) => Err(FintrackError::category_not_found(identifier)),
        }
    }

    pub fn create(&self, category: &NewCategory) -> FintrackResult<Category> {
        category
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        if self.find_by_name(&category.name)?.is_some() {
            return Err(FintrackError::Validation(format!(
                "Category '{}' already exists",
                category.name.trim()
            )));
        }

        let created = create_one(
            self.client,
            categories::TABLE,
            category_to_record(category),
            "create category",
        )?;
        category_from_record(&created)
    }

    pub fn update(&self, id: CategoryId, category: &NewCategory) -> FintrackResult<Category> {
        category
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;
        self.get(id)?;

        if let Some(existing) = self.find_by_name(&category.name)? {
            if existing.id != id {
                return Err(FintrackError::Validation(format!(
                    "Category '{}' already exists",
                    category.name.trim()
                )));
            }
        }

        let updated = update_one(
            self.client,
            categories::TABLE,
            with_id(category_to_record(category), id.get()),
            "update category",
        )?;
        category_from_record(&updated)
    }

    pub fn delete(&self, id: CategoryId) -> FintrackResult<Category> {
        let category = self.get(id)?;
        delete_one(self.client, categories::TABLE, id.get(), "delete category")?;
        Ok(category)
    }

    /// Create whichever built-in categories are missing, in one batch
    pub fn seed_defaults(&self) -> FintrackResult<Vec<Category>> {
        let existing: Vec<String> = self
            .list()?
            .into_iter()
            .map(|c| c.name.to_lowercase())
            .collect();

        let missing: Vec<_> = default_categories()
            .into_iter()
            .filter(|c| !existing.contains(&c.name.to_lowercase()))
            .map(|c| category_to_record(&c))
            .collect();

        if missing.is_empty() {
            return Ok(Vec::new());
        }

        let created = self
            .client
            .create_records(categories::TABLE, missing)?
            .into_records("seed categories")?;
        info!(count = created.len(), "seeded default categories");
        created.iter().map(category_from_record).collect()
    }
}
