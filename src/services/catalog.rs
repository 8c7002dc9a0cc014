//! Category catalog
//!
//! Builds the read-only snapshot of visible categories for a run from the
//! service's category groups, and indexes them by display name.

use std::collections::HashMap;

use tracing::debug;

use crate::api::types::{CategoryGroupRecord, CategoryRecord};
use crate::error::{TemplateError, TemplateResult};
use crate::models::{Category, CategoryGroup, CategoryId};

/// Visible categories grouped as the service orders them
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    groups: Vec<CategoryGroup>,
    index: HashMap<String, CategoryId>,
}

impl CategoryCatalog {
    /// Build the catalog from raw service records
    ///
    /// Hidden and deleted categories are dropped first, then any group left
    /// without categories (or itself deleted). Two visible categories with the
    /// same name are rejected, since names are how templates refer to them.
    pub fn from_records(records: Vec<CategoryGroupRecord>) -> TemplateResult<Self> {
        let mut groups = Vec::with_capacity(records.len());
        let mut index = HashMap::new();

        for record in records {
            if record.deleted {
                continue;
            }

            let categories: Vec<Category> = record
                .categories
                .into_iter()
                .filter(is_visible)
                .map(|c| Category {
                    id: c.id,
                    name: c.name,
                    budgeted: c.budgeted,
                    activity: c.activity,
                    balance: c.balance,
                })
                .collect();

            if categories.is_empty() {
                debug!(group = %record.name, "skipping group with no visible categories");
                continue;
            }

            for category in &categories {
                if index.insert(category.name.clone(), category.id).is_some() {
                    return Err(TemplateError::DuplicateCategory(category.name.clone()));
                }
            }

            groups.push(CategoryGroup {
                id: record.id,
                name: record.name,
                categories,
            });
        }

        Ok(Self { groups, index })
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// All visible categories in group order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.groups.iter().flat_map(|g| g.categories.iter())
    }

    /// Look up a category's identifier by display name
    pub fn category_id(&self, name: &str) -> Option<CategoryId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn is_visible(category: &CategoryRecord) -> bool {
    !category.hidden && !category.deleted
}
