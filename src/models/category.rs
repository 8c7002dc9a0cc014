//! Category and CategoryGroup models
//!
//! These are the visible slice of the budget's categories as fetched for a
//! single run. They are built once by the catalog and never modified.

use std::fmt;

use super::ids::{CategoryGroupId, CategoryId};
use super::money::Money;

/// A budget category with its figures for the current month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Service-assigned identifier
    pub id: CategoryId,

    /// Display name; joins template entries to categories
    pub name: String,

    /// Amount assigned this month
    pub budgeted: Money,

    /// Spending and inflows this month
    pub activity: Money,

    /// Available balance
    pub balance: Money,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A group of visible categories (e.g., "Bills", "Wants")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub id: CategoryGroupId,
    pub name: String,
    pub categories: Vec<Category>,
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
