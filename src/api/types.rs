//! Wire types for the YNAB API
//!
//! Only the fields this tool reads are declared; everything else in the
//! responses is ignored.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetId, CategoryGroupId, CategoryId, Money};

/// Successful responses wrap their payload in `data`
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Error responses carry an `error` object
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub name: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Deserialize)]
pub struct BudgetSummaryResponse {
    pub budgets: Vec<BudgetSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BudgetSummary {
    pub id: BudgetId,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    pub category_groups: Vec<CategoryGroupRecord>,
}

/// A category group as the service reports it, hidden categories included
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryGroupRecord {
    pub id: CategoryGroupId,
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub deleted: bool,
    pub budgeted: Money,
    pub activity: Money,
    pub balance: Money,
}

#[derive(Debug, Deserialize)]
pub struct MonthsResponse {
    pub months: Vec<MonthSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthSummary {
    /// First day of the month, `YYYY-MM-DD`
    pub month: String,
    pub to_be_budgeted: Money,
}

/// Body for `PATCH .../months/{month}/categories/{id}`
#[derive(Debug, Serialize)]
pub struct SaveMonthCategoryWrapper {
    pub category: SaveMonthCategory,
}

#[derive(Debug, Serialize)]
pub struct SaveMonthCategory {
    pub budgeted: Money,
}
