//! Core data models for ynab-template
//!
//! This module contains the money type, service identifiers, the visible
//! category snapshot, allocation templates, and computed allocations.

pub mod allocation;
pub mod category;
pub mod ids;
pub mod money;
pub mod template;

pub use allocation::{Allocation, AllocationLine, BudgetStatus};
pub use category::{Category, CategoryGroup};
pub use ids::{BudgetId, CategoryGroupId, CategoryId};
pub use money::Money;
pub use template::{AllocationRule, RuleKind, Template, TemplateEntry};
