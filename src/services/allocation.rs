//! Template resolution
//!
//! Turns a template and a month's total into concrete per-category amounts.
//! Resolution is a pure function of its inputs: it never touches the
//! catalog or the service.

use tracing::{debug, info};

use crate::error::{TemplateError, TemplateResult};
use crate::models::{Allocation, AllocationLine, BudgetStatus, Money, Template};

/// Resolve a template against a total budget
///
/// Every entry is validated before any amount is computed, so a malformed
/// entry anywhere in the template fails the whole resolution. The running
/// remainder starts at the total truncated to whole units and each entry's
/// amount is charged against it in template order. Going over budget is
/// reported through [`Allocation::status`], not as an error.
pub fn resolve(template: &Template, total_budget: Money) -> TemplateResult<Allocation> {
    let entries = template.entries()?;
    let mut allocation = Allocation::new(total_budget);

    for entry in entries {
        let amount = entry
            .rule
            .amount_for(total_budget)
            .ok_or_else(|| TemplateError::out_of_range(&entry.category_name))?;
        debug!(
            category = %entry.category_name,
            rule = %entry.rule,
            amount = %amount,
            "resolved template entry"
        );

        allocation.push(AllocationLine {
            category_name: entry.category_name,
            rule: entry.rule,
            amount,
        })?;
    }

    match allocation.status() {
        BudgetStatus::Over { by } => info!(total = %total_budget, over = %by, "template is over budget"),
        BudgetStatus::Meets { remaining } => {
            info!(total = %total_budget, remaining = %remaining, "template meets budget")
        }
    }

    Ok(allocation)
}
