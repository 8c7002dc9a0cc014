//! Allocation display formatting
//!
//! Formats resolved templates and dispatch results for terminal output.

use crate::models::{Allocation, BudgetStatus};
use crate::services::catalog::CategoryCatalog;
use crate::services::sync::SyncReport;

/// Format an allocation as a table followed by the budget summary
pub fn format_allocation(allocation: &Allocation) -> String {
    let mut output = String::new();

    if allocation.is_empty() {
        output.push_str("Template has no categories.\n");
    } else {
        let name_width = allocation
            .lines()
            .iter()
            .map(|l| l.category_name.len())
            .max()
            .unwrap_or(8)
            .max(8);

        output.push_str(&format!(
            "{:<width$}  {:<16}  {:>12}\n",
            "Category",
            "Rule",
            "Amount",
            width = name_width
        ));
        output.push_str(&format!(
            "{:-<width$}  {:-<16}  {:->12}\n",
            "",
            "",
            "",
            width = name_width
        ));

        for line in allocation.lines() {
            output.push_str(&format!(
                "{:<width$}  {:<16}  {:>12}\n",
                line.category_name,
                line.rule.to_string(),
                line.amount,
                width = name_width
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!("Total:     {:>12}\n", allocation.total()));
    output.push_str(&format!("Allocated: {:>12}\n", allocation.allocated()));
    output.push('\n');
    output.push_str(&format_status(allocation.status()));
    output.push('\n');

    output
}

/// One-line budget verdict
pub fn format_status(status: BudgetStatus) -> String {
    match status {
        BudgetStatus::Meets { .. } => format!("Template {}", status),
        BudgetStatus::Over { .. } => format!("Warning: template is {}", status),
    }
}

/// Warn about template entries the budget has no visible category for
pub fn format_unknown_categories(
    allocation: &Allocation,
    catalog: &CategoryCatalog,
) -> Option<String> {
    let unknown: Vec<&str> = allocation
        .lines()
        .iter()
        .map(|l| l.category_name.as_str())
        .filter(|name| !catalog.contains(name))
        .collect();

    if unknown.is_empty() {
        return None;
    }

    let mut output = String::from("Categories not found in budget:\n");
    for name in unknown {
        output.push_str(&format!("  - {}\n", name));
    }
    Some(output)
}

/// Summarize a dispatch
pub fn format_sync_report(report: &SyncReport) -> String {
    let mut output = String::new();

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => output.push_str(&format!(
                "  updated {}: {}\n",
                outcome.category_name, outcome.amount
            )),
            Err(e) => output.push_str(&format!(
                "  FAILED  {}: {}\n",
                outcome.category_name, e
            )),
        }
    }

    output.push_str(&format!(
        "{} of {} category update(s) applied.\n",
        report.succeeded().count(),
        report.outcomes.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use crate::models::{Money, Template, TemplateEntry};
    use crate::services::allocation::resolve;
    use crate::services::catalog::tests::{group, record};
    use crate::services::sync::SyncOutcome;

    fn allocation(total: i64) -> Allocation {
        let entries = vec![
            TemplateEntry::fixed("Rent", Money::from_units(1200)),
            TemplateEntry::percent("Fun", 10.0),
        ];
        resolve(&Template::from_entries(&entries), Money::from_units(total)).unwrap()
    }

    #[test]
    fn test_format_meets_budget() {
        let output = format_allocation(&allocation(2000));
        assert!(output.contains("Rent"));
        assert!(output.contains("10%"));
        assert!(output.contains("200.00"));
        assert!(output.contains("Template meets budget with 600.00 remaining"));
    }

    #[test]
    fn test_format_over_budget() {
        let output = format_allocation(&allocation(1000));
        assert!(output.contains("Warning: template is over budget by 300.00"));
    }

    #[test]
    fn test_format_empty() {
        let allocation =
            resolve(&Template::from_entries(&[]), Money::from_units(500)).unwrap();
        let output = format_allocation(&allocation);
        assert!(output.contains("Template has no categories."));
        assert!(output.contains("meets budget with 500.00 remaining"));
    }

    #[test]
    fn test_unknown_categories() {
        let catalog =
            CategoryCatalog::from_records(vec![group("Bills", vec![record("Rent", false)])])
                .unwrap();
        let output = format_unknown_categories(&allocation(2000), &catalog).unwrap();
        assert!(output.contains("  - Fun"));
        assert!(!output.contains("Rent"));
    }

    #[test]
    fn test_sync_report() {
        let report = SyncReport {
            outcomes: vec![
                SyncOutcome {
                    category_name: "Rent".into(),
                    amount: Money::from_units(1200),
                    result: Ok(()),
                },
                SyncOutcome {
                    category_name: "Fun".into(),
                    amount: Money::from_units(200),
                    result: Err(TemplateError::UnknownCategory("Fun".into())),
                },
            ],
        };

        let output = format_sync_report(&report);
        assert!(output.contains("updated Rent: 1200.00"));
        assert!(output.contains("FAILED  Fun: Unknown category: Fun"));
        assert!(output.contains("1 of 2 category update(s) applied."));
    }
}
