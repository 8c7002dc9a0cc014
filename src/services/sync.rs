//! Pushing allocations back to the service
//!
//! Each allocation line becomes one update, issued in template order and
//! waited on before the next. A failed line is recorded and the remaining
//! lines are still attempted; updates that already succeeded stay applied.

use tracing::{info, warn};

use crate::error::{TemplateError, TemplateResult};
use crate::models::{Allocation, CategoryId, Money};
use crate::services::catalog::CategoryCatalog;

/// Something that can set a category's budgeted amount
pub trait CategoryUpdater {
    fn update_budgeted(&self, category: CategoryId, amount: Money) -> TemplateResult<()>;
}

/// The result of dispatching one allocation line
#[derive(Debug)]
pub struct SyncOutcome {
    pub category_name: String,
    pub amount: Money,
    pub result: TemplateResult<()>,
}

impl SyncOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-line results of a dispatch
#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Applies allocations to categories found in the catalog
pub struct SyncAdapter<'a, U: CategoryUpdater> {
    catalog: &'a CategoryCatalog,
    updater: &'a U,
}

impl<'a, U: CategoryUpdater> SyncAdapter<'a, U> {
    pub fn new(catalog: &'a CategoryCatalog, updater: &'a U) -> Self {
        Self { catalog, updater }
    }

    /// Set one category's budgeted amount
    ///
    /// Fails with [`TemplateError::UnknownCategory`] without contacting the
    /// service if the name is not in the catalog.
    pub fn apply(&self, category_name: &str, amount: Money) -> TemplateResult<()> {
        let id = self
            .catalog
            .category_id(category_name)
            .ok_or_else(|| TemplateError::UnknownCategory(category_name.to_string()))?;

        self.updater.update_budgeted(id, amount)
    }

    /// Dispatch every line of an allocation, continuing past failures
    pub fn apply_all(&self, allocation: &Allocation) -> SyncReport {
        let mut report = SyncReport::default();

        for line in allocation.lines() {
            let result = self.apply(&line.category_name, line.amount);
            match &result {
                Ok(()) => info!(category = %line.category_name, amount = %line.amount, "updated category"),
                Err(e) => warn!(category = %line.category_name, error = %e, "category update failed"),
            }

            report.outcomes.push(SyncOutcome {
                category_name: line.category_name.clone(),
                amount: line.amount,
                result,
            });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Template, TemplateEntry};
    use crate::services::allocation::resolve;
    use crate::services::catalog::tests::{group, record};
    use std::cell::RefCell;

    /// Records updates and fails for selected categories
    #[derive(Default)]
    struct FakeUpdater {
        calls: RefCell<Vec<(CategoryId, Money)>>,
        fail_for: Option<CategoryId>,
    }

    impl CategoryUpdater for FakeUpdater {
        fn update_budgeted(&self, category: CategoryId, amount: Money) -> TemplateResult<()> {
            self.calls.borrow_mut().push((category, amount));
            if self.fail_for == Some(category) {
                return Err(TemplateError::Service {
                    status: 500,
                    name: "internal_server_error".into(),
                    detail: "boom".into(),
                });
            }
            Ok(())
        }
    }

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::from_records(vec![group(
            "Bills",
            vec![record("Rent", false), record("Fun", false), record("Save", false)],
        )])
        .unwrap()
    }

    fn allocation(names: &[&str]) -> Allocation {
        let entries: Vec<_> = names
            .iter()
            .map(|n| TemplateEntry::fixed(*n, Money::from_units(10)))
            .collect();
        resolve(&Template::from_entries(&entries), Money::from_units(100)).unwrap()
    }

    #[test]
    fn test_apply_looks_up_identifier() {
        let catalog = catalog();
        let updater = FakeUpdater::default();
        let adapter = SyncAdapter::new(&catalog, &updater);

        adapter.apply("Rent", Money::from_units(5)).unwrap();

        let calls = updater.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (catalog.category_id("Rent").unwrap(), Money::from_units(5)));
    }

    #[test]
    fn test_unknown_category_not_dispatched() {
        let catalog = catalog();
        let updater = FakeUpdater::default();
        let adapter = SyncAdapter::new(&catalog, &updater);

        let err = adapter.apply("Nope", Money::from_units(5)).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownCategory(ref n) if n == "Nope"));
        assert!(updater.calls.borrow().is_empty());
    }

    #[test]
    fn test_apply_all_continues_after_failures() {
        let catalog = catalog();
        let updater = FakeUpdater {
            fail_for: catalog.category_id("Fun"),
            ..Default::default()
        };
        let adapter = SyncAdapter::new(&catalog, &updater);

        let report = adapter.apply_all(&allocation(&["Rent", "Missing", "Fun", "Save"]));

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.failure_count(), 2);
        assert!(!report.is_success());

        let failed: Vec<_> = report.failed().map(|o| o.category_name.as_str()).collect();
        assert_eq!(failed, vec!["Missing", "Fun"]);

        // Rent, Fun and Save reached the service in order; Missing never did
        let calls = updater.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].0, catalog.category_id("Save").unwrap());
    }

    #[test]
    fn test_apply_all_success() {
        let catalog = catalog();
        let updater = FakeUpdater::default();
        let report = SyncAdapter::new(&catalog, &updater).apply_all(&allocation(&["Rent", "Save"]));

        assert!(report.is_success());
        assert_eq!(report.succeeded().count(), 2);
    }
}
