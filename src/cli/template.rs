//! Template mode handlers
//!
//! One handler per mode of the command line: create, show, check, and
//! compute (optionally dispatching).

use std::path::Path;

use tracing::debug;

use super::session::{ConnectOptions, Session};
use crate::display::{
    format_allocation, format_category_budget, format_sync_report, format_unknown_categories,
};
use crate::error::{TemplateError, TemplateResult};
use crate::models::Money;
use crate::services::allocation::resolve;
use crate::services::sync::SyncAdapter;
use crate::storage::{create_template, load_template};

/// Write an empty template listing every visible category
pub fn handle_create(path: &Path, options: &ConnectOptions) -> TemplateResult<()> {
    // Refuse before touching the network
    if path.exists() {
        return Err(TemplateError::FileExists(path.display().to_string()));
    }

    let session = Session::connect(options)?;
    let template = create_template(path, &session.catalog)?;

    println!(
        "Created template {} with {} categories.",
        path.display(),
        template.len()
    );
    Ok(())
}

/// Print this month's figures for every visible category
pub fn handle_show(options: &ConnectOptions) -> TemplateResult<()> {
    let session = Session::connect(options)?;
    print!("{}", format_category_budget(&session.catalog));
    Ok(())
}

/// Resolve a template against a caller-supplied total; never dispatches
pub fn handle_check(path: &Path, amount: &str) -> TemplateResult<()> {
    let total = parse_total(amount)?;
    let template = load_template(path)?;
    let allocation = resolve(&template, total)?;

    print!("{}", format_allocation(&allocation));
    Ok(())
}

/// Resolve a template against this month's "to be budgeted" figure and
/// optionally push the amounts to the service
pub fn handle_compute(path: &Path, update: bool, options: &ConnectOptions) -> TemplateResult<()> {
    let template = load_template(path)?;
    let session = Session::connect(options)?;

    let month = Session::current_month();
    let total = session.to_be_budgeted(month)?;
    debug!(month = %month.format("%Y-%m"), total = %total, "to be budgeted");

    let allocation = resolve(&template, total)?;
    print!("{}", format_allocation(&allocation));

    if let Some(warning) = format_unknown_categories(&allocation, &session.catalog) {
        println!();
        print!("{}", warning);
    }

    if !update {
        return Ok(());
    }

    println!();
    println!("Updating categories for {}:", month.format("%B %Y"));

    let updater = session.client.month_updater(session.budget, month);
    let report = SyncAdapter::new(&session.catalog, &updater).apply_all(&allocation);
    print!("{}", format_sync_report(&report));

    if report.is_success() {
        Ok(())
    } else {
        Err(TemplateError::SyncFailed(report.failure_count()))
    }
}

/// Parse a total budget amount from the command line
pub fn parse_total(amount: &str) -> TemplateResult<Money> {
    let total = Money::parse(amount).map_err(|e| TemplateError::InvalidAmount(e.to_string()))?;

    if total.is_negative() {
        return Err(TemplateError::InvalidAmount(format!(
            "total budget must not be negative: {}",
            amount
        )));
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_total() {
        assert_eq!(parse_total("2000").unwrap(), Money::from_units(2000));
        assert!(parse_total("$1,000").is_err());
        assert!(matches!(
            parse_total("-5").unwrap_err(),
            TemplateError::InvalidAmount(_)
        ));
    }

    #[test]
    fn test_check_reports_format_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("template.yaml");
        std::fs::write(&path, "categories:\n  - {category: Rent, type: weekly, value: 5}\n")
            .unwrap();

        let err = handle_check(&path, "100").unwrap_err();
        assert!(err.is_template_format());
    }

    #[test]
    fn test_create_refuses_existing_path_offline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("template.yaml");
        std::fs::write(&path, "categories: []\n").unwrap();

        let err = handle_create(&path, &ConnectOptions::default()).unwrap_err();
        assert!(matches!(err, TemplateError::FileExists(_)));
    }
}
