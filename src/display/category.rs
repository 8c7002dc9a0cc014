//! Category display formatting
//!
//! Formats the catalog's current month figures for terminal output.

use crate::services::catalog::CategoryCatalog;

/// Format budgeted/activity/balance for every visible category, by group
pub fn format_category_budget(catalog: &CategoryCatalog) -> String {
    if catalog.is_empty() {
        return "No visible categories found.".to_string();
    }

    let name_width = catalog
        .categories()
        .map(|c| c.name.len() + 2)
        .chain(catalog.groups().iter().map(|g| g.name.len()))
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}\n",
        "Category",
        "Budgeted",
        "Activity",
        "Balance",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for (i, group) in catalog.groups().iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", group.name));

        for category in &group.categories {
            output.push_str(&format!(
                "  {:<width$}  {:>12}  {:>12}  {:>12}\n",
                category.name,
                category.budgeted,
                category.activity,
                category.balance,
                width = name_width - 2
            ));
        }
    }

    output
}
