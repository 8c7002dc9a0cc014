//! Template files
//!
//! Loading a template from disk and seeding a new one from the budget's
//! visible categories.

use std::path::Path;

use super::file_io::write_new;
use crate::error::{TemplateError, TemplateResult};
use crate::models::{Money, Template, TemplateEntry};
use crate::services::catalog::CategoryCatalog;

const TEMPLATE_HEADER: &str = "\
# ynab-template allocation template
#
# Each entry needs a category, a type (fixed or percent), and a value.
# fixed:   value is an amount of money
# percent: value is a percentage of the month's total
";

/// Load and parse a template file
///
/// Entries are not validated until the template is resolved.
pub fn load_template(path: &Path) -> TemplateResult<Template> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        TemplateError::Io(format!("Failed to read template {}: {}", path.display(), e))
    })?;

    Template::from_yaml_str(&contents)
}

/// A template listing every visible category with a fixed zero amount
pub fn template_from_catalog(catalog: &CategoryCatalog) -> Template {
    let entries: Vec<TemplateEntry> = catalog
        .categories()
        .map(|category| TemplateEntry::fixed(category.name.clone(), Money::zero()))
        .collect();

    Template::from_entries(&entries)
}

/// Write a fresh template for the catalog, refusing to overwrite
pub fn create_template(path: &Path, catalog: &CategoryCatalog) -> TemplateResult<Template> {
    let template = template_from_catalog(catalog);
    let contents = format!("{}\n{}", TEMPLATE_HEADER, template.to_yaml_string()?);
    write_new(path, &contents)?;

    Ok(template)
}
