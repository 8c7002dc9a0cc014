//! File storage for ynab-template
//!
//! Nothing is persisted between runs; this layer only reads configuration
//! and template files and writes newly created templates.

pub mod file_io;
pub mod templates;

pub use templates::{create_template, load_template, template_from_catalog};
