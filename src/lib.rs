//! ynab-template - monthly YNAB allocations from a template
//!
//! This library computes per-category budget amounts from a declarative
//! template of fixed amounts and percentages, checks them against the month's
//! total, and can push them to YNAB.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings, and API credentials
//! - `error`: Custom error types
//! - `models`: Money, identifiers, categories, templates, allocations
//! - `api`: Blocking YNAB API client
//! - `storage`: Template and configuration files
//! - `services`: Catalog building, template resolution, and sync
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use ynab_template::models::{Money, Template};
//! use ynab_template::services::resolve;
//!
//! let template = Template::from_yaml_str(
//!     "categories:\n  - {category: Rent, type: fixed, value: 1200}\n  - {category: Fun, type: percent, value: 10}\n",
//! )?;
//! let allocation = resolve(&template, Money::from_units(2000))?;
//! assert_eq!(allocation.remaining(), Money::from_units(600));
//! # Ok::<(), ynab_template::TemplateError>(())
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TemplateError, TemplateResult};
