//! Configuration module for ynab-template
//!
//! This module provides:
//! - XDG-compliant path resolution
//! - Optional user settings (API URL, budget name)
//! - API credentials loading

pub mod credentials;
pub mod paths;
pub mod settings;

pub use credentials::Credentials;
pub use paths::AppPaths;
pub use settings::Settings;
