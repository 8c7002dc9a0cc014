//! User settings for ynab-template
//!
//! Settings live in an optional `config.json`; every field has a default so
//! the tool runs without one.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::api::DEFAULT_API_URL;
use crate::error::TemplateError;
use crate::storage::file_io::read_json;

/// User settings for ynab-template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the YNAB API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Display name of the budget to work with
    #[serde(default = "default_budget_name")]
    pub budget_name: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_budget_name() -> String {
    "My Budget".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            budget_name: default_budget_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults if the file doesn't
    /// exist. `YNAB_API_URL` overrides the configured API URL.
    pub fn load(paths: &AppPaths) -> Result<Self, TemplateError> {
        let mut settings: Settings = read_json(paths.settings_file())
            .map_err(|e| TemplateError::Config(format!("Failed to load settings: {}", e)))?;

        if let Ok(url) = std::env::var("YNAB_API_URL") {
            settings.api_url = url;
        }

        Ok(settings)
    }
}
