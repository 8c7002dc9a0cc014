//! Path management for ynab-template
//!
//! ## Path Resolution Order
//!
//! 1. `YNAB_TEMPLATE_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ynab-template` or `~/.config/ynab-template`
//! 3. Windows: `%APPDATA%\ynab-template`

use std::path::PathBuf;

use crate::error::TemplateError;

/// Manages the paths ynab-template reads its configuration from
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TemplateError> {
        let base_dir = if let Ok(custom) = std::env::var("YNAB_TEMPLATE_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path to the credentials file
    pub fn credentials_file(&self) -> PathBuf {
        self.base_dir.join("credentials.json")
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TemplateError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                TemplateError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ynab-template"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TemplateError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TemplateError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ynab-template"))
}
