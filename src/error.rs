//! Custom error types for ynab-template
//!
//! Every failure the tool can report is a variant of [`TemplateError`]. All of
//! them are fatal for the current run except per-entry update failures, which
//! the sync adapter collects instead of propagating.

use thiserror::Error;

/// The main error type for ynab-template operations
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Credentials file unreadable, malformed, or missing a key
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced a response
    #[error("YNAB API error: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Request Error: {status} {name}:{detail}")]
    Service {
        status: u16,
        name: String,
        detail: String,
    },

    /// Named budget not present in the budget list
    #[error("Budget '{0}' not found")]
    BudgetNotFound(String),

    /// No month summary for the requested month
    #[error("To be budgeted amount not found for {0}")]
    ToBeBudgetedNotFound(String),

    /// Template file or entry has the wrong shape
    #[error("Template format error: {0}")]
    TemplateFormat(String),

    /// Refusing to overwrite an existing file
    #[error("File already exists: {0}")]
    FileExists(String),

    /// Template names a category the catalog does not contain
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Two visible categories share a display name
    #[error("Duplicate category name in budget: {0}")]
    DuplicateCategory(String),

    /// One or more category updates were rejected
    #[error("{0} category update(s) failed")]
    SyncFailed(usize),

    /// Amount supplied on the command line could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl TemplateError {
    /// Create a format error for an entry that lacks a required key
    pub fn missing_key(key: &str) -> Self {
        Self::TemplateFormat(format!("missing key '{}'", key))
    }

    /// Create a format error for an amount too large to represent
    pub fn out_of_range(category_name: &str) -> Self {
        Self::TemplateFormat(format!(
            "amount for category '{}' is out of range",
            category_name
        ))
    }

    /// Check if this is a template format error
    pub fn is_template_format(&self) -> bool {
        matches!(self, Self::TemplateFormat(_))
    }

    /// Check if this error came from the service or the network
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. } | Self::Transport(_))
    }
}

impl From<std::io::Error> for TemplateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TemplateError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<reqwest::Error> for TemplateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for ynab-template operations
pub type TemplateResult<T> = Result<T, TemplateError>;
