//! API credentials
//!
//! The credentials file is a small JSON object:
//!
//! ```json
//! { "key": "<personal access token>", "prefix": "Bearer" }
//! ```
//!
//! The two values are joined into the `Authorization` header. The key is
//! wiped from memory when the credentials are dropped.

use std::path::Path;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{TemplateError, TemplateResult};

/// Token and scheme used to authorize API requests
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    key: String,
    prefix: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            prefix: prefix.into(),
        }
    }

    /// Load credentials from a JSON file
    pub fn load(path: &Path) -> TemplateResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TemplateError::Credentials(format!("Unable to open credentials file:\n{}", e))
        })?;

        Self::from_json(&contents, path)
    }

    fn from_json(contents: &str, path: &Path) -> TemplateResult<Self> {
        let value: serde_json::Value = serde_json::from_str(contents).map_err(|_| {
            TemplateError::Credentials(format!(
                "Unable to parse credentials file {}",
                path.display()
            ))
        })?;

        let field = |name: &str| -> TemplateResult<String> {
            value
                .get(name)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    TemplateError::Credentials(format!(
                        "Expected key '{}' not found in credentials file {}",
                        name,
                        path.display()
                    ))
                })
        };

        Ok(Self {
            key: field("key")?,
            prefix: field("prefix")?,
        })
    }

    /// The `Authorization` header value: `"<prefix> <key>"`
    pub fn authorization(&self) -> String {
        format!("{} {}", self.prefix, self.key)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("prefix", &self.prefix)
            .field("key", &"<redacted>")
            .finish()
    }
}
