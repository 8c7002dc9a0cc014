//! File I/O helpers
//!
//! Reading optional JSON files and creating new files without ever
//! clobbering an existing one.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::TemplateError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, TemplateError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| TemplateError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| TemplateError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write a file that must not already exist
///
/// The existence check and creation are a single `create_new` open, so a file
/// appearing between a caller's own check and this call is still refused.
pub fn write_new<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TemplateError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TemplateError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => TemplateError::FileExists(path.display().to_string()),
            _ => TemplateError::Io(format!("Failed to create {}: {}", path.display(), e)),
        })?;

    file.write_all(contents.as_bytes())
        .map_err(|e| TemplateError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    file.sync_all()
        .map_err(|e| TemplateError::Io(format!("Failed to sync {}: {}", path.display(), e)))?;

    Ok(())
}
