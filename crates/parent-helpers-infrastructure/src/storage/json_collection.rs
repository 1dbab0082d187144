//! Whole-file JSON array storage.
//!
//! A collection file holds a single JSON array of objects. It is read in
//! full and rewritten in full, pretty-printed. There is no locking or atomic
//! rename: a single process owns the file.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;

use parent_helpers_core::HelperError;
use parent_helpers_core::error::Result;

use crate::dto::LEGACY_VERSION;

const VERSION_KEY: &str = "version";

/// Storage for one JSON array-of-objects file.
///
/// Responsibilities:
/// - Read the array and tag unversioned records with `LEGACY_VERSION`
/// - Write the array back, creating the parent directory if needed
///
/// Does NOT:
/// - Know about record shapes (repositories run the migrators)
#[derive(Debug, Clone)]
pub struct JsonCollectionStorage {
    path: PathBuf,
}

impl JsonCollectionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records.
    ///
    /// # Returns
    ///
    /// - `Ok(vec![])`: The file does not exist
    /// - `Ok(records)`: Every element of the array, each carrying a `version`
    /// - `Err(HelperError)`: The file is unreadable or not an array of objects
    pub async fn load(&self) -> Result<Vec<Value>> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            HelperError::io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let parsed: Value = serde_json::from_str(&content)?;
        let Value::Array(records) = parsed else {
            return Err(HelperError::Serialization {
                format: "JSON".to_string(),
                message: format!("{} does not contain a JSON array", self.path.display()),
            });
        };

        records
            .into_iter()
            .map(|record| match record {
                Value::Object(mut fields) => {
                    fields
                        .entry(VERSION_KEY)
                        .or_insert_with(|| Value::String(LEGACY_VERSION.to_string()));
                    Ok(Value::Object(fields))
                }
                other => Err(HelperError::Serialization {
                    format: "JSON".to_string(),
                    message: format!("Expected an object record, found: {}", other),
                }),
            })
            .collect()
    }

    /// Overwrites the file with `records`, pretty-printed.
    pub async fn save(&self, records: &[Value]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| HelperError::io(format!("Failed to create directory: {}", e)))?;
            }
        }

        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content).await.map_err(|e| {
            HelperError::io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
