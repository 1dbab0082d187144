//! Secret configuration file storage.
//!
//! Provides loading of API credentials from `~/.config/parent-helpers/secret.json`.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use parent_helpers_core::HelperError;
use parent_helpers_core::config::SecretConfig;

use crate::paths::HelperPaths;

/// Why `secret.json` could not be read.
#[derive(Debug, Error)]
pub enum SecretStorageError {
    #[error("Secret file not found at: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read secret file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Secret file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Could not determine config directory")]
    ConfigDirNotFound,
}

impl From<SecretStorageError> for HelperError {
    fn from(err: SecretStorageError) -> Self {
        HelperError::config(err.to_string())
    }
}

/// Read-only storage for `secret.json`.
///
/// The file is plaintext JSON and should be readable only by its owner.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Creates a SecretStorage pointing at the default location.
    pub fn new() -> Result<Self, SecretStorageError> {
        let path = HelperPaths::secret_file().map_err(|_| SecretStorageError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a SecretStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads `secret.json`. A missing file is `NotFound`, not an I/O error.
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SecretStorageError::NotFound(self.path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
