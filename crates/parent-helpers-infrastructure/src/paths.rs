//! Path management for Parent Helpers data and credentials.
//!
//! # Directory Structure
//!
//! ```text
//! <data dir>/                          # default: ~/.config/parent-helpers/
//! ├── parent_helpers_profiles.json     # Profile collection
//! └── parent_helpers_responses.json    # Saved response collection
//!
//! ~/.config/parent-helpers/
//! └── secret.json                      # API keys
//! ```

use std::path::{Path, PathBuf};

use parent_helpers_core::HelperError;
use parent_helpers_core::error::Result;

const APP_DIR: &str = "parent-helpers";
const PROFILES_FILE: &str = "parent_helpers_profiles.json";
const RESPONSES_FILE: &str = "parent_helpers_responses.json";
const SECRET_FILE: &str = "secret.json";

/// Resolved locations of the persisted files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperPaths {
    data_dir: PathBuf,
}

impl HelperPaths {
    /// Uses `data_dir` for both collections.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Uses the platform config directory (e.g. `~/.config/parent-helpers/`).
    pub fn from_default_dir() -> Result<Self> {
        Ok(Self::new(Self::config_dir()?))
    }

    /// Returns the application config directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| HelperError::config("Cannot find config directory"))
    }

    /// Returns the default location of `secret.json`.
    pub fn secret_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(SECRET_FILE))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn profiles_file(&self) -> PathBuf {
        self.data_dir.join(PROFILES_FILE)
    }

    pub fn responses_file(&self) -> PathBuf {
        self.data_dir.join(RESPONSES_FILE)
    }
}
