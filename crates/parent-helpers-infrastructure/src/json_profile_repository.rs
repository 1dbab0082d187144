//! JSON file-based ProfileRepository implementation

use std::path::PathBuf;

use async_trait::async_trait;
use version_migrate::Migrator;

use parent_helpers_core::HelperError;
use parent_helpers_core::error::Result;
use parent_helpers_core::profile::{Profile, ProfileRepository};

use crate::dto::{ProfileV1_1_0, create_profile_migrator};
use crate::paths::HelperPaths;
use crate::storage::JsonCollectionStorage;

/// Stores the profile collection as a versioned JSON array.
///
/// Responsibilities:
/// - Load/save the array through `JsonCollectionStorage`
/// - Execute migrations (V1.0.0 → V1.1.0 → Profile)
/// - Drop records whose required text fields are blank
pub struct JsonProfileRepository {
    storage: JsonCollectionStorage,
    migrator: Migrator,
}

impl JsonProfileRepository {
    /// Creates a repository backed by the profiles file under `paths`.
    pub fn new(paths: &HelperPaths) -> Self {
        Self::with_path(paths.profiles_file())
    }

    /// Creates a repository with a custom file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            storage: JsonCollectionStorage::new(path),
            migrator: create_profile_migrator(),
        }
    }
}

#[async_trait]
impl ProfileRepository for JsonProfileRepository {
    async fn get_all(&self) -> Result<Vec<Profile>> {
        let records = self.storage.load().await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let profiles: Vec<Profile> = self
            .migrator
            .load_vec_flat_from("profile", records)
            .map_err(|e| HelperError::migration(format!("Failed to migrate profiles: {}", e)))?;

        // Records missing a required field cannot be shown or chatted with
        let total = profiles.len();
        let profiles: Vec<Profile> = profiles.into_iter().filter(Profile::is_complete).collect();
        if profiles.len() < total {
            tracing::warn!(
                "[ProfileRepository] Skipped {} incomplete profile records in {}",
                total - profiles.len(),
                self.storage.path().display()
            );
        }

        tracing::debug!(
            "[ProfileRepository] Loaded {} profiles from {}",
            profiles.len(),
            self.storage.path().display()
        );
        Ok(profiles)
    }

    async fn save_all(&self, profiles: &[Profile]) -> Result<()> {
        let dtos: Vec<ProfileV1_1_0> = profiles.iter().map(Into::into).collect();

        // Serialize with version field, then re-parse so the file can be pretty-printed
        let json_str = self.migrator.save_vec_flat(dtos)?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&json_str)?;

        self.storage.save(&records).await
    }
}
