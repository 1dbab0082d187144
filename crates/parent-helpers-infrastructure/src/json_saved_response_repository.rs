//! JSON file-based SavedResponseRepository implementation

use std::path::PathBuf;

use async_trait::async_trait;
use version_migrate::Migrator;

use parent_helpers_core::HelperError;
use parent_helpers_core::error::Result;
use parent_helpers_core::response::{SavedResponse, SavedResponseRepository};

use crate::dto::{SavedResponseV1_1_0, create_saved_response_migrator};
use crate::paths::HelperPaths;
use crate::storage::JsonCollectionStorage;

/// Stores saved responses as a versioned JSON array.
pub struct JsonSavedResponseRepository {
    storage: JsonCollectionStorage,
    migrator: Migrator,
}

impl JsonSavedResponseRepository {
    /// Creates a repository backed by the responses file under `paths`.
    pub fn new(paths: &HelperPaths) -> Self {
        Self::with_path(paths.responses_file())
    }

    /// Creates a repository with a custom file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            storage: JsonCollectionStorage::new(path),
            migrator: create_saved_response_migrator(),
        }
    }
}

#[async_trait]
impl SavedResponseRepository for JsonSavedResponseRepository {
    async fn get_all(&self) -> Result<Vec<SavedResponse>> {
        let records = self.storage.load().await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let responses: Vec<SavedResponse> = self
            .migrator
            .load_vec_flat_from("saved_response", records)
            .map_err(|e| {
                HelperError::migration(format!("Failed to migrate saved responses: {}", e))
            })?;

        tracing::debug!(
            "[SavedResponseRepository] Loaded {} saved responses from {}",
            responses.len(),
            self.storage.path().display()
        );
        Ok(responses)
    }

    async fn save_all(&self, responses: &[SavedResponse]) -> Result<()> {
        let dtos: Vec<SavedResponseV1_1_0> = responses.iter().map(Into::into).collect();

        let json_str = self.migrator.save_vec_flat(dtos)?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&json_str)?;

        self.storage.save(&records).await
    }
}
