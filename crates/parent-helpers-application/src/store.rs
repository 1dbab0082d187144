//! In-memory view of both persisted collections.
//!
//! The store is loaded once at start-up and every mutation rewrites the
//! affected collection in full. Persistence failures never undo the
//! in-memory change; they are queued as warnings for the caller to show.

use std::sync::Arc;

use parent_helpers_core::HelperError;
use parent_helpers_core::error::Result;
use parent_helpers_core::profile::{Profile, ProfileRepository};
use parent_helpers_core::response::{SavedResponse, SavedResponseRepository};

pub struct Store {
    profiles: Vec<Profile>,
    responses: Vec<SavedResponse>,
    profile_repository: Arc<dyn ProfileRepository>,
    response_repository: Arc<dyn SavedResponseRepository>,
    warnings: Vec<HelperError>,
}

impl Store {
    /// Loads both collections.
    ///
    /// A collection that cannot be read starts empty and leaves a warning.
    pub async fn open(
        profile_repository: Arc<dyn ProfileRepository>,
        response_repository: Arc<dyn SavedResponseRepository>,
    ) -> Self {
        let mut warnings = Vec::new();

        let profiles = profile_repository.get_all().await.unwrap_or_else(|e| {
            tracing::warn!("[Store] Failed to load profiles: {}", e);
            warnings.push(e);
            Vec::new()
        });
        let responses = response_repository.get_all().await.unwrap_or_else(|e| {
            tracing::warn!("[Store] Failed to load saved responses: {}", e);
            warnings.push(e);
            Vec::new()
        });

        tracing::info!(
            "[Store] Opened with {} profiles and {} saved responses",
            profiles.len(),
            responses.len()
        );

        Self {
            profiles,
            responses,
            profile_repository,
            response_repository,
            warnings,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn profile(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    pub fn responses(&self) -> &[SavedResponse] {
        &self.responses
    }

    pub fn response(&self, index: usize) -> Option<&SavedResponse> {
        self.responses.get(index)
    }

    /// Drains load/save failures recorded since the last call.
    pub fn take_warnings(&mut self) -> Vec<HelperError> {
        std::mem::take(&mut self.warnings)
    }

    /// Appends a profile and persists the collection.
    pub async fn add_profile(&mut self, profile: Profile) {
        tracing::info!("[Store] Adding profile '{}'", profile.profile_name);
        self.profiles.push(profile);
        self.persist_profiles().await;
    }

    /// Replaces the profile at `index` and persists the collection.
    pub async fn update_profile(&mut self, index: usize, profile: Profile) -> Result<()> {
        let slot = self
            .profiles
            .get_mut(index)
            .ok_or_else(|| HelperError::not_found("profile", index.to_string()))?;
        *slot = profile;
        self.persist_profiles().await;
        Ok(())
    }

    /// Removes the profile at `index`, keeping the order of the rest.
    pub async fn delete_profile(&mut self, index: usize) -> Result<Profile> {
        if index >= self.profiles.len() {
            return Err(HelperError::not_found("profile", index.to_string()));
        }
        let removed = self.profiles.remove(index);
        tracing::info!("[Store] Deleted profile '{}'", removed.profile_name);
        self.persist_profiles().await;
        Ok(removed)
    }

    /// Appends `response` unless an identical record exists.
    ///
    /// Returns whether the record was appended.
    pub async fn add_response(&mut self, response: SavedResponse) -> bool {
        if self.responses.contains(&response) {
            tracing::debug!("[Store] Skipping duplicate saved response");
            return false;
        }
        self.responses.push(response);
        self.persist_responses().await;
        true
    }

    /// Removes the saved response at `index`, keeping the order of the rest.
    pub async fn delete_response(&mut self, index: usize) -> Result<SavedResponse> {
        if index >= self.responses.len() {
            return Err(HelperError::not_found("saved response", index.to_string()));
        }
        let removed = self.responses.remove(index);
        self.persist_responses().await;
        Ok(removed)
    }

    async fn persist_profiles(&mut self) {
        if let Err(e) = self.profile_repository.save_all(&self.profiles).await {
            tracing::warn!("[Store] Failed to save profiles: {}", e);
            self.warnings.push(e);
        }
    }

    async fn persist_responses(&mut self) {
        if let Err(e) = self.response_repository.save_all(&self.responses).await {
            tracing::warn!("[Store] Failed to save responses: {}", e);
            self.warnings.push(e);
        }
    }
}
