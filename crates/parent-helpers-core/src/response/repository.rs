//! SavedResponse repository trait.

use super::model::SavedResponse;
use crate::error::Result;

/// An abstract repository for the saved-response collection.
#[async_trait::async_trait]
pub trait SavedResponseRepository: Send + Sync {
    /// Retrieves all saved responses, or an empty list when none exist.
    async fn get_all(&self) -> Result<Vec<SavedResponse>>;

    /// Replaces the stored collection with `responses`.
    async fn save_all(&self, responses: &[SavedResponse]) -> Result<()>;
}
