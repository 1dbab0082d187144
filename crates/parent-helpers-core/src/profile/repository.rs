//! Profile repository trait.

use super::model::Profile;
use crate::error::Result;

/// An abstract repository for the profile collection.
///
/// The collection is always read and written as a whole; there are no
/// per-record operations at this layer.
#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Retrieves all profiles.
    ///
    /// Returns an empty list when nothing has been stored yet. Unreadable
    /// or malformed data is reported as an error.
    async fn get_all(&self) -> Result<Vec<Profile>>;

    /// Replaces the stored collection with `profiles`.
    async fn save_all(&self, profiles: &[Profile]) -> Result<()>;
}
