//! SavedResponse domain model.

use serde::{Deserialize, Serialize};

use super::shortcut::Shortcut;

/// A chat answer the caregiver chose to keep.
///
/// `profile` is a copy of the profile name at save time, not a reference;
/// renaming or deleting the profile leaves the record as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedResponse {
    pub profile: String,
    #[serde(default)]
    pub shortcut: Shortcut,
    pub question: String,
    pub answer: String,
}

impl SavedResponse {
    /// Short listing title, e.g. `Alex – RESOLVE`.
    pub fn title(&self) -> String {
        format!("{} – {}", self.profile, self.shortcut)
    }
}
