//! SavedResponse DTOs and migrations

use serde::{Deserialize, Serialize};
use version_migrate::{IntoDomain, MigratesTo, Versioned};

use parent_helpers_core::response::{SavedResponse, Shortcut};

/// SavedResponse V1.0.0 (shortcut stored as a display label, e.g. "🛠 RESOLVE").
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct SavedResponseV1_0_0 {
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub shortcut: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// SavedResponse V1.1.0 (shortcut stored as a bare tag).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct SavedResponseV1_1_0 {
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub shortcut: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

// ============================================================================
// Migration implementations
// ============================================================================

/// Migration from SavedResponseV1_0_0 to SavedResponseV1_1_0.
impl MigratesTo<SavedResponseV1_1_0> for SavedResponseV1_0_0 {
    fn migrate(self) -> SavedResponseV1_1_0 {
        SavedResponseV1_1_0 {
            profile: self.profile,
            shortcut: Shortcut::from_label(&self.shortcut).tag(),
            question: self.question,
            answer: self.answer,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert SavedResponseV1_1_0 DTO to domain model.
impl IntoDomain<SavedResponse> for SavedResponseV1_1_0 {
    fn into_domain(self) -> SavedResponse {
        SavedResponse {
            profile: self.profile,
            shortcut: Shortcut::from_label(&self.shortcut),
            question: self.question,
            answer: self.answer,
        }
    }
}

/// Convert domain model to SavedResponseV1_1_0 DTO for persistence.
impl From<&SavedResponse> for SavedResponseV1_1_0 {
    fn from(response: &SavedResponse) -> Self {
        SavedResponseV1_1_0 {
            profile: response.profile.clone(),
            shortcut: response.shortcut.tag(),
            question: response.question.clone(),
            answer: response.answer.clone(),
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates and configures a Migrator instance for SavedResponse entities.
///
/// # Migration Path
///
/// - V1.0.0 → V1.1.0: Normalises the shortcut label to a bare tag
/// - V1.1.0 → SavedResponse: Converts DTO to domain model
pub fn create_saved_response_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let response_path = version_migrate::Migrator::define("saved_response")
        .from::<SavedResponseV1_0_0>()
        .step::<SavedResponseV1_1_0>()
        .into::<SavedResponse>();

    migrator
        .register(response_path)
        .expect("Failed to register saved_response migration path");

    migrator
}
