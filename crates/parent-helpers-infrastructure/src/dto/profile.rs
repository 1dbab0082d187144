//! Profile DTOs and migrations

use serde::{Deserialize, Serialize};
use version_migrate::{IntoDomain, MigratesTo, Versioned};

use parent_helpers_core::profile::{AgentType, Profile, SourceType, clamp_child_age};

/// Persisted form of `AgentType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgentTypeDTO {
    #[default]
    Parent,
    Teacher,
    Other,
}

/// Persisted form of `SourceType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTypeDTO {
    Book,
    Expert,
    Style,
}

/// Profile V1.0.0 (initial schema, no agent type).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct ProfileV1_0_0 {
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub child_name: String,
    /// Stored unclamped; older writers accepted any integer.
    pub child_age: i64,
    pub source_type: SourceTypeDTO,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub persona_description: String,
}

/// Profile V1.1.0 (added agent type).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct ProfileV1_1_0 {
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub child_name: String,
    pub child_age: i64,
    /// Who the coach speaks as.
    #[serde(default)]
    pub agent_type: AgentTypeDTO,
    pub source_type: SourceTypeDTO,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub persona_description: String,
}

// ============================================================================
// Migration implementations
// ============================================================================

/// Migration from ProfileV1_0_0 to ProfileV1_1_0.
impl MigratesTo<ProfileV1_1_0> for ProfileV1_0_0 {
    fn migrate(self) -> ProfileV1_1_0 {
        ProfileV1_1_0 {
            profile_name: self.profile_name,
            parent_name: self.parent_name,
            child_name: self.child_name,
            child_age: self.child_age,
            agent_type: AgentTypeDTO::default(),
            source_type: self.source_type,
            source_name: self.source_name,
            persona_description: self.persona_description,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl From<AgentTypeDTO> for AgentType {
    fn from(dto: AgentTypeDTO) -> Self {
        match dto {
            AgentTypeDTO::Parent => AgentType::Parent,
            AgentTypeDTO::Teacher => AgentType::Teacher,
            AgentTypeDTO::Other => AgentType::Other,
        }
    }
}

impl From<AgentType> for AgentTypeDTO {
    fn from(agent_type: AgentType) -> Self {
        match agent_type {
            AgentType::Parent => AgentTypeDTO::Parent,
            AgentType::Teacher => AgentTypeDTO::Teacher,
            AgentType::Other => AgentTypeDTO::Other,
        }
    }
}

impl From<SourceTypeDTO> for SourceType {
    fn from(dto: SourceTypeDTO) -> Self {
        match dto {
            SourceTypeDTO::Book => SourceType::Book,
            SourceTypeDTO::Expert => SourceType::Expert,
            SourceTypeDTO::Style => SourceType::Style,
        }
    }
}

impl From<SourceType> for SourceTypeDTO {
    fn from(source_type: SourceType) -> Self {
        match source_type {
            SourceType::Book => SourceTypeDTO::Book,
            SourceType::Expert => SourceTypeDTO::Expert,
            SourceType::Style => SourceTypeDTO::Style,
        }
    }
}

/// Convert ProfileV1_1_0 DTO to domain model.
impl IntoDomain<Profile> for ProfileV1_1_0 {
    fn into_domain(self) -> Profile {
        Profile {
            profile_name: self.profile_name,
            parent_name: self.parent_name,
            child_name: self.child_name,
            child_age: clamp_child_age(self.child_age),
            agent_type: self.agent_type.into(),
            source_type: self.source_type.into(),
            source_name: self.source_name,
            persona_description: self.persona_description,
        }
    }
}

/// Convert domain model to ProfileV1_1_0 DTO for persistence.
impl From<&Profile> for ProfileV1_1_0 {
    fn from(profile: &Profile) -> Self {
        ProfileV1_1_0 {
            profile_name: profile.profile_name.clone(),
            parent_name: profile.parent_name.clone(),
            child_name: profile.child_name.clone(),
            child_age: i64::from(profile.child_age),
            agent_type: profile.agent_type.into(),
            source_type: profile.source_type.into(),
            source_name: profile.source_name.clone(),
            persona_description: profile.persona_description.clone(),
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates and configures a Migrator instance for Profile entities.
///
/// # Migration Path
///
/// - V1.0.0 → V1.1.0: Adds `agent_type` with default `Parent`
/// - V1.1.0 → Profile: Converts DTO to domain model, clamping `child_age`
pub fn create_profile_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let profile_path = version_migrate::Migrator::define("profile")
        .from::<ProfileV1_0_0>()
        .step::<ProfileV1_1_0>()
        .into::<Profile>();

    migrator
        .register(profile_path)
        .expect("Failed to register profile migration path");

    migrator
}
