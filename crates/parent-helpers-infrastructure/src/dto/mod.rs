//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the two JSON collections.
//! They are private to the infrastructure layer and absorb the evolution of
//! the storage format over time.
//!
//! ## Schema Versioning
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//!
//! Records written before versioning was introduced carry no `version`
//! field and are read as `LEGACY_VERSION`.
//!
//! ### Profile Version History
//! - **1.0.0**: Initial schema
//! - **1.1.0**: Added `agent_type` (defaults to `Parent`)
//!
//! ### SavedResponse Version History
//! - **1.0.0**: Initial schema, `shortcut` stored as a decorated label
//! - **1.1.0**: `shortcut` stored as a bare tag (`RESOLVE`)

mod profile;
mod saved_response;

/// Version assumed for records without a `version` field.
pub const LEGACY_VERSION: &str = "1.0.0";

pub use profile::{
    AgentTypeDTO, ProfileV1_0_0, ProfileV1_1_0, SourceTypeDTO, create_profile_migrator,
};
pub use saved_response::{
    SavedResponseV1_0_0, SavedResponseV1_1_0, create_saved_response_migrator,
};
