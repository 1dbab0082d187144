//! Infrastructure layer for Parent Helpers.
//!
//! File-backed implementations of the core repository traits, the versioned
//! record schemas they persist, and path/credential resolution.

pub mod dto;
pub mod json_profile_repository;
pub mod json_saved_response_repository;
pub mod paths;
pub mod storage;

pub use json_profile_repository::JsonProfileRepository;
pub use json_saved_response_repository::JsonSavedResponseRepository;
pub use paths::HelperPaths;
pub use storage::{JsonCollectionStorage, SecretStorage, SecretStorageError};
