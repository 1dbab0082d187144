//! File storage primitives shared by the repositories.

mod json_collection;
mod secret_storage;

pub use json_collection::JsonCollectionStorage;
pub use secret_storage::{SecretStorage, SecretStorageError};
