//! Domain layer for Parent Helpers.
//!
//! Holds the persisted entities (profiles and saved responses), the
//! repository traits the infrastructure layer implements, and the port used
//! to reach the hosted completion service.

pub mod completion;
pub mod config;
pub mod error;
pub mod profile;
pub mod response;

// Re-export common error type
pub use error::HelperError;
