//! Profile domain module.
//!
//! A profile couples a generated persona with the family it coaches.
//!
//! # Module Structure
//!
//! - `model`: `Profile`, `ProfileDetails`, `ProfileEdit` and the enums they use
//! - `catalog`: Fixed lists of books, experts and styles per source type
//! - `repository`: Repository trait for profile persistence

mod catalog;
mod model;
mod repository;

pub use catalog::{BOOKS, EXPERTS, STYLES};
pub use model::{
    AgentType, MAX_CHILD_AGE, MIN_CHILD_AGE, Profile, ProfileDetails, ProfileEdit, SourceType,
    clamp_child_age,
};
pub use repository::ProfileRepository;
