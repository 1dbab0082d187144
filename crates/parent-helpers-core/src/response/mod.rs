//! Saved chat responses and the response-type shortcuts used to shape them.

mod model;
mod repository;
mod shortcut;

pub use model::SavedResponse;
pub use repository::SavedResponseRepository;
pub use shortcut::Shortcut;
