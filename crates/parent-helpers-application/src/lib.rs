//! Application layer for Parent Helpers.
//!
//! Coordinates the domain and infrastructure layers: the in-memory store
//! over both persisted collections, the per-user session, the screen state
//! machine, and the two completion-backed use cases (persona generation and
//! chat answers).

pub mod chat_responder;
pub mod persona_generator;
mod reply;
pub mod screen;
pub mod session;
pub mod store;
pub mod wizard;

pub use chat_responder::ChatResponder;
pub use persona_generator::PersonaGenerator;
pub use screen::{Action, Screen, SourceChoice};
pub use session::{Notice, NoticeLevel, SessionContext};
pub use store::Store;
pub use wizard::Wizard;
