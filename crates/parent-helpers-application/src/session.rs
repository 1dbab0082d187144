//! Per-user session context.
//!
//! Everything here is transient: it lives for one run of the wizard and is
//! never persisted. Persisted data lives in the `Store`.

use parent_helpers_core::profile::{AgentType, SourceType};
use parent_helpers_core::response::Shortcut;

use crate::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A message for the user produced while handling an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// State of the active interaction.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub screen: Screen,

    // Profile being created
    pub agent_type: AgentType,
    pub source_type: Option<SourceType>,
    pub source_name: Option<String>,
    pub persona_description: Option<String>,

    // Chat
    pub active_profile: usize,
    pub shortcut: Shortcut,
    pub last_question: Option<String>,
    pub last_answer: Option<String>,

    // Listings
    pub selected_response: usize,
    pub selected_profile: usize,

    notices: Vec<Notice>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Error, message);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drains pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Forgets the source and persona of the profile being created.
    pub fn clear_source(&mut self) {
        self.source_type = None;
        self.source_name = None;
        self.persona_description = None;
    }

    /// Resets everything collected for a new profile, agent type included.
    pub fn start_new_profile(&mut self) {
        self.agent_type = AgentType::default();
        self.clear_source();
    }
}
