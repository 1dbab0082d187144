//! Port to the hosted chat-completion service.
//!
//! The service is treated as an opaque collaborator: it receives role-tagged
//! messages and returns the raw text of the first reply. Interpreting that
//! text (for example as a JSON object) is the caller's job.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Role of a message in a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: content.into(),
        }
    }
}

/// A request to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub messages: Vec<PromptMessage>,
    /// Ask the service to reply with a single JSON object.
    pub json_reply: bool,
}

impl CompletionRequest {
    /// Builds a request expecting a JSON-object reply.
    pub fn json(messages: Vec<PromptMessage>) -> Self {
        Self {
            messages,
            json_reply: true,
        }
    }
}

/// Anything that can answer a completion request.
#[async_trait::async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends `request` and returns the raw reply text.
    ///
    /// # Errors
    ///
    /// Returns `HelperError::Service` on transport failures, non-success
    /// statuses and empty replies, and `HelperError::Config` when the
    /// service cannot be reached for lack of credentials.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
