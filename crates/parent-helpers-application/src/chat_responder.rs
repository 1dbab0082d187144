//! Coach answers in the voice of a saved profile's persona.

use std::sync::Arc;

use parent_helpers_core::completion::{CompletionRequest, CompletionService, PromptMessage};
use parent_helpers_core::error::Result;
use parent_helpers_core::profile::Profile;
use parent_helpers_core::response::Shortcut;

use crate::reply::extract_field;

const REPLY_FIELD: &str = "answer";

pub struct ChatResponder {
    service: Arc<dyn CompletionService>,
}

impl ChatResponder {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Builds the system instruction: persona and family facts, the
    /// shortcut's fragment, then the question verbatim.
    pub fn build_prompt(profile: &Profile, shortcut: Shortcut, question: &str) -> String {
        format!(
            "You are a parenting coach with this persona: {}. Parent: {}, Child: {}, Age: {}.{}\n{}\nRespond as a JSON object with '{}'.",
            profile.persona_description,
            profile.parent_name,
            profile.child_name,
            profile.child_age,
            shortcut.instruction(),
            question,
            REPLY_FIELD
        )
    }

    /// Asks the coach `question` and returns the `answer` field of the reply.
    pub async fn respond(
        &self,
        profile: &Profile,
        shortcut: Shortcut,
        question: &str,
    ) -> Result<String> {
        let prompt = Self::build_prompt(profile, shortcut, question);
        let request = CompletionRequest::json(vec![PromptMessage::system(prompt)]);

        tracing::info!(
            "[ChatResponder] Asking '{}' with shortcut {}",
            profile.profile_name,
            shortcut
        );
        let raw = self.service.complete(request).await?;
        extract_field(&raw, REPLY_FIELD)
    }
}
