//! Persona generation from a parenting source.

use std::sync::Arc;

use parent_helpers_core::completion::{CompletionRequest, CompletionService, PromptMessage};
use parent_helpers_core::error::Result;
use parent_helpers_core::profile::SourceType;

use crate::reply::extract_field;

const REPLY_FIELD: &str = "persona_description";

/// Summarises a book, expert or style into a coach persona.
pub struct PersonaGenerator {
    service: Arc<dyn CompletionService>,
}

impl PersonaGenerator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Builds the single user message sent to the completion service.
    pub fn build_prompt(source_type: SourceType, source_name: &str) -> String {
        format!(
            "Summarize the parenting philosophy, core principles, and practices of \
             the {} '{}' in under 200 words. \
             Respond in a JSON object with '{}'.",
            source_type, source_name, REPLY_FIELD
        )
    }

    /// Generates a persona description.
    ///
    /// One request, no automatic retry. Transport failures, malformed
    /// replies and a missing `persona_description` all surface as errors.
    pub async fn generate(&self, source_type: SourceType, source_name: &str) -> Result<String> {
        let prompt = Self::build_prompt(source_type, source_name);
        let request = CompletionRequest::json(vec![PromptMessage::user(prompt)]);

        tracing::info!(
            "[PersonaGenerator] Generating persona for {} '{}'",
            source_type,
            source_name
        );
        let raw = self.service.complete(request).await?;
        extract_field(&raw, REPLY_FIELD)
    }
}
