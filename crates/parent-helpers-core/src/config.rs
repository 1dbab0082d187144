//! Credential configuration read from `secret.json`.

use serde::{Deserialize, Serialize};

/// Default chat model when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Root of `secret.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<OpenAIConfig>,
}

/// OpenAI credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl OpenAIConfig {
    /// Configured model, falling back to `DEFAULT_OPENAI_MODEL`.
    pub fn model(&self) -> &str {
        self.model_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    /// Whether the key is something other than a blank placeholder.
    pub fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
