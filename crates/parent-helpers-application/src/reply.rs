//! Extraction of a single field from a JSON-object reply.

use serde_json::Value;

use parent_helpers_core::HelperError;
use parent_helpers_core::error::Result;

/// Returns the string stored under `field` in `raw`, unchanged.
///
/// A blank value counts as a failed reply.
pub(crate) fn extract_field(raw: &str, field: &str) -> Result<String> {
    let value: Value = serde_json::from_str(raw.trim())
        .map_err(|e| HelperError::service(format!("Reply is not valid JSON: {}", e)))?;

    match value.get(field) {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        Some(_) => Err(HelperError::service(format!(
            "Reply field '{}' is empty or not text",
            field
        ))),
        None => Err(HelperError::service(format!(
            "Reply is missing the '{}' field",
            field
        ))),
    }
}
