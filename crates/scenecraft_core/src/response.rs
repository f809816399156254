//! Validation of model output.

use crate::PromptSchema;
use scenecraft_error::{JsonError, ScenecraftResult, SchemaError, SchemaErrorKind};
use serde_json::Value;
use tracing::{debug, instrument};

/// A schema-conformant prompt decoded from model output.
///
/// Key order is preserved as the model emitted it; extra keys are kept.
///
/// # Examples
///
/// ```
/// use scenecraft_core::GeneratedPrompt;
///
/// let err = GeneratedPrompt::from_response_text("not json").unwrap_err();
/// assert_eq!(
///     err.user_message(),
///     "Failed to generate prompt: The API did not return a valid JSON format."
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPrompt {
    value: Value,
    pretty: String,
}

impl GeneratedPrompt {
    /// Validate raw response text and pretty-print it with two-space indentation.
    ///
    /// Text that does not start with `{` or `[` (after leading whitespace) is
    /// rejected without being parsed.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if the text is not JSON, is malformed, or
    /// misses a required field or type.
    #[instrument(skip_all, fields(len = text.len()))]
    pub fn from_response_text(text: &str) -> ScenecraftResult<Self> {
        let trimmed = text.trim();
        if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
            debug!("Response does not start with a JSON delimiter");
            return Err(SchemaError::new(SchemaErrorKind::NotJson).into());
        }

        let value: Value = serde_json::from_str(trimmed)
            .map_err(|e| SchemaError::new(SchemaErrorKind::MalformedJson(e.to_string())))?;

        PromptSchema::validate(&value)?;

        let pretty = serde_json::to_string_pretty(&value)
            .map_err(|e| JsonError::new(format!("Failed to format prompt: {}", e)))?;

        debug!(bytes = pretty.len(), "Response validated");
        Ok(Self { value, pretty })
    }

    /// The decoded JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The two-space-indented JSON text.
    pub fn pretty(&self) -> &str {
        &self.pretty
    }

    /// Consume the prompt, returning the indented JSON text.
    pub fn into_pretty(self) -> String {
        self.pretty
    }

    /// A single field of the prompt.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.value.get(name)
    }

    /// The derived total duration in seconds.
    pub fn duration_second(&self) -> Option<i64> {
        let value = self.field("duration_second")?;
        value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
    }
}

impl std::fmt::Display for GeneratedPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pretty)
    }
}
