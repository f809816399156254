//! Request and response types for structured generation.

use crate::{FormState, PROMPT_INSTRUCTION, PromptSchema, RequestPart};
use derive_builder::Builder;
use scenecraft_error::BuilderError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// MIME type requested for structured JSON output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// A single schema-constrained generation request.
///
/// # Examples
///
/// ```
/// use scenecraft_core::{GenerateRequest, RequestPart};
///
/// let request = GenerateRequest::builder()
///     .model("gemini-2.5-flash")
///     .parts(vec![RequestPart::Text("ACTION TIMELINE:\n- 0–2 sec: Knight walks".into())])
///     .system_instruction("Describe the scene.")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.response_mime_type(), "application/json");
/// assert_eq!(request.parts().len(), 1);
///
/// let missing = GenerateRequest::builder().parts(vec![]).build().unwrap_err();
/// assert!(missing.to_string().contains("model"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), build_fn(error = "BuilderError"))]
pub struct GenerateRequest {
    /// Model identifier, e.g. "gemini-2.5-flash"
    model: String,
    /// Ordered content parts
    parts: Vec<RequestPart>,
    /// Instruction text sent as the system instruction
    system_instruction: String,
    /// Requested response MIME type
    #[builder(default = "JSON_MIME_TYPE.to_string()")]
    response_mime_type: String,
    /// Schema the response must follow
    #[builder(default = "PromptSchema::to_gemini_schema()")]
    response_schema: serde_json::Value,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// The prompt request for a form: its parts, the fixed instruction and
    /// the fixed schema.
    pub fn for_form(model: impl Into<String>, form: &FormState) -> Self {
        Self {
            model: model.into(),
            parts: form.parts(),
            system_instruction: PROMPT_INSTRUCTION.text().to_string(),
            response_mime_type: JSON_MIME_TYPE.to_string(),
            response_schema: PromptSchema::to_gemini_schema(),
        }
    }
}

/// Raw text returned by a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// Concatenated candidate text
    text: String,
}

impl GenerateResponse {
    /// Wrap response text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
