//! Gemini `generateContent` wire types.

use serde::{Deserialize, Serialize};

//
// ─── REQUEST ────────────────────────────────────────────────────────────────
//

/// Body of a `generateContent` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents (a single user turn here)
    pub contents: Vec<GeminiContent>,

    /// System instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,

    /// Generation parameters
    pub generation_config: GeminiGenerationConfig,
}

/// A content block: a role and its parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role ("user"); omitted for system instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content parts
    pub parts: Vec<GeminiPart>,
}

/// Outbound content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiPart {
    /// Text content
    Text {
        /// The text
        text: String,
    },
    /// Inline binary content
    InlineData {
        /// Encoded data and MIME type
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

/// Inline data with MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiInlineData {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Structured-output generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Response MIME type ("application/json")
    pub response_mime_type: String,
    /// Response schema in Gemini's OpenAPI subset
    pub response_schema: serde_json::Value,
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────
//

/// Body of a `generateContent` response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,

    /// Feedback on the prompt, present when it was blocked
    #[serde(default)]
    pub prompt_feedback: Option<GeminiPromptFeedback>,

    /// Token usage
    #[serde(default)]
    pub usage_metadata: Option<GeminiUsageMetadata>,
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Candidate content; absent when generation was stopped early
    #[serde(default)]
    pub content: Option<GeminiResponseContent>,

    /// Why generation stopped, e.g. "STOP", "SAFETY", "MAX_TOKENS"
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Candidate content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeminiResponseContent {
    /// Returned parts
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,

    /// Role ("model")
    #[serde(default)]
    pub role: Option<String>,
}

/// Returned part. Non-text parts deserialize with `text: None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeminiResponsePart {
    /// Text content
    #[serde(default)]
    pub text: Option<String>,

    /// Set on thinking-model reasoning parts
    #[serde(default)]
    pub thought: Option<bool>,
}

/// Prompt feedback.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPromptFeedback {
    /// Block reason, e.g. "SAFETY"
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsageMetadata {
    /// Prompt tokens
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Candidate tokens
    #[serde(default)]
    pub candidates_token_count: u32,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: u32,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct GeminiErrorBody {
    pub error: GeminiErrorDetail,
}

/// Error detail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct GeminiErrorDetail {
    #[serde(default)]
    pub message: String,
}
