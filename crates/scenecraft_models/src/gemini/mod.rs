//! Google Gemini REST client for structured output.
//!
//! One `generateContent` call per request, with `responseMimeType` and
//! `responseSchema` set so the model answers with schema-shaped JSON.

mod client;
mod conversion;
mod dto;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerationConfig, GeminiInlineData, GeminiPart,
    GeminiPromptFeedback, GeminiRequest, GeminiResponse, GeminiResponseContent,
    GeminiResponsePart, GeminiUsageMetadata,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, scenecraft_error::GeminiError>;
