//! Trait definitions for generation backends.

use crate::ApiKey;
use async_trait::async_trait;
use scenecraft_core::{GenerateRequest, GenerateResponse};
use scenecraft_error::ScenecraftResult;

/// A backend that performs one schema-constrained generation call.
///
/// Implementations issue exactly one request per call. They do not retry,
/// stream, or validate the returned text; that happens upstream.
///
/// Model output is not deterministic: the same request can return different
/// text on each call, and nothing is cached.
#[async_trait]
pub trait PromptDriver: Send + Sync {
    /// Send the request and return the raw response text.
    async fn generate(
        &self,
        api_key: &ApiKey,
        req: &GenerateRequest,
    ) -> ScenecraftResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier.
    fn model_name(&self) -> &str;
}
