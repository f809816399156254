//! Gemini `generateContent` client.

use super::GeminiResult;
use super::conversion;
use super::dto::{GeminiErrorBody, GeminiResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scenecraft_core::{GenerateRequest, GenerateResponse};
use scenecraft_error::{GeminiError, GeminiErrorKind, ScenecraftResult};
use scenecraft_interface::{ApiKey, PromptDriver};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for Google's Gemini REST API.
///
/// The key is not stored on the client; it is passed with every call so
/// that a missing credential is detected per request.
///
/// # Examples
///
/// ```
/// use scenecraft_interface::PromptDriver;
/// use scenecraft_models::GeminiClient;
///
/// let client = GeminiClient::new("gemini-2.5-flash")
///     .unwrap()
///     .with_base_url("http://localhost:8080/v1beta");
/// assert_eq!(client.model_name(), "gemini-2.5-flash");
/// assert_eq!(client.base_url(), "http://localhost:8080/v1beta");
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model_name: String,
}

impl GeminiClient {
    /// Create a client for `model` against the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(model: impl Into<String>) -> GeminiResult<Self> {
        Self::with_timeout(model, None)
    }

    /// Create a client with an overall per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_timeout(model: impl Into<String>, timeout: Option<Duration>) -> GeminiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            model_name: normalize_model_name(&model.into()),
        })
    }

    /// Point the client at a different endpoint (proxies, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Endpoint base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

/// Strip a leading "models/" so both naming styles resolve to one URL.
fn normalize_model_name(model: &str) -> String {
    model
        .trim()
        .strip_prefix("models/")
        .unwrap_or(model.trim())
        .to_string()
}

/// Pull the provider's message out of an error body.
///
/// Falls back to the raw text, then to the status reason when the body is blank.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<GeminiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .ok()
        .filter(|message| !message.trim().is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|text| !text.is_empty()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        })
}

#[async_trait]
impl PromptDriver for GeminiClient {
    #[instrument(skip(self, api_key, req), fields(model = tracing::field::Empty))]
    async fn generate(
        &self,
        api_key: &ApiKey,
        req: &GenerateRequest,
    ) -> ScenecraftResult<GenerateResponse> {
        let model = if req.model().trim().is_empty() {
            self.model_name.clone()
        } else {
            normalize_model_name(req.model())
        };
        tracing::Span::current().record("model", model.as_str());

        let body = conversion::to_gemini_request(req);
        let url = self.endpoint(&model);
        debug!(url = %url, parts = req.parts().len(), "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = error_message(status, &error_text);
            warn!(status = status.as_u16(), message = %message, "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        if let Some(usage) = gemini_response.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                candidate_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Token usage"
            );
        }

        let generated = conversion::from_gemini_response(gemini_response)?;
        info!(chars = generated.text().len(), "Received Gemini response");
        Ok(generated)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_prefix_is_stripped() {
        assert_eq!(normalize_model_name("models/gemini-2.5-pro"), "gemini-2.5-pro");
        assert_eq!(normalize_model_name(" gemini-2.5-flash "), "gemini-2.5-flash");
    }

    #[test]
    fn error_message_prefers_provider_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "API key not valid."
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream timeout\n"),
            "upstream timeout"
        );
    }

    #[test]
    fn blank_error_body_falls_back_to_status_reason() {
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
        assert_eq!(
            error_message(StatusCode::TOO_MANY_REQUESTS, "  \n"),
            "Too Many Requests"
        );
        let unnamed = StatusCode::from_u16(599).unwrap();
        assert_eq!(error_message(unnamed, ""), "HTTP 599");
    }

    #[test]
    fn endpoint_uses_generate_content() {
        let client = GeminiClient::new(DEFAULT_MODEL)
            .unwrap()
            .with_base_url("http://localhost:1234/v1beta/");
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
