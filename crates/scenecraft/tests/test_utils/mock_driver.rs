//! Mock prompt driver for testing.

use async_trait::async_trait;
use scenecraft::{
    ApiKey, GeminiError, GeminiErrorKind, GenerateRequest, GenerateResponse, PromptDriver,
    ScenecraftError, ScenecraftResult,
};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Always fail with the given error
    Error(GeminiErrorKind),
}

/// Mock driver that records every request it receives.
#[derive(Clone)]
pub struct MockPromptDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
    keys: Arc<Mutex<Vec<String>>>,
    model_name: String,
}

impl MockPromptDriver {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            keys: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-gemini".to_string(),
        }
    }

    /// A driver that always replies with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Success(text.into()))
    }

    /// A driver that always fails with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(error))
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Keys passed to generate(), in call order.
    pub fn keys_seen(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptDriver for MockPromptDriver {
    async fn generate(
        &self,
        api_key: &ApiKey,
        req: &GenerateRequest,
    ) -> ScenecraftResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(req.clone());
        self.keys.lock().unwrap().push(api_key.expose().to_string());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::Error(kind) => Err(ScenecraftError::from(GeminiError::new(kind.clone()))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
