//! LLM provider integrations for Scenecraft.
//!
//! Each provider lives behind its own feature flag.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with `gemini` feature (on by default)
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use scenecraft_core::{FormState, GenerateRequest, TimedEntry};
//! use scenecraft_interface::{CredentialSource, EnvCredential, PromptDriver};
//! use scenecraft_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("gemini-2.5-flash")?;
//! let form = FormState::builder()
//!     .actions(vec![TimedEntry::new("0", "2", "Knight walks")])
//!     .build()?;
//! let request = GenerateRequest::for_form(client.model_name(), &form);
//! let key = EnvCredential::default().api_key()?;
//! let response = client.generate(&key, &request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiCandidate, GeminiClient, GeminiContent,
    GeminiGenerationConfig, GeminiInlineData, GeminiPart, GeminiPromptFeedback, GeminiRequest,
    GeminiResponse, GeminiResponseContent, GeminiResponsePart, GeminiResult, GeminiUsageMetadata,
};
