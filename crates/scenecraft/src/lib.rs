//! Scenecraft - structured video prompts from a storyboard form.
//!
//! A form of timed actions, timed dialogue lines, an optional reference image
//! and camera/tone preferences is normalized into ordered request parts and
//! sent to Gemini once, constrained to an 18-field JSON schema. The reply is
//! validated and returned as two-space indented JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use scenecraft::{FormState, PromptRequester, ScenecraftConfig, TimedEntry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScenecraftConfig::load()?;
//! let requester = PromptRequester::new(config.gemini.client(None)?, config.gemini.credential());
//!
//! let form = FormState::builder()
//!     .actions(vec![TimedEntry::new("0", "2", "Knight walks")])
//!     .timed_dialogues(vec![TimedEntry::new("0", "2", "Mau pergi kemana?")])
//!     .build()?;
//!
//! let prompt = requester.generate(&form).await?;
//! println!("{}", prompt);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `scenecraft_error` - Error types
//! - `scenecraft_core` - Form model, timeline normalizer, schema, validation
//! - `scenecraft_interface` - `PromptDriver` trait and credential sources
//! - `scenecraft_models` - Gemini REST driver
//!
//! This crate (`scenecraft`) adds configuration and the request pipeline and
//! re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod requester;
pub mod telemetry;

pub use config::{GeminiConfig, ScenecraftConfig};
pub use requester::{EMPTY_INPUT_MESSAGE, PromptRequester};

// Re-export error types
pub use scenecraft_error::{
    ConfigError, FAILURE_PREFIX, GeminiError, GeminiErrorKind, INVALID_JSON_MESSAGE, InputError,
    JsonError, ScenecraftError, ScenecraftErrorKind, ScenecraftResult, SchemaError,
    SchemaErrorKind, UNKNOWN_ERROR_MESSAGE,
};

// Re-export core types
pub use scenecraft_core::{
    AUTOMATIC, CameraMovement, FieldType, FormState, FormStateBuilder, GenerateRequest,
    GenerateResponse, GeneratedPrompt, ImageMime, PROMPT_FIELDS, PROMPT_INSTRUCTION, PromptField,
    PromptSchema, ReferenceImage, RequestPart, TimedEntry, TimelineStyle, Tone, build_parts,
    has_valid_actions, has_valid_dialogue, is_explicit_preference, render_timeline,
};

// Re-export trait interfaces
pub use scenecraft_interface::{
    ApiKey, CredentialSource, EnvCredential, PromptDriver, StaticCredential,
};

// Re-export provider implementations
pub use scenecraft_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
