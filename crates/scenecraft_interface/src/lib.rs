//! Trait definitions for Scenecraft.
//!
//! A [`PromptDriver`] performs the single outbound generation call. A
//! [`CredentialSource`] resolves the API key at call time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credential;
mod traits;

pub use credential::{ApiKey, CredentialSource, DEFAULT_API_KEY_ENV, EnvCredential, StaticCredential};
pub use traits::PromptDriver;
