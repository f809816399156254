//! Error types for the Scenecraft library.
//!
//! This crate provides the error types used throughout the Scenecraft workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Errors propagate as [`ScenecraftError`] inside the library and are collapsed
//! into a single human-readable string only at the request boundary, via
//! [`ScenecraftError::user_message`].
//!
//! # Examples
//!
//! ```
//! use scenecraft_error::{InputError, ScenecraftResult};
//!
//! fn submit() -> ScenecraftResult<String> {
//!     Err(InputError::new("Nothing to submit"))?
//! }
//!
//! let err = submit().unwrap_err();
//! assert_eq!(err.user_message(), "Nothing to submit");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod gemini;
mod input;
mod json;
mod schema;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{
    FAILURE_PREFIX, INVALID_JSON_MESSAGE, ScenecraftError, ScenecraftErrorKind, ScenecraftResult,
    UNKNOWN_ERROR_MESSAGE,
};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use input::InputError;
pub use json::JsonError;
pub use schema::{SchemaError, SchemaErrorKind};
