//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, InputError, JsonError, SchemaError};

/// Prefix applied to transport and schema failures at the request boundary.
pub const FAILURE_PREFIX: &str = "Failed to generate prompt";

/// Message body for any response that fails JSON or schema validation.
pub const INVALID_JSON_MESSAGE: &str = "The API did not return a valid JSON format.";

/// Fallback for failures that carry no usable detail.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred while generating the prompt.";

/// All error conditions surfaced by Scenecraft crates.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{ScenecraftError, InputError};
///
/// let input_err = InputError::new("empty form");
/// let err: ScenecraftError = input_err.into();
/// assert!(format!("{}", err).contains("Input Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScenecraftErrorKind {
    /// Missing credential or unreadable configuration
    #[from(ConfigError)]
    Config(ConfigError),
    /// Submission rejected before any request
    #[from(InputError)]
    Input(InputError),
    /// Outbound call failed
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Response failed JSON or schema validation
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Local JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Scenecraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{ConfigError, ScenecraftResult};
///
/// fn might_fail() -> ScenecraftResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scenecraft Error: {}", _0)]
pub struct ScenecraftError(Box<ScenecraftErrorKind>);

impl ScenecraftError {
    /// Create a new error from a kind.
    pub fn new(kind: ScenecraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScenecraftErrorKind {
        &self.0
    }

    /// Collapse this error into the single message shown to the user.
    ///
    /// Configuration and input errors are surfaced verbatim. Transport
    /// failures keep their underlying detail behind [`FAILURE_PREFIX`]. Every
    /// schema violation maps to [`INVALID_JSON_MESSAGE`] behind the same
    /// prefix. Anything else becomes [`UNKNOWN_ERROR_MESSAGE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scenecraft_error::{ScenecraftError, SchemaError, SchemaErrorKind};
    ///
    /// let err = ScenecraftError::from(SchemaError::new(SchemaErrorKind::NotJson));
    /// assert_eq!(
    ///     err.user_message(),
    ///     "Failed to generate prompt: The API did not return a valid JSON format."
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            ScenecraftErrorKind::Config(e) => e.message.clone(),
            ScenecraftErrorKind::Input(e) => e.message.clone(),
            ScenecraftErrorKind::Gemini(e) => match e.kind.detail() {
                Some(detail) => format!("{}: {}", FAILURE_PREFIX, detail),
                None => UNKNOWN_ERROR_MESSAGE.to_string(),
            },
            ScenecraftErrorKind::Schema(_) => {
                format!("{}: {}", FAILURE_PREFIX, INVALID_JSON_MESSAGE)
            }
            ScenecraftErrorKind::Json(_) | ScenecraftErrorKind::Builder(_) => {
                UNKNOWN_ERROR_MESSAGE.to_string()
            }
        }
    }
}

// Generic From implementation for any type that converts to ScenecraftErrorKind
impl<T> From<T> for ScenecraftError
where
    T: Into<ScenecraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scenecraft operations.
pub type ScenecraftResult<T> = std::result::Result<T, ScenecraftError>;
