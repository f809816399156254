//! Gemini transport error types.

/// Gemini-specific error conditions.
///
/// Every variant describes a failure of the outbound call itself: the request
/// never produced usable text. Malformed text is a [`crate::SchemaErrorKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the body could not be read
    #[display("{}", _0)]
    ApiRequest(String),
    /// Non-success HTTP status with the provider's message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Prompt or candidate was blocked by the provider
    #[display("Request was blocked: {}", _0)]
    Blocked(String),
    /// Response carried no candidate text
    #[display("The API returned an empty response.")]
    EmptyResponse,
}

impl GeminiErrorKind {
    /// The underlying failure detail, if one was reported.
    ///
    /// Returns `None` when the provider gave no usable message, in which case
    /// callers fall back to a generic message.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenecraft_error::GeminiErrorKind;
    ///
    /// let kind = GeminiErrorKind::HttpError {
    ///     status_code: 403,
    ///     message: "API key not valid".to_string(),
    /// };
    /// assert_eq!(kind.detail().as_deref(), Some("API key not valid"));
    ///
    /// let kind = GeminiErrorKind::ApiRequest("   ".to_string());
    /// assert_eq!(kind.detail(), None);
    /// ```
    pub fn detail(&self) -> Option<String> {
        let detail = match self {
            GeminiErrorKind::ClientCreation(msg) | GeminiErrorKind::ApiRequest(msg) => msg.clone(),
            GeminiErrorKind::HttpError { message, .. } => message.clone(),
            GeminiErrorKind::Blocked(_) | GeminiErrorKind::EmptyResponse => self.to_string(),
        };
        let trimmed = detail.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// HTTP status code, when the failure came from a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
