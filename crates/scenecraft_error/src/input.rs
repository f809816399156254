//! Input validation error types.

/// Rejected user input with source location.
///
/// Raised before any request is made, e.g. when a submission carries no valid
/// action, no valid dialogue line and no reference image.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", message, line, file)]
pub struct InputError {
    /// Error message shown to the user verbatim
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenecraft_error::InputError;
    ///
    /// let err = InputError::new("Unsupported image type: gif");
    /// assert!(err.message.contains("gif"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
