//! Response schema violation errors.

/// Ways a model response can fail the prompt schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SchemaErrorKind {
    /// Response text does not begin with a JSON delimiter
    #[display("Response does not start with a JSON object or array")]
    NotJson,
    /// Response text starts like JSON but does not parse
    #[display("Malformed JSON: {}", _0)]
    MalformedJson(String),
    /// Top-level value is not an object
    #[display("Expected a JSON object at the top level")]
    NotAnObject,
    /// A required field is absent
    #[display("Missing required field: {}", _0)]
    MissingField(String),
    /// A field is present with the wrong primitive type
    #[display("Field '{}' should be {}", field, expected)]
    WrongType {
        /// Field name
        field: String,
        /// Expected type, e.g. "a string"
        expected: String,
    },
}

/// Schema violation with location tracking.
///
/// # Examples
///
/// ```
/// use scenecraft_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::MissingField("aspect_ratio".to_string()));
/// assert!(format!("{}", err).contains("aspect_ratio"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    /// The kind of violation
    pub kind: SchemaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
