use thiserror::Error;

/// Result type alias for stub operations
pub type Result<T> = std::result::Result<T, StubError>;

/// Errors raised while assembling override sets.
///
/// Stub construction itself never fails: malformed values pass straight
/// through into the generated mapping. The only fallible step is turning
/// loosely-typed input (a JSON value or JSON text) into an [`Overrides`]
/// set, which must be a JSON object.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use stub_core::{Overrides, StubError};
///
/// let err = Overrides::from_value(json!([1, 2, 3])).unwrap_err();
/// assert!(matches!(err, StubError::NotAnObject(_)));
/// assert_eq!(err.to_string(), "Overrides must be a JSON object, got array");
/// ```
///
/// [`Overrides`]: crate::Overrides
#[derive(Error, Debug)]
pub enum StubError {
    /// The supplied value was valid JSON but not an object
    #[error("Overrides must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// The supplied text could not be parsed as JSON
    #[error("Invalid overrides JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StubError {
    /// Build a `NotAnObject` error naming the JSON kind that was received
    pub fn not_an_object(value: &serde_json::Value) -> Self {
        let kind = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        StubError::NotAnObject(kind)
    }

    /// Check if this error came from JSON parsing
    pub fn is_parse_error(&self) -> bool {
        matches!(self, StubError::Json(_))
    }
}
