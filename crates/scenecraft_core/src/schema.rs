//! The fixed output schema every generated prompt must satisfy.

use scenecraft_error::{SchemaError, SchemaErrorKind};
use serde_json::{Map, Value, json};
use tracing::debug;

/// Primitive type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FieldType {
    /// JSON string
    #[display("a string")]
    String,
    /// JSON array of strings
    #[display("an array of strings")]
    StringArray,
    /// JSON integer
    #[display("an integer")]
    Integer,
}

impl FieldType {
    /// Whether `value` has this type.
    ///
    /// Integral floats such as `8.0` count as integers.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            FieldType::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
            }
        }
    }

    fn to_gemini(self, description: &str) -> Value {
        match self {
            FieldType::String => json!({ "type": "STRING", "description": description }),
            FieldType::StringArray => json!({
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": description,
            }),
            FieldType::Integer => json!({ "type": "INTEGER", "description": description }),
        }
    }
}

/// One required field of the output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptField {
    /// Field name
    pub name: &'static str,
    /// Expected primitive type
    pub field_type: FieldType,
    /// Meaning, sent to the model as the field description
    pub description: &'static str,
}

const fn field(name: &'static str, field_type: FieldType, description: &'static str) -> PromptField {
    PromptField {
        name,
        field_type,
        description,
    }
}

/// All required fields, in emission order.
pub const PROMPT_FIELDS: [PromptField; 18] = [
    field(
        "prompt",
        FieldType::String,
        "A single, detailed, descriptive sentence synthesizing the whole scene.",
    ),
    field(
        "keyword",
        FieldType::StringArray,
        "Salient keywords extracted from the scene.",
    ),
    field(
        "style",
        FieldType::String,
        "Visual style, e.g. cinematic, anime, photorealistic.",
    ),
    field("tone", FieldType::String, "Emotional tone of the scene."),
    field(
        "camera",
        FieldType::String,
        "Simulated camera or equipment type, e.g. ARRI Alexa, drone.",
    ),
    field("motion", FieldType::String, "Camera movement."),
    field(
        "angle",
        FieldType::String,
        "Camera angle, e.g. low angle, eye level.",
    ),
    field(
        "lens",
        FieldType::String,
        "Lens type, e.g. 35mm, wide angle, telephoto.",
    ),
    field("lighting", FieldType::String, "Lighting style."),
    field(
        "audio",
        FieldType::String,
        "Sound design and dialogue description; quoted dialogue stays in its original language.",
    ),
    field("setting", FieldType::String, "General environment."),
    field("place", FieldType::String, "Specific location."),
    field("time", FieldType::String, "Time of day or era."),
    field(
        "characters",
        FieldType::StringArray,
        "Descriptions of each character in the scene.",
    ),
    field(
        "plot_point",
        FieldType::String,
        "One sentence summarizing the main action or event; quoted dialogue stays in its original language.",
    ),
    field(
        "duration_second",
        FieldType::Integer,
        "Total video duration in seconds: the largest end time across both timelines.",
    ),
    field(
        "aspect_ratio",
        FieldType::String,
        "Aspect ratio, e.g. 16:9.",
    ),
    field(
        "negative_prompt",
        FieldType::String,
        "Elements to exclude from the video.",
    ),
];

/// The fixed, versionless output contract.
///
/// # Examples
///
/// ```
/// use scenecraft_core::PromptSchema;
///
/// let schema = PromptSchema::to_gemini_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["required"].as_array().unwrap().len(), 18);
/// assert_eq!(schema["properties"]["duration_second"]["type"], "INTEGER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PromptSchema;

impl PromptSchema {
    /// Required fields in emission order.
    pub fn fields() -> &'static [PromptField] {
        &PROMPT_FIELDS
    }

    /// Required field names in emission order.
    pub fn required() -> Vec<&'static str> {
        PROMPT_FIELDS.iter().map(|f| f.name).collect()
    }

    /// The schema in Gemini's OpenAPI subset, used as `responseSchema`.
    pub fn to_gemini_schema() -> Value {
        let properties: Map<String, Value> = PROMPT_FIELDS
            .iter()
            .map(|f| (f.name.to_string(), f.field_type.to_gemini(f.description)))
            .collect();

        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": Self::required(),
            "propertyOrdering": Self::required(),
        })
    }

    /// Check that `value` is an object carrying every field with its type.
    ///
    /// Extra fields are allowed.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking fields in emission order.
    pub fn validate(value: &Value) -> Result<(), SchemaError> {
        let object = value
            .as_object()
            .ok_or_else(|| SchemaError::new(SchemaErrorKind::NotAnObject))?;

        for field in PROMPT_FIELDS.iter() {
            let Some(found) = object.get(field.name) else {
                debug!(field = field.name, "Response is missing a required field");
                return Err(SchemaError::new(SchemaErrorKind::MissingField(
                    field.name.to_string(),
                )));
            };
            if !field.field_type.matches(found) {
                debug!(field = field.name, expected = %field.field_type, "Response field has the wrong type");
                return Err(SchemaError::new(SchemaErrorKind::WrongType {
                    field: field.name.to_string(),
                    expected: field.field_type.to_string(),
                }));
            }
        }
        Ok(())
    }
}
