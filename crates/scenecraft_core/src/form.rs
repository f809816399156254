//! Submitted form snapshot.

use crate::{
    AUTOMATIC, ReferenceImage, RequestPart, TimedEntry, build_parts, has_valid_actions,
    has_valid_dialogue,
};
use derive_builder::Builder;
use scenecraft_error::JsonError;
use serde::{Deserialize, Serialize};

fn automatic() -> String {
    AUTOMATIC.to_string()
}

/// Immutable snapshot of the story form, taken at submit time.
///
/// The editing buffer belongs to whatever front end collects the input; the
/// core only ever sees this snapshot, consumed once per request.
///
/// # Examples
///
/// ```
/// use scenecraft_core::{FormState, TimedEntry};
///
/// let form = FormState::builder()
///     .actions(vec![TimedEntry::new("0", "2", "Knight walks")])
///     .tone("Epic")
///     .build()
///     .unwrap();
///
/// assert!(form.has_content());
/// assert_eq!(form.camera_movement, "Automatic");
/// assert_eq!(form.parts().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct FormState {
    /// Action beats in input order
    #[serde(default)]
    pub actions: Vec<TimedEntry>,
    /// Dialogue lines in input order
    #[serde(default, alias = "timedDialogues", alias = "dialogues")]
    pub timed_dialogues: Vec<TimedEntry>,
    /// Camera movement preference, or [`AUTOMATIC`]
    #[serde(default = "automatic", alias = "cameraMovement")]
    pub camera_movement: String,
    /// Tone preference, or [`AUTOMATIC`]
    #[serde(default = "automatic")]
    pub tone: String,
    /// Optional visual reference
    #[serde(default)]
    #[builder(setter(into, strip_option))]
    pub image: Option<ReferenceImage>,
}

impl Default for FormState {
    /// A fresh form: one blank action, one blank dialogue line, automatic
    /// preferences, no image.
    fn default() -> Self {
        Self {
            actions: vec![TimedEntry::default()],
            timed_dialogues: vec![TimedEntry::default()],
            camera_movement: automatic(),
            tone: automatic(),
            image: None,
        }
    }
}

impl FormState {
    /// Creates a new form builder.
    pub fn builder() -> FormStateBuilder {
        FormStateBuilder::default()
    }

    /// Parse a form from TOML.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonError`] describing the parse failure.
    pub fn from_toml_str(source: &str) -> Result<Self, JsonError> {
        toml::from_str(source).map_err(|e| JsonError::new(format!("Invalid TOML form: {}", e)))
    }

    /// Parse a form from JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonError`] describing the parse failure.
    pub fn from_json_str(source: &str) -> Result<Self, JsonError> {
        serde_json::from_str(source).map_err(|e| JsonError::new(format!("Invalid JSON form: {}", e)))
    }

    /// Replace the reference image.
    pub fn with_image(mut self, image: ReferenceImage) -> Self {
        self.image = Some(image);
        self
    }

    /// At least one valid action, valid dialogue line, or an image.
    pub fn has_content(&self) -> bool {
        has_valid_actions(&self.actions)
            || has_valid_dialogue(&self.timed_dialogues)
            || self.image.is_some()
    }

    /// Ordered request parts for this form.
    pub fn parts(&self) -> Vec<RequestPart> {
        build_parts(
            &self.actions,
            &self.timed_dialogues,
            self.image.as_ref(),
            &self.camera_movement,
            &self.tone,
        )
    }
}
