//! Core data types for the Scenecraft video prompt generator.
//!
//! This crate holds everything that does not touch the network:
//! - the submitted [`FormState`] snapshot and its [`TimedEntry`] timelines
//! - the timeline normalizer that turns a form into ordered [`RequestPart`]s
//! - the fixed [`PromptSchema`] and [`PROMPT_INSTRUCTION`] sent with every request
//! - validation of model output into a [`GeneratedPrompt`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entry;
mod form;
mod image;
mod instruction;
mod part;
mod preference;
mod request;
mod response;
mod schema;
mod timeline;

pub use entry::TimedEntry;
pub use form::{FormState, FormStateBuilder};
pub use image::{ImageMime, ReferenceImage};
pub use instruction::{InstructionTemplate, PROMPT_INSTRUCTION};
pub use part::RequestPart;
pub use preference::{AUTOMATIC, CameraMovement, Tone, is_explicit_preference};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, JSON_MIME_TYPE,
};
pub use response::GeneratedPrompt;
pub use schema::{FieldType, PROMPT_FIELDS, PromptField, PromptSchema};
pub use timeline::{
    ACTION_TIMELINE_LABEL, CAMERA_PREFERENCE_LABEL, DEFAULT_END_TIME, DEFAULT_START_TIME,
    DIALOGUE_TIMELINE_LABEL, IMAGE_CAPTION, TONE_PREFERENCE_LABEL, TimelineStyle, build_parts,
    has_valid_actions, has_valid_dialogue, render_timeline, render_timeline_with_defaults,
};
