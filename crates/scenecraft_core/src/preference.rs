//! Creative preferences and their preset catalogues.
//!
//! Preferences travel as plain strings so users can type custom values. The
//! presets below are what a front end offers for selection.

use serde::{Deserialize, Serialize};

/// Sentinel meaning "no explicit instruction; let the model infer".
pub const AUTOMATIC: &str = "Automatic";

/// Whether a preference value should be sent to the model.
///
/// Blank values and the exact sentinel [`AUTOMATIC`] are omitted.
///
/// # Examples
///
/// ```
/// use scenecraft_core::is_explicit_preference;
///
/// assert!(!is_explicit_preference("Automatic"));
/// assert!(!is_explicit_preference("  "));
/// assert!(is_explicit_preference("Slow dolly in"));
/// ```
pub fn is_explicit_preference(value: &str) -> bool {
    !value.trim().is_empty() && value != AUTOMATIC
}

/// Selectable camera movement presets.
///
/// # Examples
///
/// ```
/// use scenecraft_core::CameraMovement;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(CameraMovement::DollyIn.to_string(), "Dolly In");
/// assert_eq!(CameraMovement::iter().next(), Some(CameraMovement::Automatic));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CameraMovement {
    /// Let the model choose
    Automatic,
    /// Locked-off camera
    Static,
    /// Horizontal pan to the left
    #[strum(serialize = "Pan Left")]
    PanLeft,
    /// Horizontal pan to the right
    #[strum(serialize = "Pan Right")]
    PanRight,
    /// Vertical tilt upward
    #[strum(serialize = "Tilt Up")]
    TiltUp,
    /// Vertical tilt downward
    #[strum(serialize = "Tilt Down")]
    TiltDown,
    /// Camera moves toward the subject
    #[strum(serialize = "Dolly In")]
    DollyIn,
    /// Camera moves away from the subject
    #[strum(serialize = "Dolly Out")]
    DollyOut,
    /// Lens zooms in
    #[strum(serialize = "Zoom In")]
    ZoomIn,
    /// Lens zooms out
    #[strum(serialize = "Zoom Out")]
    ZoomOut,
    /// Camera follows the subject
    #[strum(serialize = "Tracking Shot")]
    Tracking,
    /// Camera circles the subject
    Orbit,
    /// Camera rises or falls on a crane
    #[strum(serialize = "Crane Shot")]
    Crane,
    /// Handheld camera shake
    Handheld,
    /// Aerial drone movement
    #[strum(serialize = "Drone Shot")]
    Drone,
}

/// Selectable tone presets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Tone {
    /// Let the model choose
    Automatic,
    /// Polished film look
    Cinematic,
    /// Heightened emotion
    Dramatic,
    /// Light and funny
    Comedic,
    /// Tense, withholding
    Suspenseful,
    /// Warm and tender
    Romantic,
    /// Dread and fear
    Horror,
    /// Playful, fairy-tale
    Whimsical,
    /// Sad, reflective
    Melancholic,
    /// Grand scale
    Epic,
    /// Observational realism
    Documentary,
    /// Unsettling, stylized
    Surreal,
}
