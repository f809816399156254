//! Timeline normalization.
//!
//! Filters blank entries out of the user's timelines and renders the rest into
//! the labeled text blocks the model receives. Everything here is a pure
//! function of its inputs.

use crate::{ReferenceImage, RequestPart, TimedEntry, is_explicit_preference};
use tracing::{debug, instrument};

/// Placeholder for a blank start time.
pub const DEFAULT_START_TIME: &str = "0";

/// Placeholder for a blank end time.
pub const DEFAULT_END_TIME: &str = "?";

/// Caption sent right after the reference image.
pub const IMAGE_CAPTION: &str =
    "This is the visual reference image for the main character and setting.";

/// Label of the action timeline block.
pub const ACTION_TIMELINE_LABEL: &str = "ACTION TIMELINE";

/// Label of the dialogue timeline block.
///
/// The language is a fixed assumption shared with the instruction text; it is
/// not detected from the input.
pub const DIALOGUE_TIMELINE_LABEL: &str = "DIALOGUE TIMELINE (IN INDONESIAN)";

/// Label of the camera movement preference block.
pub const CAMERA_PREFERENCE_LABEL: &str = "CAMERA MOVEMENT PREFERENCE";

/// Label of the tone preference block.
pub const TONE_PREFERENCE_LABEL: &str = "TONE PREFERENCE";

/// How a timeline's text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TimelineStyle {
    /// Action beats, text as written
    #[display("action")]
    Action,
    /// Dialogue lines, text wrapped in double quotes
    #[display("dialogue")]
    Dialogue,
}

/// True if any action entry has non-blank text.
pub fn has_valid_actions(entries: &[TimedEntry]) -> bool {
    entries.iter().any(TimedEntry::is_valid)
}

/// True if any dialogue entry has non-blank text.
pub fn has_valid_dialogue(entries: &[TimedEntry]) -> bool {
    entries.iter().any(TimedEntry::is_valid)
}

/// Render valid entries as `- {start}–{end} sec: {text}` lines.
///
/// Uses [`DEFAULT_START_TIME`] and [`DEFAULT_END_TIME`] for blank times.
///
/// # Examples
///
/// ```
/// use scenecraft_core::{TimedEntry, TimelineStyle, render_timeline};
///
/// let entries = vec![
///     TimedEntry::new("0", "2", "Mau pergi kemana?"),
///     TimedEntry::new("", "", " "),
///     TimedEntry::new("", "", "Ke pasar."),
/// ];
/// assert_eq!(
///     render_timeline(&entries, TimelineStyle::Dialogue),
///     "- 0–2 sec: \"Mau pergi kemana?\"\n- 0–? sec: \"Ke pasar.\""
/// );
/// ```
pub fn render_timeline(entries: &[TimedEntry], style: TimelineStyle) -> String {
    render_timeline_with_defaults(entries, style, DEFAULT_START_TIME, DEFAULT_END_TIME)
}

/// Render valid entries with caller-chosen placeholders for blank times.
///
/// Entries keep their input order; they are not sorted by time. Returns an
/// empty string when no entry is valid, so callers must not emit a block for
/// it.
pub fn render_timeline_with_defaults(
    entries: &[TimedEntry],
    style: TimelineStyle,
    start_default: &str,
    end_default: &str,
) -> String {
    entries
        .iter()
        .filter(|entry| entry.is_valid())
        .map(|entry| {
            let start = or_default(&entry.start_time, start_default);
            let end = or_default(&entry.end_time, end_default);
            let text = entry.text.trim();
            match style {
                TimelineStyle::Action => format!("- {}–{} sec: {}", start, end, text),
                TimelineStyle::Dialogue => format!("- {}–{} sec: \"{}\"", start, end, text),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { default } else { trimmed }
}

/// Assemble the ordered request parts.
///
/// Order: image and its caption, action timeline, dialogue timeline, camera
/// preference, tone preference. Each block appears only when it has content.
///
/// # Examples
///
/// ```
/// use scenecraft_core::{TimedEntry, build_parts};
///
/// let actions = vec![TimedEntry::new("0", "2", "Knight walks")];
/// let dialogues = vec![TimedEntry::default()];
/// let parts = build_parts(&actions, &dialogues, None, "Automatic", "Epic");
///
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[1].as_text(), Some("TONE PREFERENCE: Epic"));
/// ```
#[instrument(
    skip_all,
    fields(
        actions = actions.len(),
        dialogues = dialogues.len(),
        has_image = image.is_some()
    )
)]
pub fn build_parts(
    actions: &[TimedEntry],
    dialogues: &[TimedEntry],
    image: Option<&ReferenceImage>,
    camera_movement: &str,
    tone: &str,
) -> Vec<RequestPart> {
    let mut parts = Vec::new();

    if let Some(image) = image {
        parts.push(RequestPart::from(image));
        parts.push(RequestPart::Text(IMAGE_CAPTION.to_string()));
    }

    if has_valid_actions(actions) {
        parts.push(RequestPart::Text(format!(
            "{}:\n{}",
            ACTION_TIMELINE_LABEL,
            render_timeline(actions, TimelineStyle::Action)
        )));
    }

    if has_valid_dialogue(dialogues) {
        parts.push(RequestPart::Text(format!(
            "{}:\n{}",
            DIALOGUE_TIMELINE_LABEL,
            render_timeline(dialogues, TimelineStyle::Dialogue)
        )));
    }

    if is_explicit_preference(camera_movement) {
        parts.push(RequestPart::Text(format!(
            "{}: {}",
            CAMERA_PREFERENCE_LABEL, camera_movement
        )));
    }

    if is_explicit_preference(tone) {
        parts.push(RequestPart::Text(format!("{}: {}", TONE_PREFERENCE_LABEL, tone)));
    }

    debug!(parts = parts.len(), "Assembled request parts");
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_times_use_defaults() {
        let entries = vec![TimedEntry::new("  ", "\t", "Rain starts")];
        assert_eq!(
            render_timeline(&entries, TimelineStyle::Action),
            "- 0–? sec: Rain starts"
        );
    }

    #[test]
    fn times_and_text_are_trimmed() {
        let entries = vec![TimedEntry::new(" 1 ", "4 ", "  Door creaks open  ")];
        assert_eq!(
            render_timeline(&entries, TimelineStyle::Action),
            "- 1–4 sec: Door creaks open"
        );
    }

    #[test]
    fn custom_defaults_are_applied() {
        let entries = vec![TimedEntry::new("", "", "Silence")];
        assert_eq!(
            render_timeline_with_defaults(&entries, TimelineStyle::Dialogue, "start", "end"),
            "- start–end sec: \"Silence\""
        );
    }
}
