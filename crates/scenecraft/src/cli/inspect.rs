//! Offline commands: parts preview, schema and presets.

use scenecraft::{CameraMovement, FormState, PromptSchema, RequestPart, Tone};
use strum::IntoEnumIterator;

/// Print each request part, separated by blank lines.
///
/// Images are summarized rather than dumped.
pub fn print_parts(form: &FormState) {
    let parts = form.parts();
    if parts.is_empty() {
        println!("(no parts: the form has no valid action, dialogue or image)");
        return;
    }
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            println!();
        }
        match part {
            RequestPart::Image { data, mime_type } => {
                println!("[image: {}, {} base64 chars]", mime_type, data.len());
            }
            RequestPart::Text(text) => println!("{}", text),
        }
    }
}

/// Print the Gemini response schema.
pub fn print_schema() -> Result<(), serde_json::Error> {
    let schema = serde_json::to_string_pretty(&PromptSchema::to_gemini_schema())?;
    println!("{}", schema);
    Ok(())
}

/// Print the camera movement and tone presets.
pub fn print_presets() {
    println!("Camera movement:");
    for preset in CameraMovement::iter() {
        println!("  {}", preset);
    }
    println!();
    println!("Tone:");
    for preset in Tone::iter() {
        println!("  {}", preset);
    }
    println!();
    println!("Any other text is sent as a custom preference.");
}
