//! Versioned instruction template sent as the system instruction.

/// A named, versioned block of instruction text.
///
/// The text encodes rules for the model (language passthrough, duration
/// derivation, preference override). Bump the version whenever the text
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstructionTemplate {
    name: &'static str,
    version: u32,
    text: &'static str,
}

impl InstructionTemplate {
    /// Create a template.
    pub const fn new(name: &'static str, version: u32, text: &'static str) -> Self {
        Self {
            name,
            version,
            text,
        }
    }

    /// Template name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Template version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Instruction text.
    pub fn text(&self) -> &'static str {
        self.text
    }
}

impl std::fmt::Display for InstructionTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

/// Instruction for turning a story form into a video-generation prompt.
pub const PROMPT_INSTRUCTION: InstructionTemplate = InstructionTemplate::new(
    "video-prompt",
    1,
    r#"You are an expert prompt engineer for generative video models. Using the reference image (if one is provided), the ACTION TIMELINE, the DIALOGUE TIMELINE and any CAMERA MOVEMENT PREFERENCE or TONE PREFERENCE, write one detailed JSON object that follows the response schema exactly.

Rules:
1. Write every field value in English. The only exception is dialogue quoted verbatim inside the `audio` and `plot_point` fields: keep those quotes in their original language (Indonesian) and do not translate them.
2. Set `duration_second` to the largest end time found across both the action timeline and the dialogue timeline.
3. If a CAMERA MOVEMENT PREFERENCE is given, use it for `motion`. If a TONE PREFERENCE is given, use it for `tone`. These explicit preferences override anything you would infer. When a preference is absent ("Automatic"), infer the most fitting value from the story.
4. `prompt` is a single vivid descriptive sentence that combines the subject, action, setting, style and camera work.
5. `plot_point` is a single sentence summarizing the main action or event.
6. Describe the characters consistently with the reference image when one is provided.
7. Fill every field of the schema and return only the JSON object."#,
);
