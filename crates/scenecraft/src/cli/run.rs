//! Generate command handler.

use scenecraft::{
    FormState, GeneratedPrompt, InputError, PromptRequester, ReferenceImage, ScenecraftConfig,
    ScenecraftResult,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where a form comes from, plus command-line overrides.
#[derive(Debug, Clone, Default)]
pub struct FormSource {
    path: PathBuf,
    image: Option<PathBuf>,
    camera: Option<String>,
    tone: Option<String>,
}

impl FormSource {
    /// Create a form source with overrides.
    pub fn new(
        path: impl Into<PathBuf>,
        image: Option<PathBuf>,
        camera: Option<String>,
        tone: Option<String>,
    ) -> Self {
        Self {
            path: path.into(),
            image,
            camera,
            tone,
        }
    }
}

/// Read a form file and apply overrides.
///
/// `.json` files are parsed as JSON; everything else as TOML.
#[instrument(skip_all, fields(path = %source.path.display()))]
pub fn load_form(source: &FormSource) -> ScenecraftResult<FormState> {
    let text = std::fs::read_to_string(&source.path).map_err(|e| {
        InputError::new(format!(
            "Failed to read form {}: {}",
            source.path.display(),
            e
        ))
    })?;

    let is_json = source
        .path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        FormState::from_json_str(&text)
    } else {
        FormState::from_toml_str(&text)
    };
    let mut form = parsed.map_err(|e| {
        InputError::new(format!("{} ({})", e.message, source.path.display()))
    })?;

    if let Some(camera) = &source.camera {
        form.camera_movement = camera.clone();
    }
    if let Some(tone) = &source.tone {
        form.tone = tone.clone();
    }
    if let Some(image) = &source.image {
        form = form.with_image(ReferenceImage::from_path(image)?);
    }

    debug!(
        actions = form.actions.len(),
        dialogues = form.timed_dialogues.len(),
        has_image = form.image.is_some(),
        "Loaded form"
    );
    Ok(form)
}

/// Load the form and run it through the Gemini pipeline.
#[instrument(skip(config, source), fields(form = %source.path.display()))]
pub async fn run_generate(
    config: &ScenecraftConfig,
    source: &FormSource,
    model: Option<&str>,
) -> ScenecraftResult<GeneratedPrompt> {
    let form = load_form(source)?;
    let requester = PromptRequester::new(config.gemini.client(model)?, config.gemini.credential());
    let prompt = requester.generate(&form).await?;
    info!("Prompt generated");
    Ok(prompt)
}

/// Write the JSON to `output`, or to stdout when no path is given.
pub fn write_output(json: &str, output: Option<&Path>) -> std::io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))?;
            info!(path = %path.display(), "Wrote prompt");
        }
        None => println!("{}", json),
    }
    Ok(())
}
