//! The prompt request pipeline.

use scenecraft_core::{FormState, GenerateRequest, GeneratedPrompt};
use scenecraft_error::{InputError, ScenecraftResult};
use scenecraft_interface::{CredentialSource, PromptDriver};
use tracing::{debug, info, instrument, warn};

/// Reported when a form has no valid action, dialogue line or image.
pub const EMPTY_INPUT_MESSAGE: &str =
    "Please provide at least one action, dialogue line, or reference image.";

/// Turns a submitted form into a validated, pretty-printed video prompt.
///
/// Each call resolves the credential, checks the form, sends exactly one
/// request through the driver and validates the reply. Nothing is retried.
///
/// # Examples
///
/// ```no_run
/// use scenecraft::{FormState, PromptRequester, ScenecraftConfig, TimedEntry};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScenecraftConfig::load()?;
/// let requester = PromptRequester::new(config.gemini.client(None)?, config.gemini.credential());
///
/// let form = FormState::builder()
///     .actions(vec![TimedEntry::new("0", "2", "Knight walks")])
///     .build()?;
///
/// match requester.generate_message(&form).await {
///     Ok(json) => println!("{}", json),
///     Err(message) => eprintln!("{}", message),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PromptRequester<D, C> {
    driver: D,
    credentials: C,
}

impl<D, C> PromptRequester<D, C>
where
    D: PromptDriver,
    C: CredentialSource,
{
    /// Pair a driver with a credential source.
    pub fn new(driver: D, credentials: C) -> Self {
        Self {
            driver,
            credentials,
        }
    }

    /// Generate a prompt for `form`.
    ///
    /// The result is not deterministic. Submitting the same form twice sends
    /// two requests and may yield two different prompts.
    ///
    /// # Errors
    ///
    /// - `Config` when no credential is available (no request is sent)
    /// - `Input` when the form has nothing to describe (no request is sent)
    /// - `Gemini` when the call itself fails
    /// - `Schema` when the reply is not the expected JSON object
    #[instrument(
        skip_all,
        fields(
            provider = self.driver.provider_name(),
            model = self.driver.model_name(),
        )
    )]
    pub async fn generate(&self, form: &FormState) -> ScenecraftResult<GeneratedPrompt> {
        let api_key = self.credentials.api_key()?;

        if !form.has_content() {
            warn!("Rejected empty form");
            return Err(InputError::new(EMPTY_INPUT_MESSAGE).into());
        }

        let request = GenerateRequest::for_form(self.driver.model_name(), form);
        debug!(parts = request.parts().len(), "Assembled request");

        let response = self.driver.generate(&api_key, &request).await?;
        let prompt = GeneratedPrompt::from_response_text(response.text())?;

        info!(
            duration_second = ?prompt.duration_second(),
            "Generated video prompt"
        );
        Ok(prompt)
    }

    /// Generate a prompt and collapse the outcome to strings.
    ///
    /// `Ok` holds the two-space indented JSON; `Err` holds the message to
    /// show the user.
    pub async fn generate_message(&self, form: &FormState) -> Result<String, String> {
        self.generate(form)
            .await
            .map(GeneratedPrompt::into_pretty)
            .map_err(|e| {
                warn!(error = %e, "Prompt generation failed");
                e.user_message()
            })
    }
}
