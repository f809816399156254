//! Configuration loading for Scenecraft.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from scenecraft.toml)
//! - `~/.config/scenecraft/scenecraft.toml`
//! - `./scenecraft.toml`

use config::{Config, File, FileFormat};
use scenecraft_error::{ConfigError, ScenecraftError, ScenecraftResult};
use scenecraft_interface::{DEFAULT_API_KEY_ENV, EnvCredential};
use scenecraft_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../scenecraft.toml");

/// Gemini connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model identifier
    pub model: String,
    /// REST endpoint base URL
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Overall request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Credential source reading [`GeminiConfig::api_key_env`] at call time.
    pub fn credential(&self) -> EnvCredential {
        EnvCredential::new(&self.api_key_env)
    }

    /// Build a Gemini client from these settings.
    ///
    /// `model` overrides the configured model when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn client(&self, model: Option<&str>) -> ScenecraftResult<GeminiClient> {
        let model = model.unwrap_or(&self.model);
        let client = GeminiClient::with_timeout(model, self.timeout_secs.map(Duration::from_secs))?
            .with_base_url(&self.base_url);
        Ok(client)
    }
}

/// Top-level Scenecraft configuration.
///
/// # Example
///
/// ```no_run
/// use scenecraft::ScenecraftConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScenecraftConfig::load()?;
/// println!("Model: {}", config.gemini.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ScenecraftConfig {
    /// Gemini settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl ScenecraftConfig {
    /// Load configuration from a specific file path.
    ///
    /// Keys missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScenecraftResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> ScenecraftResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scenecraft/scenecraft.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scenecraft").required(false));

        builder
            .build()
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Bundled defaults only, ignoring user files.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> ScenecraftResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| {
                ScenecraftError::from(ConfigError::new(format!(
                    "Failed to parse bundled configuration: {}",
                    e
                )))
            })
    }
}
