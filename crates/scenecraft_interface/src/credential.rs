//! API credential resolution.

use scenecraft_error::ConfigError;
use tracing::debug;

/// Environment variable holding the Gemini API key unless configured otherwise.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// An API key. Its value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The secret value, for placing in a request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Resolves the credential for a single call.
///
/// Sources are consulted on every call; nothing is cached.
pub trait CredentialSource: Send + Sync {
    /// Return the key, or a [`ConfigError`] if none is configured.
    fn api_key(&self) -> Result<ApiKey, ConfigError>;
}

/// Reads the key from an environment variable at call time.
///
/// # Examples
///
/// ```
/// use scenecraft_interface::{CredentialSource, EnvCredential};
///
/// let source = EnvCredential::new("SCENECRAFT_DOCTEST_UNSET_KEY");
/// let err = source.api_key().unwrap_err();
/// assert_eq!(err.message, "SCENECRAFT_DOCTEST_UNSET_KEY environment variable not set.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    /// Read from the named variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Variable name.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Result<ApiKey, ConfigError> {
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Ok(ApiKey::new(value.trim())),
            _ => {
                debug!(var = %self.var, "API key variable is unset or blank");
                Err(ConfigError::new(format!(
                    "{} environment variable not set.",
                    self.var
                )))
            }
        }
    }
}

/// A fixed credential, possibly absent. Useful for embedding and tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StaticCredential(Option<ApiKey>);

impl StaticCredential {
    /// A source that always returns `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(ApiKey::new(key)))
    }

    /// A source with no key configured.
    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Result<ApiKey, ConfigError> {
        self.0
            .clone()
            .ok_or_else(|| ConfigError::new("API key is not configured."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_key() {
        let key = ApiKey::new("AIza-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(****)");
        assert_eq!(key.expose(), "AIza-secret");
    }

    #[test]
    fn static_credential_missing_is_config_error() {
        let err = StaticCredential::missing().api_key().unwrap_err();
        assert_eq!(err.message, "API key is not configured.");
        assert!(StaticCredential::new("k").api_key().is_ok());
    }

    #[test]
    fn default_env_credential_reads_gemini_api_key() {
        assert_eq!(EnvCredential::default().var(), "GEMINI_API_KEY");
    }
}
