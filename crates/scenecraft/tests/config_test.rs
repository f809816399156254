// Configuration loading tests.

use scenecraft::{DEFAULT_BASE_URL, DEFAULT_MODEL, PromptDriver, ScenecraftConfig, ScenecraftErrorKind};

#[test]
fn test_bundled_defaults() -> anyhow::Result<()> {
    let config = ScenecraftConfig::bundled()?;

    assert_eq!(config.gemini.model, DEFAULT_MODEL);
    assert_eq!(config.gemini.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.gemini.timeout_secs, None);
    assert_eq!(config, ScenecraftConfig::default());
    Ok(())
}

#[test]
fn test_partial_file_keeps_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scenecraft.toml");
    std::fs::write(
        &path,
        "[gemini]\nmodel = \"gemini-2.5-pro\"\ntimeout_secs = 30\n",
    )?;

    let config = ScenecraftConfig::from_file(&path)?;

    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.timeout_secs, Some(30));
    assert_eq!(config.gemini.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
    Ok(())
}

#[test]
fn test_missing_file_is_config_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let err = ScenecraftConfig::from_file(dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err.kind(), ScenecraftErrorKind::Config(_)));
    assert!(err.user_message().starts_with("Failed to read configuration from"));
    Ok(())
}

#[test]
fn test_client_and_credential_follow_config() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scenecraft.toml");
    std::fs::write(
        &path,
        "[gemini]\nmodel = \"models/gemini-2.0-flash\"\nbase_url = \"http://localhost:9999/v1beta\"\napi_key_env = \"MY_GEMINI_KEY\"\n",
    )?;
    let config = ScenecraftConfig::from_file(&path)?;

    let client = config.gemini.client(None)?;
    assert_eq!(client.model_name(), "gemini-2.0-flash");
    assert_eq!(client.base_url(), "http://localhost:9999/v1beta");
    assert_eq!(config.gemini.credential().var(), "MY_GEMINI_KEY");

    let overridden = config.gemini.client(Some("gemini-2.5-pro"))?;
    assert_eq!(overridden.model_name(), "gemini-2.5-pro");
    Ok(())
}
