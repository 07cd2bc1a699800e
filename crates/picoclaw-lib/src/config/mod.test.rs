use super::*;
use crate::envfile::MemoryEnvironmentProvider;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_path_lives_under_home() {
    let env = MemoryEnvironmentProvider::new().with_home("/tmp/home");
    assert_eq!(
        config_path(&env).unwrap(),
        PathBuf::from("/tmp/home/.picoclaw/config.json")
    );
}

#[test]
fn test_config_path_without_home_fails() {
    let env = MemoryEnvironmentProvider::new();
    assert!(matches!(config_path(&env), Err(ConfigError::HomeDirUnavailable)));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let env = MemoryEnvironmentProvider::new();

    let config = JsonConfigSource
        .load(&dir.path().join("config.json"), &env)
        .unwrap();

    assert_eq!(config, Config::default());
    assert!(config.agents.defaults.restrict_to_workspace);
    assert_eq!(config.model_name(), defaults::MODEL);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "agents": {"defaults": {"workspace": "/srv/agent", "model": "claude"}},
            "providers": {"anthropic": {"api_key": "sk-test"}}
        }"#,
    )
    .unwrap();

    let config = JsonConfigSource
        .load(&path, &MemoryEnvironmentProvider::new())
        .unwrap();

    assert_eq!(config.workspace_path(None), PathBuf::from("/srv/agent"));
    assert_eq!(config.model_name(), "claude");
    assert_eq!(config.agents.defaults.max_tokens, defaults::MAX_TOKENS);
    assert_eq!(config.providers.anthropic.api_key, "sk-test");
    assert!(config.providers.openai.api_key.is_empty());
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonConfigSource
        .load(&path, &MemoryEnvironmentProvider::new())
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_workspace_path_expands_home() {
    let config = Config::default();
    assert_eq!(
        config.workspace_path(Some(Path::new("/home/claw"))),
        PathBuf::from("/home/claw/.picoclaw/workspace")
    );
}

#[test]
fn test_env_overrides_replace_file_values() {
    let env = MemoryEnvironmentProvider::new()
        .with_var("PICOCLAW_AGENTS_DEFAULTS_WORKSPACE", "/from/env")
        .with_var("PICOCLAW_AGENTS_DEFAULTS_RESTRICT_TO_WORKSPACE", "false")
        .with_var("PICOCLAW_AGENTS_DEFAULTS_MAX_TOKENS", "1024")
        .with_var("PICOCLAW_PROVIDERS_OPENROUTER_API_KEY", "or-key")
        .with_var("PICOCLAW_PROVIDERS_OLLAMA_API_BASE", "http://localhost:11434");
    let mut config = Config::default();

    config.apply_env_overrides(&env).unwrap();

    assert_eq!(config.agents.defaults.workspace, "/from/env");
    assert!(!config.agents.defaults.restrict_to_workspace);
    assert_eq!(config.agents.defaults.max_tokens, 1024);
    assert_eq!(config.providers.openrouter.api_key, "or-key");
    assert_eq!(config.providers.ollama.api_base, "http://localhost:11434");
    assert_eq!(config.model_name(), defaults::MODEL);
}

#[test]
fn test_unparseable_override_is_reported() {
    let env = MemoryEnvironmentProvider::new()
        .with_var("PICOCLAW_AGENTS_DEFAULTS_MAX_TOKENS", "lots");
    let mut config = Config::default();

    let err = config.apply_env_overrides(&env).unwrap_err();
    assert!(matches!(err, ConfigError::EnvironmentParsingFailed { .. }));
}
