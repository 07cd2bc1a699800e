//! End-to-end tests for the cascading env-file load
//!
//! Real files in temporary directories, in-memory process environment.

use anyhow::Result;
use picoclaw_lib::application::CascadingConfigLoader;
use picoclaw_lib::config::JsonConfigSource;
use picoclaw_lib::envfile::EnvironmentProvider;
use picoclaw_lib::paths::ENV_FILE_OVERRIDE_VAR;
use picoclaw_lib::primitives::ConfigError;
use picoclaw_tests::HermeticEnvBuilder;

const KEY: &str = "PICOCLAW_E2E_ORDER";

fn define(value: &str) -> String {
    format!("{KEY}={value}\n")
}

#[test]
fn e2e_home_picoclaw_file_wins_over_every_other_level() -> Result<()> {
    let h = HermeticEnvBuilder::new()?
        .with_home_file(".picoclaw/.env.picoclaw", &define("home-picoclaw"))?
        .with_home_file(".picoclaw/.env", &define("home"))?
        .with_cwd_file(".env", &define("cwd"))?
        .with_home_file(".picoclaw/workspace/.env.picoclaw", &define("ws-picoclaw"))?
        .with_home_file(".picoclaw/workspace/.env", &define("ws"))?
        .build();

    let outcome = CascadingConfigLoader::new(&h.env, &JsonConfigSource, &h.registry).load()?;

    assert_eq!(h.env.var(KEY).as_deref(), Some("home-picoclaw"));
    let expected = vec![
        h.config_dir().join(".env.picoclaw"),
        h.config_dir().join(".env"),
        h.cwd_path().join(".env"),
        h.workspace().join(".env.picoclaw"),
        h.workspace().join(".env"),
    ];
    assert_eq!(outcome.loaded_env_files, expected);
    assert_eq!(h.registry.snapshot(), expected);
    Ok(())
}

#[test]
fn e2e_override_file_wins_and_is_listed() -> Result<()> {
    let builder = HermeticEnvBuilder::new()?
        .with_home_file(".picoclaw/.env.picoclaw", &define("home-picoclaw"))?
        .with_cwd_file("secrets/custom.env", &define("custom"))?;
    let h = builder.build();
    let custom = h.cwd_path().join("secrets/custom.env");
    h.env.set_var(ENV_FILE_OVERRIDE_VAR, &custom.to_string_lossy())?;

    let outcome = CascadingConfigLoader::new(&h.env, &JsonConfigSource, &h.registry).load()?;

    assert_eq!(h.env.var(KEY).as_deref(), Some("custom"));
    assert_eq!(outcome.loaded_env_files.first(), Some(&custom));
    assert!(outcome.loaded_env_files.contains(&h.config_dir().join(".env.picoclaw")));
    Ok(())
}

#[test]
fn e2e_preexisting_variable_is_never_replaced() -> Result<()> {
    let h = HermeticEnvBuilder::new()?
        .with_var(KEY, "from-shell")
        .with_home_file(".picoclaw/.env.picoclaw", &define("home-picoclaw"))?
        .with_cwd_file(".env", &define("cwd"))?
        .build();

    let loader = CascadingConfigLoader::new(&h.env, &JsonConfigSource, &h.registry);
    loader.load()?;
    loader.load()?;

    assert_eq!(h.env.var(KEY).as_deref(), Some("from-shell"));
    Ok(())
}

#[test]
fn e2e_cwd_inside_config_dir_is_loaded_once() -> Result<()> {
    let h = HermeticEnvBuilder::new()?
        .with_home_file(".picoclaw/.env", &define("home"))?
        .build();
    let env = picoclaw_lib::envfile::MemoryEnvironmentProvider::new()
        .with_home(h.home_path())
        .with_current_dir(h.config_dir());

    let outcome = CascadingConfigLoader::new(&env, &JsonConfigSource, &h.registry).load()?;

    assert_eq!(outcome.loaded_env_files, vec![h.config_dir().join(".env")]);
    Ok(())
}

#[test]
fn e2e_env_file_sets_workspace_before_config_resolves() -> Result<()> {
    let h = HermeticEnvBuilder::new()?
        .with_home_file(".picoclaw/config.json", r#"{"agents":{"defaults":{"model":"gpt-4o"}}}"#)?
        .build();
    let custom_ws = h.cwd_path().join("custom-ws");
    h.home.write_file(
        ".picoclaw/.env",
        &format!("PICOCLAW_AGENTS_DEFAULTS_WORKSPACE={}\n", custom_ws.display()),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    h.cwd.write_file("custom-ws/.env", &define("custom-ws"))
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let outcome = CascadingConfigLoader::new(&h.env, &JsonConfigSource, &h.registry).load()?;

    assert_eq!(outcome.config.model_name(), "gpt-4o");
    assert_eq!(outcome.config.agents.defaults.workspace, custom_ws.to_string_lossy());
    assert_eq!(outcome.loaded_env_files.last(), Some(&custom_ws.join(".env")));
    assert_eq!(h.env.var(KEY).as_deref(), Some("custom-ws"));
    Ok(())
}

#[test]
fn e2e_unreadable_candidate_publishes_partial_list() -> Result<()> {
    let h = HermeticEnvBuilder::new()?
        .with_home_file(".picoclaw/.env.picoclaw", &define("home-picoclaw"))?
        .build();
    // A directory where a file is expected fails to read.
    h.home.create_dir(".picoclaw/.env").map_err(|e| anyhow::anyhow!("{e}"))?;

    let err = CascadingConfigLoader::new(&h.env, &JsonConfigSource, &h.registry)
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::EnvFile { ref path, .. } if *path == h.config_dir().join(".env")));
    assert_eq!(h.registry.snapshot(), vec![h.config_dir().join(".env.picoclaw")]);
    Ok(())
}

#[test]
fn e2e_malformed_config_reports_parse_error() -> Result<()> {
    let h = HermeticEnvBuilder::new()?
        .with_home_file(".picoclaw/config.json", "{ not json")?
        .with_cwd_file(".env", &define("cwd"))?
        .build();

    let err = CascadingConfigLoader::new(&h.env, &JsonConfigSource, &h.registry)
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    // Pre-config files were already applied.
    assert_eq!(h.env.var(KEY).as_deref(), Some("cwd"));
    assert_eq!(h.registry.snapshot(), vec![h.cwd_path().join(".env")]);
    Ok(())
}
