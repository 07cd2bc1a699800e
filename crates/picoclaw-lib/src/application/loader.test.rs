use super::*;
use crate::config::JsonConfigSource;
use crate::envfile::MemoryEnvironmentProvider;
use crate::paths::ENV_FILE_OVERRIDE_VAR;
use crate::testing::TempDirFixture;
use std::path::Path;

const KEY: &str = "TEST_PICOCLAW_ENV_ORDER";

struct FixedWorkspace(PathBuf);

impl ConfigSource for FixedWorkspace {
    fn load(&self, _path: &Path, _env: &dyn EnvironmentProvider) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        config.agents.defaults.workspace = self.0.to_string_lossy().into_owned();
        Ok(config)
    }
}

struct BrokenSource;

impl ConfigSource for BrokenSource {
    fn load(&self, path: &Path, _env: &dyn EnvironmentProvider) -> Result<Config, ConfigError> {
        Err(ConfigError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }
}

#[test]
fn test_load_order_and_no_overwrite() {
    let home = TempDirFixture::new().unwrap();
    let cwd = TempDirFixture::new().unwrap();
    home.write_file(".picoclaw/.env.picoclaw", &format!("{KEY}=home-picoclaw\n")).unwrap();
    home.write_file(".picoclaw/.env", &format!("{KEY}=home\n")).unwrap();
    home.write_file(".picoclaw/workspace/.env.picoclaw", &format!("{KEY}=workspace-picoclaw\n"))
        .unwrap();
    home.write_file(".picoclaw/workspace/.env", &format!("{KEY}=workspace\n")).unwrap();
    cwd.write_file(".env", &format!("{KEY}=cwd\n")).unwrap();

    let env = MemoryEnvironmentProvider::new()
        .with_home(home.path())
        .with_current_dir(cwd.path());
    let registry = LoadedEnvFiles::new();

    let outcome = CascadingConfigLoader::new(&env, &JsonConfigSource, &registry)
        .load()
        .unwrap();

    assert_eq!(env.var(KEY).as_deref(), Some("home-picoclaw"));
    let expected = vec![
        home.path().join(".picoclaw/.env.picoclaw"),
        home.path().join(".picoclaw/.env"),
        cwd.path().join(".env"),
        home.path().join(".picoclaw/workspace/.env.picoclaw"),
        home.path().join(".picoclaw/workspace/.env"),
    ];
    assert_eq!(outcome.loaded_env_files, expected);
    assert_eq!(registry.snapshot(), expected);
}

#[test]
fn test_override_file_has_highest_priority() {
    let home = TempDirFixture::new().unwrap();
    let custom = TempDirFixture::new().unwrap();
    custom.write_file(".env.custom", "TEST_PICOCLAW_ENV_CUSTOM=from-custom\n").unwrap();
    home.write_file(".picoclaw/.env.picoclaw", "TEST_PICOCLAW_ENV_CUSTOM=from-home\n").unwrap();
    let custom_path = custom.path().join(".env.custom");

    let env = MemoryEnvironmentProvider::new()
        .with_home(home.path())
        .with_var(ENV_FILE_OVERRIDE_VAR, &custom_path.to_string_lossy());
    let registry = LoadedEnvFiles::new();

    let outcome = CascadingConfigLoader::new(&env, &JsonConfigSource, &registry)
        .load()
        .unwrap();

    assert_eq!(env.var("TEST_PICOCLAW_ENV_CUSTOM").as_deref(), Some("from-custom"));
    assert_eq!(outcome.loaded_env_files[0], custom_path);
    assert_eq!(outcome.loaded_env_files.len(), 2);
}

#[test]
fn test_existing_environment_is_never_overwritten() {
    let home = TempDirFixture::new().unwrap();
    home.write_file(".picoclaw/.env.picoclaw", "NO_OVERWRITE=from-file\n").unwrap();
    home.write_file(".picoclaw/workspace/.env", "NO_OVERWRITE=from-workspace\n").unwrap();

    let env = MemoryEnvironmentProvider::new()
        .with_home(home.path())
        .with_var("NO_OVERWRITE", "from-process");
    let registry = LoadedEnvFiles::new();

    CascadingConfigLoader::new(&env, &JsonConfigSource, &registry)
        .load()
        .unwrap();

    assert_eq!(env.var("NO_OVERWRITE").as_deref(), Some("from-process"));
    assert_eq!(registry.snapshot().len(), 2);
}

#[test]
fn test_same_file_reached_twice_is_loaded_once() {
    let home = TempDirFixture::new().unwrap();
    home.write_file(".picoclaw/.env", "DEDUP=1\n").unwrap();
    home.write_file(".picoclaw/.env.picoclaw", "PICO=1\n").unwrap();
    let config_dir = home.path().join(".picoclaw");

    // cwd and workspace both point back at the config directory
    let env = MemoryEnvironmentProvider::new()
        .with_home(home.path())
        .with_current_dir(&config_dir);
    let registry = LoadedEnvFiles::new();
    let source = FixedWorkspace(config_dir.join("sub/.."));

    let outcome = CascadingConfigLoader::new(&env, &source, &registry)
        .load()
        .unwrap();

    assert_eq!(
        outcome.loaded_env_files,
        vec![config_dir.join(".env.picoclaw"), config_dir.join(".env")]
    );
}

#[test]
fn test_env_file_values_reach_the_config_source() {
    let home = TempDirFixture::new().unwrap();
    let workspace = TempDirFixture::new().unwrap();
    home.write_file(
        ".picoclaw/.env.picoclaw",
        &format!(
            "PICOCLAW_AGENTS_DEFAULTS_WORKSPACE={}\n",
            workspace.path().display()
        ),
    )
    .unwrap();
    workspace.write_file(".env", "FROM_WORKSPACE=yes\n").unwrap();

    let env = MemoryEnvironmentProvider::new().with_home(home.path());
    let registry = LoadedEnvFiles::new();

    let outcome = CascadingConfigLoader::new(&env, &JsonConfigSource, &registry)
        .load()
        .unwrap();

    assert_eq!(outcome.config.workspace_path(None), workspace.path());
    assert_eq!(env.var("FROM_WORKSPACE").as_deref(), Some("yes"));
    assert_eq!(outcome.loaded_env_files.last(), Some(&workspace.path().join(".env")));
}

#[test]
fn test_read_failure_aborts_and_publishes_partial_list() {
    let home = TempDirFixture::new().unwrap();
    home.write_file(".picoclaw/.env.picoclaw", "FIRST=1\n").unwrap();
    home.create_dir(".picoclaw/.env").unwrap();
    home.write_file(".picoclaw/workspace/.env", "NEVER=1\n").unwrap();

    let env = MemoryEnvironmentProvider::new().with_home(home.path());
    let registry = LoadedEnvFiles::new();

    let err = CascadingConfigLoader::new(&env, &JsonConfigSource, &registry)
        .load()
        .unwrap_err();

    match err {
        ConfigError::EnvFile { path, .. } => assert_eq!(path, home.path().join(".picoclaw/.env")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        registry.snapshot(),
        vec![home.path().join(".picoclaw/.env.picoclaw")]
    );
    assert!(!env.contains("NEVER"));
}

#[test]
fn test_config_failure_publishes_pre_config_files() {
    let home = TempDirFixture::new().unwrap();
    home.write_file(".picoclaw/.env", "PRE=1\n").unwrap();

    let env = MemoryEnvironmentProvider::new().with_home(home.path());
    let registry = LoadedEnvFiles::new();

    let err = CascadingConfigLoader::new(&env, &BrokenSource, &registry)
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(registry.snapshot(), vec![home.path().join(".picoclaw/.env")]);
}

#[test]
fn test_later_load_replaces_snapshot() {
    let first = TempDirFixture::new().unwrap();
    first.write_file(".picoclaw/.env", "A=1\n").unwrap();
    let second = TempDirFixture::new().unwrap();

    let registry = LoadedEnvFiles::new();
    let env = MemoryEnvironmentProvider::new().with_home(first.path());
    CascadingConfigLoader::new(&env, &JsonConfigSource, &registry)
        .load()
        .unwrap();
    assert_eq!(registry.snapshot().len(), 1);

    let env = MemoryEnvironmentProvider::new().with_home(second.path());
    CascadingConfigLoader::new(&env, &JsonConfigSource, &registry)
        .load()
        .unwrap();
    assert!(registry.snapshot().is_empty());
}

#[test]
fn test_missing_home_is_reported() {
    let env = MemoryEnvironmentProvider::new();
    let registry = LoadedEnvFiles::new();
    registry.replace(vec![PathBuf::from("/stale")]);

    let err = CascadingConfigLoader::new(&env, &JsonConfigSource, &registry)
        .load()
        .unwrap_err();

    assert!(matches!(err, ConfigError::HomeDirUnavailable));
    assert!(registry.snapshot().is_empty());
}

#[test]
fn test_snapshot_is_a_copy() {
    let registry = LoadedEnvFiles::new();
    registry.replace(vec![PathBuf::from("/a")]);

    let mut copy = registry.snapshot();
    copy.push(PathBuf::from("/b"));

    assert_eq!(registry.snapshot(), vec![PathBuf::from("/a")]);
}
