use super::*;
use crate::envfile::MemoryEnvironmentProvider;
use crate::testing::TempDirFixture;
use std::path::PathBuf;

struct NoBinaries;

impl BinaryProbe for NoBinaries {
    fn lookup(&self, _name: &str) -> Option<PathBuf> {
        None
    }
}

fn run(command: Commands, env: &MemoryEnvironmentProvider, registry: &LoadedEnvFiles) -> String {
    let mut out = Vec::new();
    execute_with(&mut out, command, env, &JsonConfigSource, registry, &NoBinaries).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_status_reports_loaded_env_files() {
    let home = TempDirFixture::new().unwrap();
    home.write_file(".picoclaw/.env.picoclaw", "A=1\n").unwrap();
    home.write_file(".picoclaw/config.json", r#"{"agents":{"defaults":{"model":"m1"}}}"#)
        .unwrap();
    let env = MemoryEnvironmentProvider::new().with_home(home.path());

    let output = run(Commands::Status, &env, &LoadedEnvFiles::new());

    assert!(output.contains("picoclaw Status"));
    assert!(output.contains("Model: m1"));
    assert!(output.contains(&format!(
        "  - {}",
        home.path().join(".picoclaw/.env.picoclaw").display()
    )));
}

#[test]
fn test_status_prints_load_error_and_succeeds() {
    let home = TempDirFixture::new().unwrap();
    home.write_file(".picoclaw/config.json", "{ broken").unwrap();
    let env = MemoryEnvironmentProvider::new().with_home(home.path());

    let output = run(Commands::Status, &env, &LoadedEnvFiles::new());

    assert!(output.starts_with("Error loading config: Failed to parse config file"));
}

#[test]
fn test_env_lists_partial_files_after_failure() {
    let home = TempDirFixture::new().unwrap();
    home.write_file(".picoclaw/.env.picoclaw", "A=1\n").unwrap();
    home.create_dir(".picoclaw/.env").unwrap();
    let env = MemoryEnvironmentProvider::new().with_home(home.path());

    let output = run(Commands::Env, &env, &LoadedEnvFiles::new());
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("Error loading config: loading env file"));
    assert_eq!(
        lines[1],
        home.path().join(".picoclaw/.env.picoclaw").display().to_string()
    );
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_env_with_nothing_loaded() {
    let home = TempDirFixture::new().unwrap();
    let env = MemoryEnvironmentProvider::new().with_home(home.path());

    let output = run(Commands::Env, &env, &LoadedEnvFiles::new());
    assert_eq!(output.trim(), "Env files loaded: none");
}

#[test]
fn test_session_key_command() {
    let env = MemoryEnvironmentProvider::new();
    let output = run(
        Commands::SessionKey {
            routed: "agent:main:main".to_string(),
            session: "cli:x".to_string(),
            channel: "cli".to_string(),
            agent: "main".to_string(),
        },
        &env,
        &LoadedEnvFiles::new(),
    );
    assert_eq!(output, "agent:main:cli:x\n");
}

#[test]
fn test_version_command() {
    let output = run(Commands::Version, &MemoryEnvironmentProvider::new(), &LoadedEnvFiles::new());
    assert!(output.starts_with("picoclaw "));
}
