use super::*;
use crate::envfile::MemoryEnvironmentProvider;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = r#"
# comment
export TEST_ENV_A=from-file
TEST_ENV_B = "hello world"
TEST_ENV_C='single quoted'
TEST_ENV_D=
INVALID LINE
"#;

fn write_env(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_parses_and_preserves_existing_vars() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", SAMPLE);
    let env = MemoryEnvironmentProvider::new().with_var("TEST_ENV_A", "from-process");

    let loaded = load_env_file(&env, &path, false).unwrap();

    assert!(loaded);
    assert_eq!(env.var("TEST_ENV_A").as_deref(), Some("from-process"));
    assert_eq!(env.var("TEST_ENV_B").as_deref(), Some("hello world"));
    assert_eq!(env.var("TEST_ENV_C").as_deref(), Some("single quoted"));
    assert_eq!(env.var("TEST_ENV_D").as_deref(), Some(""));
    assert_eq!(env.vars().len(), 4);
}

#[test]
fn test_overwrite_replaces_existing() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "TEST_ENV_OVERWRITE=new-value\n");
    let env = MemoryEnvironmentProvider::new().with_var("TEST_ENV_OVERWRITE", "old-value");

    assert!(load_env_file(&env, &path, true).unwrap());
    assert_eq!(env.var("TEST_ENV_OVERWRITE").as_deref(), Some("new-value"));
}

#[test]
fn test_existing_empty_value_still_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "EMPTY_BUT_SET=from-file\n");
    let env = MemoryEnvironmentProvider::new().with_var("EMPTY_BUT_SET", "");

    assert!(load_env_file(&env, &path, false).unwrap());
    assert_eq!(env.var("EMPTY_BUT_SET").as_deref(), Some(""));
}

#[test]
fn test_second_load_without_overwrite_is_inert() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "IDEMPOTENT=first\n");
    let env = MemoryEnvironmentProvider::new();

    assert!(load_env_file(&env, &path, false).unwrap());
    fs::write(&path, "IDEMPOTENT=second\n").unwrap();
    assert!(load_env_file(&env, &path, false).unwrap());

    assert_eq!(env.var("IDEMPOTENT").as_deref(), Some("first"));
}

#[test]
fn test_missing_file_and_blank_path_are_not_errors() {
    let dir = TempDir::new().unwrap();
    let env = MemoryEnvironmentProvider::new();
    let missing = dir.path().join("missing.env");

    assert!(!load_env_file(&env, &missing.to_string_lossy(), false).unwrap());
    assert!(!load_env_file(&env, "   ", false).unwrap());
}

#[test]
fn test_file_without_usable_lines_still_counts_as_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_env(&dir, ".env", "# nothing here\n\nnot a pair\n");
    let env = MemoryEnvironmentProvider::new();

    assert!(load_env_file(&env, &path, false).unwrap());
    assert!(env.vars().is_empty());
}

#[test]
fn test_expands_home_before_opening() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".env.custom"), "FROM_HOME=yes\n").unwrap();
    let env = MemoryEnvironmentProvider::new().with_home(home.path());

    assert!(load_env_file(&env, "~/.env.custom", false).unwrap());
    assert_eq!(env.var("FROM_HOME").as_deref(), Some("yes"));
}

#[test]
fn test_directory_path_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let env = MemoryEnvironmentProvider::new();

    let err = load_env_file(&env, &dir.path().to_string_lossy(), false).unwrap_err();
    assert!(matches!(err, EnvFileError::Read { .. }));
}

#[test]
fn test_non_utf8_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, b"# caf\xe9 settings\nBAD=\xff\xfe\nGOOD=ok\r\n").unwrap();
    let env = MemoryEnvironmentProvider::new();

    assert!(load_env_file(&env, &path.to_string_lossy(), false).unwrap());
    assert_eq!(env.var("GOOD").as_deref(), Some("ok"));
    assert_eq!(env.var("BAD"), None);
}
