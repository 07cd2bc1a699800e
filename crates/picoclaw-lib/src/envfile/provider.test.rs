use super::*;

#[test]
fn test_memory_provider_roundtrip() {
    let env = MemoryEnvironmentProvider::new()
        .with_var("EXISTING", "")
        .with_home("/home/claw")
        .with_current_dir("/work");

    assert_eq!(env.var("EXISTING"), Some(String::new()));
    assert!(env.contains("EXISTING"));
    assert!(!env.contains("MISSING"));

    env.set_var("MISSING", "now set").unwrap();
    assert_eq!(env.var("MISSING").as_deref(), Some("now set"));

    env.remove_var("EXISTING");
    assert!(!env.contains("EXISTING"));
    assert_eq!(env.home_dir(), Some(PathBuf::from("/home/claw")));
    assert_eq!(env.current_dir(), Some(PathBuf::from("/work")));
}

#[test]
fn test_set_var_rejects_values_the_os_cannot_hold() {
    let env = MemoryEnvironmentProvider::new();

    assert!(matches!(
        env.set_var("NUL_VALUE", "a\0b"),
        Err(EnvFileError::InvalidValue { .. })
    ));
    assert!(matches!(
        env.set_var("A=B", "x"),
        Err(EnvFileError::InvalidKey { .. })
    ));
    assert!(env.vars().is_empty());
}

#[test]
fn test_live_provider_sets_process_variable() {
    let live = LiveEnvironmentProvider;
    let key = "PICOCLAW_TEST_LIVE_PROVIDER_ROUNDTRIP";

    live.set_var(key, "from-live").unwrap();
    assert_eq!(live.var(key).as_deref(), Some("from-live"));
    assert!(live.vars().iter().any(|(k, v)| k == key && v == "from-live"));
    assert!(live.current_dir().is_some());

    unsafe {
        std::env::remove_var(key);
    }
}
