use super::*;
use crate::envfile::MemoryEnvironmentProvider;
use crate::testing::TempDirFixture;

#[cfg(unix)]
#[test]
fn test_finds_executable_on_path() {
    use std::os::unix::fs::PermissionsExt;

    let bin = TempDirFixture::new().unwrap();
    bin.write_file("jq", "#!/bin/sh\n").unwrap();
    bin.write_file("notexec", "data").unwrap();
    let jq = bin.path().join("jq");
    std::fs::set_permissions(&jq, std::fs::Permissions::from_mode(0o755)).unwrap();

    let path_var = format!("/nonexistent-dir:{}", bin.path().display());
    let env = MemoryEnvironmentProvider::new().with_var("PATH", &path_var);
    let probe = PathProbe::new(&env);

    assert_eq!(probe.lookup("jq"), Some(jq));
    assert_eq!(probe.lookup("notexec"), None);
    assert_eq!(probe.lookup("missing"), None);
}

#[test]
fn test_without_path_nothing_is_found() {
    let env = MemoryEnvironmentProvider::new();
    assert_eq!(PathProbe::new(&env).lookup("git"), None);
}
