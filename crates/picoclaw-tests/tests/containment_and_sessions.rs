//! Workspace containment and session key resolution through the public API

use picoclaw_lib::envfile::MemoryEnvironmentProvider;
use picoclaw_lib::resolve_session_key;
use picoclaw_lib::workspace::{find_repos_outside_workspace, is_remote_repo_ref};
use std::path::PathBuf;

#[test]
fn only_local_paths_outside_workspace_are_reported() {
    let env = MemoryEnvironmentProvider::new()
        .with_home("/home/tester")
        .with_current_dir("/home/tester");

    let outside = find_repos_outside_workspace(&env, "/w", "/w/a,/outside/b,owner/repo");

    assert_eq!(outside, vec![PathBuf::from("/outside/b")]);
}

#[test]
fn hosted_repository_forms_are_never_outside() {
    let env = MemoryEnvironmentProvider::new().with_home("/home/tester");
    let refs = "https://github.com/owner/repo,https://github.com/owner/repo.git,\
                git@github.com:owner/repo.git,owner/repo.git";

    for entry in refs.split(',') {
        assert!(is_remote_repo_ref(entry), "{entry}");
    }
    assert!(find_repos_outside_workspace(&env, "/w", refs).is_empty());
}

#[test]
fn session_key_resolution_scenarios() {
    let routed = "agent:main:main";

    assert_eq!(resolve_session_key(routed, "", "cli", "main"), "agent:main:main");
    assert_eq!(
        resolve_session_key(routed, "agent:main:custom", "cli", "main"),
        "agent:main:custom"
    );
    assert_eq!(resolve_session_key(routed, "cli:x", "cli", "main"), "agent:main:cli:x");
    assert_eq!(
        resolve_session_key(routed, "telegram:abc", "telegram", "main"),
        "agent:main:main"
    );
}
