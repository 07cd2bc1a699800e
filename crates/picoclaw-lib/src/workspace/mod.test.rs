use super::*;
use crate::envfile::MemoryEnvironmentProvider;

fn env() -> MemoryEnvironmentProvider {
    MemoryEnvironmentProvider::new()
        .with_home("/home/claw")
        .with_current_dir("/w")
}

#[test]
fn test_remote_refs_are_excluded() {
    let got = find_repos_outside_workspace(&env(), "/w", "/w/a,/outside/b,owner/repo");
    assert_eq!(got, vec![PathBuf::from("/outside/b")]);
}

#[test]
fn test_github_url_forms_are_never_outside() {
    let refs = "https://github.com/owner/repo,git@github.com:owner/repo.git,owner/repo.git";
    assert!(find_repos_outside_workspace(&env(), "/w", refs).is_empty());
}

#[test]
fn test_blank_inputs_yield_nothing() {
    assert!(find_repos_outside_workspace(&env(), "", "/outside").is_empty());
    assert!(find_repos_outside_workspace(&env(), "  ", "/outside").is_empty());
    assert!(find_repos_outside_workspace(&env(), "/w", "  ").is_empty());
    assert!(find_repos_outside_workspace(&env(), "/w", " , ,").is_empty());
}

#[test]
fn test_outside_paths_are_deduplicated_in_order() {
    let got = find_repos_outside_workspace(
        &env(),
        "/w",
        " /z/one , /a/two,/z/one/, /z/./one ,/w/inside",
    );
    assert_eq!(got, vec![PathBuf::from("/z/one"), PathBuf::from("/a/two")]);
}

#[test]
fn test_workspace_itself_and_descendants_are_inside() {
    let got = find_repos_outside_workspace(&env(), "/w/", "/w,/w/x/y,/w/x/../z");
    assert!(got.is_empty());
}

#[test]
fn test_parent_traversal_and_sibling_prefix_are_outside() {
    let got = find_repos_outside_workspace(&env(), "/w", "/w/../etc,/wide");
    assert_eq!(got, vec![PathBuf::from("/etc"), PathBuf::from("/wide")]);
}

#[test]
fn test_home_and_relative_entries_are_normalized() {
    let got = find_repos_outside_workspace(&env(), "~/ws", "~/ws/repo,~/elsewhere");
    assert_eq!(got, vec![PathBuf::from("/home/claw/elsewhere")]);

    let got = find_repos_outside_workspace(&env(), "/w", "../up/nested");
    assert_eq!(got, vec![PathBuf::from("/up/nested")]);
}

#[test]
fn test_dot_relative_owner_repo_shapes_count_as_remote() {
    assert!(find_repos_outside_workspace(&env(), "/w", "./local,../up").is_empty());
    assert!(has_remote_repo_refs("/abs/a,../up"));
}

#[test]
fn test_remote_pattern() {
    assert!(is_remote_repo_ref("thisisprabha/time-left"));
    assert!(is_remote_repo_ref("https://github.com/thisisprabha/networth"));
    assert!(is_remote_repo_ref("git@github.com:org/repo.git"));
    assert!(!is_remote_repo_ref("/abs/path"));
    assert!(!is_remote_repo_ref("a/b/c"));
    assert!(is_remote_repo_ref("./repo"));
    assert!(is_remote_repo_ref("../repo"));
    assert!(!is_remote_repo_ref("https://gitlab.com/owner/repo"));
}

#[test]
fn test_has_remote_repo_refs() {
    assert!(has_remote_repo_refs("/local/a, owner/repo"));
    assert!(!has_remote_repo_refs("/local/a,/local/b"));
    assert!(!has_remote_repo_refs(""));
}

#[test]
fn test_classify() {
    assert_eq!(
        RepoReference::classify("owner/repo", None, None),
        Some(RepoReference::Remote("owner/repo".to_string()))
    );
    assert_eq!(
        RepoReference::classify("/x/./y", None, None),
        Some(RepoReference::Local(PathBuf::from("/x/y")))
    );
    assert_eq!(RepoReference::classify("  ", None, None), None);
}
