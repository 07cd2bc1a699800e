//! Workspace containment for configured repository references
//!
//! `GIT_REPOS` mixes local checkouts with hosted repositories. Only the
//! local ones can fall outside the workspace; remote references are
//! classified out before any path is compared.

use crate::envfile::EnvironmentProvider;
use crate::paths::normalize_path;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static REMOTE_REPO_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https://github\.com/|git@github\.com:)?[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+(\.git)?$",
    )
    .expect("remote repo pattern compiles")
});

/// One entry of a comma-separated repository list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoReference {
    /// Filesystem checkout, normalized
    Local(PathBuf),
    /// `owner/repo`, optionally as a GitHub HTTPS or SSH URL
    Remote(String),
}

/// Whether `entry` names a hosted repository rather than a path
///
/// Purely by shape: `./x` and `../x` also look like `owner/repo` and are
/// classified as remote.
pub fn is_remote_repo_ref(entry: &str) -> bool {
    REMOTE_REPO_REF.is_match(entry.trim())
}

/// Whether any entry of `csv_refs` is a remote reference
pub fn has_remote_repo_refs(csv_refs: &str) -> bool {
    split_refs(csv_refs).any(is_remote_repo_ref)
}

fn split_refs(csv_refs: &str) -> impl Iterator<Item = &str> {
    csv_refs
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

impl RepoReference {
    /// Classify one trimmed entry; `None` when it normalizes to nothing
    pub fn classify(entry: &str, home: Option<&Path>, cwd: Option<&Path>) -> Option<Self> {
        if is_remote_repo_ref(entry) {
            return Some(Self::Remote(entry.trim().to_string()));
        }
        normalize_path(entry, home, cwd).map(Self::Local)
    }
}

/// Whether normalized `path` equals or descends from normalized `workspace`
pub fn is_path_within_workspace(path: &Path, workspace: &Path) -> bool {
    path.strip_prefix(workspace).is_ok()
}

/// Local repository paths from `csv_refs` that resolve outside `workspace`
///
/// First-occurrence order, deduplicated by normalized path. Empty when
/// either input is blank.
pub fn find_repos_outside_workspace(
    env: &dyn EnvironmentProvider,
    workspace: &str,
    csv_refs: &str,
) -> Vec<PathBuf> {
    let home = env.home_dir();
    let cwd = env.current_dir();

    let Some(workspace) = normalize_path(workspace, home.as_deref(), cwd.as_deref()) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut outside = Vec::new();
    for entry in split_refs(csv_refs) {
        let Some(RepoReference::Local(path)) =
            RepoReference::classify(entry, home.as_deref(), cwd.as_deref())
        else {
            continue;
        };
        if is_path_within_workspace(&path, &workspace) {
            continue;
        }
        if seen.insert(path.clone()) {
            tracing::debug!(repo = %path.display(), "repository outside workspace");
            outside.push(path);
        }
    }

    outside
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
