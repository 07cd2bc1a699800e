//! Path normalization shared by env-file discovery and workspace checks
//!
//! A normalized path is the dedup key everywhere two paths are compared:
//! home-expanded, absolute, and lexically cleaned. Nothing here touches the
//! filesystem, so symlinks are not resolved.

pub mod candidates;

pub use candidates::{
    DOTENV_FILE_NAME, ENV_FILE_OVERRIDE_VAR, PICOCLAW_ENV_FILE_NAME, post_config_candidates,
    pre_config_candidates,
};

use crate::envfile::EnvironmentProvider;
use std::path::{Component, Path, PathBuf};

/// Expand `~` or a leading `~/` against `home`
///
/// Any other spelling (`~user`, `a/~`) is returned untouched, as is every
/// input when no home directory is known.
pub fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    match (home, raw) {
        (Some(home), "~") => home.to_path_buf(),
        (Some(home), _) if raw.starts_with("~/") => home.join(raw[2..].trim_start_matches('/')),
        _ => PathBuf::from(raw),
    }
}

fn is_tilde_form(raw: &str) -> bool {
    raw == "~" || raw.starts_with("~/")
}

/// Lexically clean a path: drop `.` segments, fold `..` into its parent
/// and collapse repeated separators. `..` directly under the root stays at
/// the root; leading `..` of a relative path is kept.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.into_iter().collect()
}

/// Normalize a raw path string into its comparison form
///
/// Returns `None` for blank input, which callers treat as "no candidate".
/// When the home directory is unknown a `~` path is only cleaned; when the
/// working directory is unknown a relative path is only cleaned.
pub fn normalize_path(raw: &str, home: Option<&Path>, cwd: Option<&Path>) -> Option<PathBuf> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if is_tilde_form(raw) && home.is_none() {
        return Some(clean_path(Path::new(raw)));
    }

    let expanded = expand_home(raw, home);
    if expanded.is_absolute() {
        return Some(clean_path(&expanded));
    }

    Some(match cwd {
        Some(cwd) => clean_path(&cwd.join(&expanded)),
        None => clean_path(&expanded),
    })
}

/// [`normalize_path`] with home and working directory taken from `env`
pub fn normalize_with(env: &dyn EnvironmentProvider, raw: &str) -> Option<PathBuf> {
    normalize_path(raw, env.home_dir().as_deref(), env.current_dir().as_deref())
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
