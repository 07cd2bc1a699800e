//! Ordered env-file candidates for the two phases of a cascading load
//!
//! Order matters: files are applied without overwriting, so the first
//! candidate to define a key wins.

use std::path::{Path, PathBuf};

/// Control variable naming an env file that outranks every other candidate
pub const ENV_FILE_OVERRIDE_VAR: &str = "PICOCLAW_ENV_FILE";

/// Tool-specific env file name, checked before the generic one
pub const PICOCLAW_ENV_FILE_NAME: &str = ".env.picoclaw";

pub const DOTENV_FILE_NAME: &str = ".env";

/// Candidates loaded before the structured config is parsed
///
/// `[override, <config dir>/.env.picoclaw, <config dir>/.env, <cwd>/.env]`,
/// with the override only when non-blank and the cwd entry only when known.
pub fn pre_config_candidates(
    config_path: &Path,
    override_path: Option<&str>,
    cwd: Option<&Path>,
) -> Vec<PathBuf> {
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let mut paths = Vec::with_capacity(4);

    if let Some(custom) = override_path.map(str::trim).filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(custom));
    }
    paths.push(config_dir.join(PICOCLAW_ENV_FILE_NAME));
    paths.push(config_dir.join(DOTENV_FILE_NAME));
    if let Some(cwd) = cwd.filter(|dir| !dir.as_os_str().is_empty()) {
        paths.push(cwd.join(DOTENV_FILE_NAME));
    }

    paths
}

/// Candidates loaded once the workspace is known; empty for a blank workspace
pub fn post_config_candidates(workspace: &Path) -> Vec<PathBuf> {
    if workspace.to_string_lossy().trim().is_empty() {
        return Vec::new();
    }
    vec![
        workspace.join(PICOCLAW_ENV_FILE_NAME),
        workspace.join(DOTENV_FILE_NAME),
    ]
}

#[cfg(test)]
mod tests {
    include!("candidates.test.rs");
}
