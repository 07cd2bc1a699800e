//! Binary availability lookup

use crate::envfile::EnvironmentProvider;
use std::path::{Path, PathBuf};

/// Provider trait for locating executables
pub trait BinaryProbe {
    /// Full path of `name` if it can be executed
    fn lookup(&self, name: &str) -> Option<PathBuf>;
}

/// Searches the directories of `PATH` as seen by the environment port
pub struct PathProbe<'a> {
    env: &'a dyn EnvironmentProvider,
}

impl<'a> PathProbe<'a> {
    pub fn new(env: &'a dyn EnvironmentProvider) -> Self {
        Self { env }
    }
}

impl BinaryProbe for PathProbe<'_> {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        let path_var = self.env.var("PATH")?;
        std::env::split_paths(&path_var)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}

#[cfg(test)]
mod tests {
    include!("probe.test.rs");
}
