//! Environment port
//!
//! Everything that reads or writes process-wide state during a cascading
//! load (variables, home directory, working directory) goes through this
//! trait.

use crate::primitives::EnvFileError;
use std::path::PathBuf;

/// Provider trait for process environment access
pub trait EnvironmentProvider {
    /// Look up a variable; `Some("")` means set but empty
    fn var(&self, key: &str) -> Option<String>;

    /// Set a variable, replacing any previous value
    fn set_var(&self, key: &str, value: &str) -> Result<(), EnvFileError>;

    /// Snapshot of every variable with a UTF-8 name and value
    fn vars(&self) -> Vec<(String, String)>;

    /// The user's home directory, if it can be determined
    fn home_dir(&self) -> Option<PathBuf>;

    /// The current working directory, if it can be determined
    fn current_dir(&self) -> Option<PathBuf>;

    /// Whether `key` is present at all
    fn contains(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

fn check_settable(key: &str, value: &str) -> Result<(), EnvFileError> {
    if key.is_empty() || key.contains(['=', '\0']) {
        return Err(EnvFileError::InvalidKey {
            key: key.to_string(),
        });
    }
    if value.contains('\0') {
        return Err(EnvFileError::InvalidValue {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Live implementation backed by the real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveEnvironmentProvider;

impl EnvironmentProvider for LiveEnvironmentProvider {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set_var(&self, key: &str, value: &str) -> Result<(), EnvFileError> {
        check_settable(key, value)?;
        // SAFETY: picoclaw mutates the environment only from the single
        // startup thread, before any worker threads exist.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }

    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }
}

/// In-memory environment for tests
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MemoryEnvironmentProvider {
    vars: std::sync::RwLock<std::collections::BTreeMap<String, String>>,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MemoryEnvironmentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(self, key: &str, value: &str) -> Self {
        self.write().insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Remove a variable
    pub fn remove_var(&self, key: &str) {
        self.write().remove(key);
    }

    fn write(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, std::collections::BTreeMap<String, String>> {
        self.vars.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl EnvironmentProvider for MemoryEnvironmentProvider {
    fn var(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_var(&self, key: &str, value: &str) -> Result<(), EnvFileError> {
        check_settable(key, value)?;
        self.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        self.cwd.clone()
    }
}

#[cfg(test)]
mod tests {
    include!("provider.test.rs");
}
