//! Cascading configuration load
//!
//! Coordinates env-file discovery around the structured config:
//! pre-config env files -> config.json -> workspace env files. Files are
//! applied without overwriting, so earlier candidates win.

use crate::config::{Config, ConfigSource, config_path};
use crate::envfile::{EnvironmentProvider, load_env_file};
use crate::paths::{normalize_with, post_config_candidates, pre_config_candidates};
use crate::primitives::ConfigError;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use super::env::EnvironmentConfig;

static GLOBAL_LOADED_ENV_FILES: OnceLock<LoadedEnvFiles> = OnceLock::new();

/// Snapshot of the env files applied by the latest cascading load
///
/// Each load replaces the whole list; readers get a copy and never observe
/// a list being built.
#[derive(Debug, Default)]
pub struct LoadedEnvFiles {
    files: RwLock<Arc<[PathBuf]>>,
}

impl LoadedEnvFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance used by the CLI
    pub fn global() -> &'static LoadedEnvFiles {
        GLOBAL_LOADED_ENV_FILES.get_or_init(LoadedEnvFiles::new)
    }

    /// Publish `files` as the current snapshot
    pub fn replace(&self, files: Vec<PathBuf>) {
        let files: Arc<[PathBuf]> = files.into();
        *self.files.write().unwrap_or_else(PoisonError::into_inner) = files;
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .to_vec()
    }
}

/// Result of a successful cascading load
#[derive(Debug, Clone)]
pub struct CascadeOutcome {
    pub config: Config,
    /// Normalized env files actually read, in load order
    pub loaded_env_files: Vec<PathBuf>,
}

/// Per-call bookkeeping: files loaded so far and every path already tried
#[derive(Default)]
struct CascadeState {
    loaded: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

/// Drives one cascading load against an environment and a config source
pub struct CascadingConfigLoader<'a> {
    env: &'a dyn EnvironmentProvider,
    source: &'a dyn ConfigSource,
    registry: &'a LoadedEnvFiles,
}

impl<'a> CascadingConfigLoader<'a> {
    pub fn new(
        env: &'a dyn EnvironmentProvider,
        source: &'a dyn ConfigSource,
        registry: &'a LoadedEnvFiles,
    ) -> Self {
        Self {
            env,
            source,
            registry,
        }
    }

    /// Run the cascade, publishing the loaded list even when a step fails
    pub fn load(&self) -> Result<CascadeOutcome, ConfigError> {
        let mut state = CascadeState::default();
        let result = self.run(&mut state);
        self.registry.replace(state.loaded.clone());

        let config = result?;
        Ok(CascadeOutcome {
            config,
            loaded_env_files: state.loaded,
        })
    }

    fn run(&self, state: &mut CascadeState) -> Result<Config, ConfigError> {
        let config_path = config_path(self.env)?;

        let env_config = EnvironmentConfig::from_provider(self.env)?;
        let cwd = self.env.current_dir();
        let pre = pre_config_candidates(&config_path, env_config.env_file_override(), cwd.as_deref());
        self.load_candidates(pre, state)?;

        let config = self.source.load(&config_path, self.env)?;

        let home = self.env.home_dir();
        let workspace = config.workspace_path(home.as_deref());
        self.load_candidates(post_config_candidates(&workspace), state)?;

        tracing::info!(
            files = state.loaded.len(),
            workspace = %workspace.display(),
            "configuration loaded"
        );
        Ok(config)
    }

    fn load_candidates(
        &self,
        candidates: Vec<PathBuf>,
        state: &mut CascadeState,
    ) -> Result<(), ConfigError> {
        for candidate in candidates {
            let Some(normalized) = normalize_with(self.env, &candidate.to_string_lossy()) else {
                continue;
            };
            if state.seen.contains(&normalized) {
                tracing::trace!(path = %normalized.display(), "env file already considered");
                continue;
            }

            let loaded = load_env_file(self.env, &normalized.to_string_lossy(), false).map_err(
                |source| {
                    tracing::warn!(path = %normalized.display(), "env file cascade aborted");
                    ConfigError::EnvFile {
                        path: normalized.clone(),
                        source,
                    }
                },
            )?;
            state.seen.insert(normalized.clone());
            if loaded {
                state.loaded.push(normalized);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
