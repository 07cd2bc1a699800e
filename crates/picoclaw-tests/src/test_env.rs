//! Hermetic test environment for end-to-end cascade tests
//!
//! Builds a throwaway home directory, a separate working directory, and an
//! in-memory environment pointing at both, so nothing touches the real
//! process environment or `~/.picoclaw`.

use anyhow::{Result, anyhow};
use picoclaw_lib::application::LoadedEnvFiles;
use picoclaw_lib::envfile::MemoryEnvironmentProvider;
use picoclaw_lib::status::BinaryProbe;
use picoclaw_lib::testing::TempDirFixture;
use std::path::{Path, PathBuf};

/// Isolated home + cwd pair with its own loaded-files registry
pub struct HermeticEnvironment {
    pub home: TempDirFixture,
    pub cwd: TempDirFixture,
    pub env: MemoryEnvironmentProvider,
    pub registry: LoadedEnvFiles,
}

impl HermeticEnvironment {
    /// `~/.picoclaw`
    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join(".picoclaw")
    }

    /// Default workspace, `~/.picoclaw/workspace`
    pub fn workspace(&self) -> PathBuf {
        self.config_dir().join("workspace")
    }

    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    pub fn cwd_path(&self) -> &Path {
        self.cwd.path()
    }
}

/// Builder for [`HermeticEnvironment`]
pub struct HermeticEnvBuilder {
    home: TempDirFixture,
    cwd: TempDirFixture,
    vars: Vec<(String, String)>,
}

impl HermeticEnvBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            home: TempDirFixture::new().map_err(|e| anyhow!("{e}"))?,
            cwd: TempDirFixture::new().map_err(|e| anyhow!("{e}"))?,
            vars: Vec::new(),
        })
    }

    /// Write a file under the home directory
    pub fn with_home_file(self, relative: &str, content: &str) -> Result<Self> {
        self.home
            .write_file(relative, content)
            .map_err(|e| anyhow!("{e}"))?;
        Ok(self)
    }

    /// Write a file under the working directory
    pub fn with_cwd_file(self, relative: &str, content: &str) -> Result<Self> {
        self.cwd
            .write_file(relative, content)
            .map_err(|e| anyhow!("{e}"))?;
        Ok(self)
    }

    /// Pre-set a variable in the in-memory environment
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> HermeticEnvironment {
        let env = self.vars.iter().fold(
            MemoryEnvironmentProvider::new()
                .with_home(self.home.path())
                .with_current_dir(self.cwd.path()),
            |env, (key, value)| env.with_var(key, value),
        );

        HermeticEnvironment {
            home: self.home,
            cwd: self.cwd,
            env,
            registry: LoadedEnvFiles::new(),
        }
    }
}

/// Binary probe answering from a fixed list
#[derive(Debug, Default)]
pub struct StubProbe {
    available: Vec<String>,
}

impl StubProbe {
    pub fn with(names: &[&str]) -> Self {
        Self {
            available: names.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl BinaryProbe for StubProbe {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        self.available
            .iter()
            .any(|bin| bin == name)
            .then(|| PathBuf::from("/stub/bin").join(name))
    }
}
