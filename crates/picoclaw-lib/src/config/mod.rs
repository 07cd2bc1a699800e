//! Structured application configuration (`~/.picoclaw/config.json`)
//!
//! Parsed after the pre-config env files are applied, so values exported
//! there can override file settings through `PICOCLAW_*` variables.

use crate::envfile::EnvironmentProvider;
use crate::paths::expand_home;
use crate::primitives::ConfigError;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding picoclaw state
pub const CONFIG_DIR_NAME: &str = ".picoclaw";

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default configuration values
pub mod defaults {
    pub const WORKSPACE: &str = "~/.picoclaw/workspace";
    pub const RESTRICT_TO_WORKSPACE: bool = true;
    pub const MODEL: &str = "glm-4.7";
    pub const MAX_TOKENS: u32 = 8192;
    pub const TEMPERATURE: f64 = 0.7;
}

/// Fixed location of the structured config for the current user
pub fn config_path(env: &dyn EnvironmentProvider) -> Result<PathBuf, ConfigError> {
    let home = env.home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Top-level config.json
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub agents: AgentsConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentsConfig {
    pub defaults: AgentDefaults,
}

/// Settings shared by every agent unless overridden
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentDefaults {
    /// Root directory agents are confined to; may start with `~`
    pub workspace: String,
    /// Block file and repo access outside `workspace`
    pub restrict_to_workspace: bool,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            workspace: defaults::WORKSPACE.to_string(),
            restrict_to_workspace: defaults::RESTRICT_TO_WORKSPACE,
            model: defaults::MODEL.to_string(),
            max_tokens: defaults::MAX_TOKENS,
            temperature: defaults::TEMPERATURE,
        }
    }
}

/// Credentials and endpoint for one LLM provider
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: String,
    pub api_base: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub anthropic: ProviderConfig,
    pub openai: ProviderConfig,
    pub openrouter: ProviderConfig,
    pub groq: ProviderConfig,
    pub zhipu: ProviderConfig,
    pub gemini: ProviderConfig,
    pub vllm: ProviderConfig,
    pub nvidia: ProviderConfig,
    pub ollama: ProviderConfig,
    pub moonshot: ProviderConfig,
    pub deepseek: ProviderConfig,
    pub qwen: ProviderConfig,
    pub volcengine: ProviderConfig,
}

impl ProvidersConfig {
    fn entries_mut(&mut self) -> [(&'static str, &mut ProviderConfig); 13] {
        [
            ("anthropic", &mut self.anthropic),
            ("openai", &mut self.openai),
            ("openrouter", &mut self.openrouter),
            ("groq", &mut self.groq),
            ("zhipu", &mut self.zhipu),
            ("gemini", &mut self.gemini),
            ("vllm", &mut self.vllm),
            ("nvidia", &mut self.nvidia),
            ("ollama", &mut self.ollama),
            ("moonshot", &mut self.moonshot),
            ("deepseek", &mut self.deepseek),
            ("qwen", &mut self.qwen),
            ("volcengine", &mut self.volcengine),
        ]
    }
}

impl Config {
    /// Workspace directory with a leading `~` expanded against `home`
    pub fn workspace_path(&self, home: Option<&Path>) -> PathBuf {
        expand_home(self.agents.defaults.workspace.trim(), home)
    }

    pub fn model_name(&self) -> &str {
        &self.agents.defaults.model
    }

    /// Apply `PICOCLAW_AGENTS_DEFAULTS_*` and `PICOCLAW_PROVIDERS_<NAME>_*`
    pub fn apply_env_overrides(&mut self, env: &dyn EnvironmentProvider) -> Result<(), ConfigError> {
        let vars = env.vars();

        let agent: AgentDefaultsOverrides =
            envy::prefixed("PICOCLAW_AGENTS_DEFAULTS_").from_iter(vars.clone())?;
        let defaults = &mut self.agents.defaults;
        if let Some(workspace) = agent.workspace {
            defaults.workspace = workspace;
        }
        if let Some(restrict) = agent.restrict_to_workspace {
            defaults.restrict_to_workspace = restrict;
        }
        if let Some(model) = agent.model {
            defaults.model = model;
        }
        if let Some(max_tokens) = agent.max_tokens {
            defaults.max_tokens = max_tokens;
        }
        if let Some(temperature) = agent.temperature {
            defaults.temperature = temperature;
        }

        for (name, provider) in self.providers.entries_mut() {
            let prefix = format!("PICOCLAW_PROVIDERS_{}_", name.to_ascii_uppercase());
            let overrides: ProviderOverrides = envy::prefixed(prefix).from_iter(vars.clone())?;
            if let Some(api_key) = overrides.api_key {
                provider.api_key = api_key;
            }
            if let Some(api_base) = overrides.api_base {
                provider.api_base = api_base;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct AgentDefaultsOverrides {
    workspace: Option<String>,
    restrict_to_workspace: Option<bool>,
    model: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderOverrides {
    api_key: Option<String>,
    api_base: Option<String>,
}

/// Source of the structured configuration used by the cascading loader
pub trait ConfigSource {
    fn load(&self, path: &Path, env: &dyn EnvironmentProvider) -> Result<Config, ConfigError>;
}

/// Reads config.json from disk, then applies environment overrides
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonConfigSource;

impl ConfigSource for JsonConfigSource {
    fn load(&self, path: &Path, env: &dyn EnvironmentProvider) -> Result<Config, ConfigError> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str::<Config>(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file missing, using defaults");
                Config::default()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        config.apply_env_overrides(env)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
