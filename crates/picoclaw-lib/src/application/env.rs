//! Control variables read from the environment
//!
//! Covers the env-file override and the usual colour conventions. Values
//! come through the environment port so the cascade sees variables that
//! earlier env files just applied.

use crate::envfile::EnvironmentProvider;
use crate::primitives::{ColorChoice, ConfigError};
use serde::Deserialize;

/// Environment variables that affect application behavior
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// PICOCLAW_ENV_FILE: env file that outranks every other candidate
    pub picoclaw_env_file: Option<String>,
    /// NO_COLOR environment variable (any non-empty value = disable color)
    pub no_color: Option<String>,
    /// FORCE_COLOR environment variable (0/false = disable, 1/2/3/true = enable)
    pub force_color: Option<String>,
    /// CLICOLOR environment variable (0 = disable color)
    pub clicolor: Option<String>,
    /// CI environment variable (any value = CI mode)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load from the given environment
    pub fn from_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        envy::from_iter(env.vars()).map_err(|source| ConfigError::EnvironmentParsingFailed { source })
    }

    /// The override env file, when set to something other than blanks
    pub fn env_file_override(&self) -> Option<&str> {
        self.picoclaw_env_file
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }

    /// Apply environment variables to the colour choice
    ///
    /// `CI` disables colour outright. Otherwise `FORCE_COLOR` beats
    /// `NO_COLOR`, which beats `CLICOLOR=0`.
    pub fn apply_color_config(&self, mut color: ColorChoice) -> ColorChoice {
        if self.ci.is_some() {
            return ColorChoice::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = ColorChoice::Never;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            color = ColorChoice::Never;
        }

        match self.force_color.as_deref() {
            Some("0" | "false") => color = ColorChoice::Never,
            Some("1" | "2" | "3" | "true") => color = ColorChoice::Always,
            _ => {}
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
