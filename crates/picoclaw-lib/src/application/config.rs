//! Configuration of the picoclaw binary itself
//!
//! Logging and colour knobs, read from CLI flags with `PICOCLAW_*`
//! environment fallbacks. Agent settings live in [`crate::config`].

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::io::IsTerminal;

use super::env::EnvironmentConfig;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "warn";
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::defaults;
    use crate::primitives::{ColorChoice, LogFormat, LogLevel, LogOutput};

    pub fn log_level() -> LogLevel {
        defaults::LOG_LEVEL.parse().unwrap_or(LogLevel::Warning)
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap_or(LogFormat::Text)
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap_or(LogOutput::Stderr)
    }

    pub fn color() -> ColorChoice {
        defaults::COLOR.parse().unwrap_or(ColorChoice::Auto)
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Log level (error, warn, info, debug, trace; or 0-4)
    #[arg(long, env = "PICOCLAW_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: LogLevel,

    /// Log format (text, json, pretty)
    #[arg(long, env = "PICOCLAW_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "PICOCLAW_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(long, env = "PICOCLAW_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Resolve the colour choice: an explicit flag wins, `auto` defers to
    /// the colour environment variables and then to the terminal
    pub fn resolve_color(&self, env: &EnvironmentConfig) -> bool {
        let color = match self.color {
            ColorChoice::Auto => env.apply_color_config(ColorChoice::Auto),
            explicit => explicit,
        };

        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => match self.log_output {
                LogOutput::Stderr => std::io::stderr().is_terminal(),
                LogOutput::Stdout => std::io::stdout().is_terminal(),
            },
        }
    }

    /// Logger settings for this configuration
    pub fn to_logger_config(&self, env: &EnvironmentConfig) -> LoggerConfig {
        LoggerConfig {
            level: self.log_level,
            format: self.log_format,
            output: self.log_output,
            ansi: self.resolve_color(env),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
