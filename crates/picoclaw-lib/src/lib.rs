//! # picoclaw Library
//!
//! Layered environment and configuration resolution for the picoclaw agent
//! CLI.
//!
//! ## Core Modules
//!
//! - [`envfile`] - Dotenv parsing, loading, and the environment port
//! - [`paths`] - Path normalization and env-file candidates
//! - [`config`] - Structured `config.json` settings
//! - [`application`] - CLI, cascading load, and command execution
//! - [`workspace`] - Workspace containment for repository references
//! - [`session`] - Canonical conversation session keys
//! - [`status`] - Human-readable status report
//! - [`logger`] - Structured logging setup
//! - [`primitives`] - Shared enums and error types

pub mod application;
pub mod config;
pub mod envfile;
pub mod logger;
pub mod paths;
pub mod primitives;
pub mod session;
pub mod status;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
pub mod workspace;

pub use application::{
    AppConfig, CascadeOutcome, CascadingConfigLoader, Cli, Commands, LoadedEnvFiles,
    execute_command,
};
pub use config::{Config, ConfigSource, JsonConfigSource};
pub use envfile::{EnvironmentProvider, LiveEnvironmentProvider, load_env_file, parse_line};
pub use logger::Logger;
pub use primitives::{ConfigError, EnvFileError, LogFormat, LogLevel, LogOutput, LoggerError};
pub use session::resolve_session_key;
pub use workspace::find_repos_outside_workspace;

use anyhow::Result;
use application::EnvironmentConfig;
use clap::Parser;

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = EnvironmentConfig::from_provider(&LiveEnvironmentProvider)?;
    if let Err(e) = Logger::init(cli.config.to_logger_config(&env)) {
        eprintln!("warning: {e}");
    }

    execute_command(cli)
}
