//! Application layer modules
//!
//! CLI interface, the binary's own configuration, and the cascading load
//! that ties env files to the structured config.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;

pub use cli::{Cli, Commands};
pub use commands::{execute_command, execute_with};
pub use config::AppConfig;
pub use env::EnvironmentConfig;
pub use loader::{CascadeOutcome, CascadingConfigLoader, LoadedEnvFiles};
