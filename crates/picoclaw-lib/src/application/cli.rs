use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// picoclaw CLI - environment and configuration resolver
#[derive(Debug, Clone, Parser)]
#[command(name = "picoclaw")]
#[command(about = "Inspect how picoclaw resolves its environment and configuration")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// picoclaw commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available picoclaw commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show configuration, provider and skill health
    #[default]
    Status,

    /// List the env files applied by the cascading load, in order
    Env,

    /// Resolve the session key a message would be stored under
    SessionKey {
        /// Key chosen by routing, e.g. agent:main:main
        #[arg(long)]
        routed: String,

        /// Session id carried by the message
        #[arg(long, default_value = "")]
        session: String,

        /// Originating channel
        #[arg(long, default_value = "cli")]
        channel: String,

        /// Agent handling the message
        #[arg(long, default_value = "main")]
        agent: String,
    },

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
