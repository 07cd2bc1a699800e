//! Command execution
//!
//! Each command runs against explicit providers so tests can drive it with
//! an in-memory environment and capture its output.

use crate::config::{ConfigSource, JsonConfigSource, config_path};
use crate::envfile::{EnvironmentProvider, LiveEnvironmentProvider};
use crate::session::resolve_session_key;
use crate::status::{BinaryProbe, PathProbe, format_version, render_status};
use anyhow::{Context, Result};
use std::io::Write;

use super::cli::{Cli, Commands};
use super::loader::{CascadingConfigLoader, LoadedEnvFiles};

/// Execute a parsed command line against the live process environment
pub fn execute_command(cli: Cli) -> Result<()> {
    let env = LiveEnvironmentProvider;
    let probe = PathProbe::new(&env);
    let mut stdout = std::io::stdout().lock();

    execute_with(
        &mut stdout,
        cli.command.unwrap_or_default(),
        &env,
        &JsonConfigSource,
        LoadedEnvFiles::global(),
        &probe,
    )
}

/// Execute `command`, writing its output to `out`
///
/// A failed cascading load is reported on `out` and does not fail the
/// command.
pub fn execute_with(
    out: &mut dyn Write,
    command: Commands,
    env: &dyn EnvironmentProvider,
    source: &dyn ConfigSource,
    registry: &LoadedEnvFiles,
    probe: &dyn BinaryProbe,
) -> Result<()> {
    match command {
        Commands::Status => {
            match CascadingConfigLoader::new(env, source, registry).load() {
                Ok(outcome) => {
                    let path = config_path(env).context("Failed to locate config file")?;
                    let report =
                        render_status(&outcome.config, &path, &outcome.loaded_env_files, probe, env);
                    writeln!(out, "{report}")?;
                }
                Err(err) => {
                    tracing::error!(error = %err, "configuration load failed");
                    writeln!(out, "Error loading config: {err}")?;
                }
            }
        }
        Commands::Env => {
            if let Err(err) = CascadingConfigLoader::new(env, source, registry).load() {
                tracing::error!(error = %err, "configuration load failed");
                writeln!(out, "Error loading config: {err}")?;
            }
            let loaded = registry.snapshot();
            if loaded.is_empty() {
                writeln!(out, "Env files loaded: none")?;
            }
            for path in loaded {
                writeln!(out, "{}", path.display())?;
            }
        }
        Commands::SessionKey {
            routed,
            session,
            channel,
            agent,
        } => {
            writeln!(out, "{}", resolve_session_key(&routed, &session, &channel, &agent))?;
        }
        Commands::Version => {
            writeln!(out, "picoclaw {}", format_version())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
