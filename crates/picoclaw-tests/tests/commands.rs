//! E2E tests for command execution against a hermetic environment

use anyhow::Result;
use picoclaw_lib::application::{Commands, execute_with};
use picoclaw_lib::config::JsonConfigSource;
use picoclaw_tests::{HermeticEnvBuilder, StubProbe};

fn run(command: Commands, h: &picoclaw_tests::HermeticEnvironment, probe: &StubProbe) -> Result<String> {
    let mut out = Vec::new();
    execute_with(&mut out, command, &h.env, &JsonConfigSource, &h.registry, probe)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn e2e_env_command_lists_loaded_files() -> Result<()> {
    let h = HermeticEnvBuilder::new()?
        .with_home_file(".picoclaw/.env", "A=1\n")?
        .with_cwd_file(".env", "B=2\n")?
        .build();

    let output = run(Commands::Env, &h, &StubProbe::default())?;

    let expected = format!(
        "{}\n{}\n",
        h.config_dir().join(".env").display(),
        h.cwd_path().join(".env").display()
    );
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn e2e_env_command_without_files() -> Result<()> {
    let h = HermeticEnvBuilder::new()?.build();

    let output = run(Commands::Env, &h, &StubProbe::default())?;

    assert_eq!(output, "Env files loaded: none\n");
    Ok(())
}

#[test]
fn e2e_status_reports_skills_health() -> Result<()> {
    let h = HermeticEnvBuilder::new()?
        .with_home_file(".picoclaw/config.json", "{}")?
        .with_home_file(".picoclaw/workspace/skills/git-summary/SKILL.md", "# git-summary\n")?
        .with_home_file(".picoclaw/.env", "GIT_REPOS=/elsewhere/repo,owner/repo\n")?
        .build();

    let output = run(
        Commands::Status,
        &h,
        &StubProbe::with(&["git", "curl", "jq", "python3"]),
    )?;

    assert!(output.contains("Model: glm-4.7"));
    assert!(output.contains("Skills Env Health:"));
    assert!(output.contains("GIT_REPOS"));
    assert!(output.contains("gh"));
    assert!(output.contains("/elsewhere/repo"));
    assert!(!output.contains("  - owner/repo"));
    Ok(())
}

#[test]
fn e2e_session_key_command() -> Result<()> {
    let h = HermeticEnvBuilder::new()?.build();

    let output = run(
        Commands::SessionKey {
            routed: "agent:main:main".to_string(),
            session: "cli:x".to_string(),
            channel: "cli".to_string(),
            agent: "main".to_string(),
        },
        &h,
        &StubProbe::default(),
    )?;

    assert_eq!(output, "agent:main:cli:x\n");
    Ok(())
}
