use super::*;

#[test]
fn test_no_subcommand_defaults_to_status() {
    let cli = Cli::try_parse_from(["picoclaw"]).unwrap();
    assert_eq!(cli.command.unwrap_or_default(), Commands::Status);
}

#[test]
fn test_session_key_arguments() {
    let cli = Cli::try_parse_from([
        "picoclaw",
        "session-key",
        "--routed",
        "agent:main:main",
        "--session",
        "cli:x",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Some(Commands::SessionKey {
            routed: "agent:main:main".to_string(),
            session: "cli:x".to_string(),
            channel: "cli".to_string(),
            agent: "main".to_string(),
        })
    );
}

#[test]
fn test_session_key_requires_routed() {
    assert!(Cli::try_parse_from(["picoclaw", "session-key"]).is_err());
}

#[test]
fn test_global_options_before_command() {
    let cli = Cli::try_parse_from(["picoclaw", "--log-level", "4", "env"]).unwrap();
    assert_eq!(cli.config.log_level, crate::primitives::LogLevel::Trace);
    assert_eq!(cli.command, Some(Commands::Env));
}
