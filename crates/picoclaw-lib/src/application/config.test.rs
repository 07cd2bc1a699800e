use super::*;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, LogLevel::Warning);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorChoice::Auto);
}

#[test]
fn test_cli_flags_parse() {
    let config = AppConfig::try_parse_from([
        "picoclaw",
        "--log-level",
        "3",
        "--log-format",
        "json",
        "--color",
        "never",
    ])
    .unwrap();

    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.color, ColorChoice::Never);
}

#[test]
fn test_explicit_color_beats_environment() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let config = AppConfig {
        color: ColorChoice::Always,
        ..AppConfig::default()
    };

    assert!(config.resolve_color(&env));
}

#[test]
fn test_log_level_accepts_names() {
    let config = AppConfig::try_parse_from(["picoclaw", "--log-level", "info"]).unwrap();
    assert_eq!(config.log_level, LogLevel::Info);

    let config = AppConfig::try_parse_from(["picoclaw", "--log-level", "trace"]).unwrap();
    assert_eq!(config.to_logger_config(&EnvironmentConfig::default()).level, LogLevel::Trace);

    assert!(AppConfig::try_parse_from(["picoclaw", "--log-level", "loud"]).is_err());
}

#[test]
fn test_auto_color_defers_to_environment() {
    let env = EnvironmentConfig {
        force_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    let logger = AppConfig::default().to_logger_config(&env);

    assert!(logger.ansi);
    assert_eq!(logger.level, LogLevel::Warning);
}
