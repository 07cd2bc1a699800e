use super::*;

#[test]
fn test_default_filter_scopes_level_to_picoclaw() {
    assert_eq!(
        default_filter(LogLevel::Debug),
        "warn,picoclaw=debug,picoclaw_lib=debug"
    );
}

#[test]
fn test_default_filter_parses() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        assert!(EnvFilter::try_new(default_filter(level)).is_ok());
    }
}

#[test]
fn test_init_is_single_shot() {
    let config = LoggerConfig {
        level: LogLevel::Error,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    // Another test binary thread may already own the global subscriber.
    if Logger::init(config.clone()).is_ok() {
        assert!(Logger::is_initialized());
        assert_eq!(Logger::global().map(|l| l.config().level), Some(LogLevel::Error));
    }
    assert!(Logger::init(config).is_err());
}
