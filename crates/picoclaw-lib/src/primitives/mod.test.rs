use super::*;
use std::error::Error;

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant
                    .to_possible_value()
                    .expect("PossibleValue should exist for all variants");
                let parsed: $enum_type = possible_value
                    .get_name()
                    .parse()
                    .expect("primary name should parse");
                assert_eq!(parsed, *variant, "Round-trip should preserve variant");
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorChoice, test_color_choice_completeness);

#[test]
fn test_value_enum_aliases_are_case_insensitive() {
    assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!(" plain ".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("off".parse::<ColorChoice>().unwrap(), ColorChoice::Never);
}

#[test]
fn test_invalid_value_reports_parse_error() {
    let err = "loud".parse::<LogLevel>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "loud");
            assert_eq!(reason, "invalid log level");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_log_level_accepts_verbosity_digits() {
    assert_eq!("0".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert_eq!("2".parse::<LogLevel>().unwrap(), LogLevel::Info);
    assert_eq!("4".parse::<LogLevel>().unwrap(), LogLevel::Trace);
    assert!("9".parse::<LogLevel>().is_err());
    assert_eq!(LogLevel::Warning.as_directive(), "warn");
}

#[test]
fn test_env_file_error_chains_into_config_error() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = ConfigError::EnvFile {
        path: PathBuf::from("/home/u/.picoclaw/.env"),
        source: EnvFileError::Read {
            path: PathBuf::from("/home/u/.picoclaw/.env"),
            source: io,
        },
    };

    assert!(err.to_string().starts_with("loading env file /home/u/.picoclaw/.env"));
    assert!(err.source().is_some());
}
