use super::*;
use crate::envfile::MemoryEnvironmentProvider;

fn load(vars: &[(&str, &str)]) -> EnvironmentConfig {
    let env = vars
        .iter()
        .fold(MemoryEnvironmentProvider::new(), |env, (k, v)| env.with_var(k, v));
    EnvironmentConfig::from_provider(&env).unwrap()
}

#[test]
fn test_env_file_override_is_trimmed() {
    assert_eq!(
        load(&[("PICOCLAW_ENV_FILE", "  /etc/picoclaw.env ")]).env_file_override(),
        Some("/etc/picoclaw.env")
    );
    assert_eq!(load(&[("PICOCLAW_ENV_FILE", "   ")]).env_file_override(), None);
    assert_eq!(load(&[]).env_file_override(), None);
}

#[test]
fn test_no_color_environment_variable() {
    let color = load(&[("NO_COLOR", "1")]).apply_color_config(ColorChoice::Auto);
    assert_eq!(color, ColorChoice::Never);
}

#[test]
fn test_environment_variable_precedence() {
    let config = load(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorChoice::Auto), ColorChoice::Always);
}

#[test]
fn test_ci_environment_variable() {
    let config = load(&[("CI", "true"), ("FORCE_COLOR", "1")]);
    assert_eq!(config.apply_color_config(ColorChoice::Always), ColorChoice::Never);
}

#[test]
fn test_empty_no_color_and_invalid_force_color_are_ignored() {
    let config = load(&[("NO_COLOR", ""), ("FORCE_COLOR", "maybe")]);
    assert_eq!(config.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
}
