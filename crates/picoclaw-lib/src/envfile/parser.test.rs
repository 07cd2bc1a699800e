use super::*;

fn pair(line: &str) -> Option<(String, String)> {
    parse_line(line).map(|var| (var.key, var.value))
}

fn kv(key: &str, value: &str) -> Option<(String, String)> {
    Some((key.to_string(), value.to_string()))
}

#[test]
fn test_accepted_forms_share_the_key() {
    assert_eq!(pair("KEY=V"), kv("KEY", "V"));
    assert_eq!(pair("export KEY=V"), kv("KEY", "V"));
    assert_eq!(pair("export    KEY=V"), kv("KEY", "V"));
    assert_eq!(pair("KEY=\"V\""), kv("KEY", "V"));
    assert_eq!(pair("KEY='V'"), kv("KEY", "V"));
    assert_eq!(pair("  KEY = spaced value  "), kv("KEY", "spaced value"));
}

#[test]
fn test_empty_value_is_accepted() {
    assert_eq!(pair("KEY="), kv("KEY", ""));
    assert_eq!(pair("KEY=\"\""), kv("KEY", ""));
}

#[test]
fn test_rejected_lines() {
    assert_eq!(pair(""), None);
    assert_eq!(pair("   "), None);
    assert_eq!(pair("# KEY=V"), None);
    assert_eq!(pair("   # indented comment"), None);
    assert_eq!(pair("INVALID LINE"), None);
    assert_eq!(pair("=value"), None);
    assert_eq!(pair("1KEY=value"), None);
    assert_eq!(pair("MY-KEY=value"), None);
    assert_eq!(pair("export"), None);
}

#[test]
fn test_only_first_equals_splits() {
    assert_eq!(pair("URL=https://x.test/?a=b"), kv("URL", "https://x.test/?a=b"));
}

#[test]
fn test_double_quotes_process_escapes() {
    assert_eq!(pair(r#"MSG="line\nnext""#), kv("MSG", "line\nnext"));
    assert_eq!(pair(r#"MSG="tab\there""#), kv("MSG", "tab\there"));
    assert_eq!(pair(r#"MSG="say \"hi\"""#), kv("MSG", "say \"hi\""));
    assert_eq!(pair(r#"MSG="\x41\102\u00e9""#), kv("MSG", "ABé"));
}

#[test]
fn test_bad_escape_falls_back_to_stripping_quotes() {
    assert_eq!(pair(r#"P="C:\path\q""#), kv("P", r"C:\path\q"));
    assert_eq!(pair(r#"P="a"b""#), kv("P", r#"a"b"#));
}

#[test]
fn test_single_quotes_are_literal() {
    assert_eq!(pair(r"RAW='no\nescape'"), kv("RAW", r"no\nescape"));
}

#[test]
fn test_mismatched_quotes_are_verbatim() {
    assert_eq!(pair(r#"V="open"#), kv("V", "\"open"));
    assert_eq!(pair(r#"V='mixed""#), kv("V", "'mixed\""));
    assert_eq!(pair("V=\""), kv("V", "\""));
}

#[test]
fn test_key_pattern() {
    assert!(is_valid_env_key("_private"));
    assert!(is_valid_env_key("lower_Case9"));
    assert!(!is_valid_env_key(""));
    assert!(!is_valid_env_key("9lives"));
    assert!(!is_valid_env_key("has space"));
}
