use super::*;

#[test]
fn test_uses_route_when_no_message_session() {
    assert_eq!(
        resolve_session_key("agent:main:main", "", "cli", "main"),
        "agent:main:main"
    );
    assert_eq!(
        resolve_session_key("agent:main:main", "   ", "cli", "main"),
        "agent:main:main"
    );
}

#[test]
fn test_honors_agent_scoped_session() {
    assert_eq!(
        resolve_session_key("agent:main:main", "agent:main:custom", "cli", "main"),
        "agent:main:custom"
    );
    assert_eq!(
        resolve_session_key("agent:main:main", "agent:main:custom", "telegram", "main"),
        "agent:main:custom"
    );
}

#[test]
fn test_namespaces_cli_session() {
    assert_eq!(
        resolve_session_key("agent:main:main", "cli:git-remote-check", "cli", "main"),
        "agent:main:cli:git-remote-check"
    );
    assert_eq!(
        resolve_session_key("agent:main:main", "cli:x", "cli", "main"),
        "agent:main:cli:x"
    );
}

#[test]
fn test_bare_cli_session_gets_prefixed() {
    assert_eq!(
        resolve_session_key("agent:coder:main", "scratch", "CLI", "coder"),
        "agent:coder:cli:scratch"
    );
}

#[test]
fn test_blank_agent_defaults_to_main() {
    assert_eq!(
        resolve_session_key("agent:main:main", "cli:x", "cli", " "),
        "agent:main:cli:x"
    );
}

#[test]
fn test_empty_cli_scope_falls_back_to_route() {
    assert_eq!(
        resolve_session_key("agent:main:main", "cli:", "cli", "main"),
        "agent:main:main"
    );
}

#[test]
fn test_non_cli_does_not_override() {
    assert_eq!(
        resolve_session_key("agent:main:main", "telegram:abc", "telegram", "main"),
        "agent:main:main"
    );
}
