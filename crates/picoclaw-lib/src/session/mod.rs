//! Canonical conversation session keys
//!
//! Keys are agent scoped: `agent:<agent>:<scope>`. Only the local CLI may
//! pick an alternate scope; session ids arriving from remote channels never
//! re-parent a conversation.

/// Channel name of the local command line
pub const CLI_CHANNEL: &str = "cli";

const AGENT_PREFIX: &str = "agent:";
const CLI_PREFIX: &str = "cli:";
const DEFAULT_AGENT: &str = "main";

/// Session key used to scope history for one inbound message
///
/// - no explicit session: the routed key
/// - explicit key already agent scoped: taken as is
/// - CLI channel: `agent:<agent>:cli:<session>` (one `cli:` prefix stripped)
/// - any other channel: the routed key
pub fn resolve_session_key(
    routed_key: &str,
    explicit_session: &str,
    channel: &str,
    agent: &str,
) -> String {
    let explicit = explicit_session.trim();
    if explicit.is_empty() {
        return routed_key.to_string();
    }
    if has_prefix_ignore_case(explicit, AGENT_PREFIX) {
        return explicit.to_string();
    }
    if !channel.trim().eq_ignore_ascii_case(CLI_CHANNEL) {
        tracing::trace!(channel, "ignoring session override from non-cli channel");
        return routed_key.to_string();
    }

    let scope = if has_prefix_ignore_case(explicit, CLI_PREFIX) {
        explicit[CLI_PREFIX.len()..].trim()
    } else {
        explicit
    };
    if scope.is_empty() {
        return routed_key.to_string();
    }

    let agent = match agent.trim() {
        "" => DEFAULT_AGENT,
        name => name,
    };
    format!("{AGENT_PREFIX}{agent}:{CLI_PREFIX}{scope}")
}

fn has_prefix_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
