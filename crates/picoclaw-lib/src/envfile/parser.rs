//! Single-line dotenv parser
//!
//! Accepts `KEY=value`, `export KEY=value`, and quoted values. Anything
//! else is rejected rather than reported: a malformed line is skipped, never
//! an error. No interpolation and no multi-line values.

use regex::Regex;
use std::sync::LazyLock;

static ENV_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("env key pattern compiles"));

/// One accepted `KEY=value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVariable {
    pub key: String,
    pub value: String,
}

/// Whether `key` is a usable environment variable name
pub fn is_valid_env_key(key: &str) -> bool {
    ENV_KEY_PATTERN.is_match(key)
}

/// Parse one dotenv line, returning `None` for anything not applicable
pub fn parse_line(line: &str) -> Option<EnvVariable> {
    let mut line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if let Some(rest) = line.strip_prefix("export ") {
        line = rest.trim();
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if !is_valid_env_key(key) {
        return None;
    }

    Some(EnvVariable {
        key: key.to_string(),
        value: unquote_value(value.trim()),
    })
}

fn unquote_value(value: &str) -> String {
    if value.len() >= 2 {
        if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            return unescape_double_quoted(inner).unwrap_or_else(|| inner.to_string());
        }
        if let Some(inner) = value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')) {
            return inner.to_string();
        }
    }
    value.to_string()
}

/// Resolve backslash escapes inside a double-quoted value
///
/// Follows the usual C-style escape set plus `\xHH`, three-digit octal,
/// `\uXXXX` and `\UXXXXXXXX`. Returns `None` on any invalid escape, a bare
/// inner `"`, or a result that is not UTF-8, so the caller can fall back to
/// the raw text.
fn unescape_double_quoted(inner: &str) -> Option<String> {
    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '"' | '\n' => return None,
            '\\' => {}
            other => {
                push_char(&mut out, other);
                continue;
            }
        }

        match chars.next()? {
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(b'\n'),
            'r' => out.push(b'\r'),
            't' => out.push(b'\t'),
            'v' => out.push(0x0b),
            '\\' => out.push(b'\\'),
            '"' => out.push(b'"'),
            'x' => out.push(take_hex(&mut chars, 2)? as u8),
            'u' => push_char(&mut out, char::from_u32(take_hex(&mut chars, 4)?)?),
            'U' => push_char(&mut out, char::from_u32(take_hex(&mut chars, 8)?)?),
            first @ '0'..='7' => {
                let mut code = first.to_digit(8)?;
                for _ in 0..2 {
                    code = code * 8 + chars.next()?.to_digit(8)?;
                }
                out.push(u8::try_from(code).ok()?);
            }
            _ => return None,
        }
    }

    String::from_utf8(out).ok()
}

fn take_hex(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<u32> {
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    Some(code)
}

fn push_char(out: &mut Vec<u8>, ch: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

#[cfg(test)]
mod tests {
    include!("parser.test.rs");
}
