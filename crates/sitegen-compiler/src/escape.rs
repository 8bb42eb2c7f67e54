//! Escaping for generated source
//!
//! User text lands in three different lexical contexts of the emitted TSX,
//! and each needs its own escaping:
//!
//! | context                    | function      | example                          |
//! |----------------------------|---------------|----------------------------------|
//! | JSX child text             | [`jsx_text`]  | `<h2>{here}</h2>`                |
//! | double-quoted attribute    | [`attr`]      | `<img alt="here" />`             |
//! | JS string literal          | [`js_string`] | `title: "here"`                  |
//!
//! [`href`] additionally neutralises script-scheme links before
//! attribute-escaping them.

use std::fmt::Write as _;

/// Escape text placed between JSX tags
///
/// Braces would open an expression and angle brackets a tag, so both are
/// written as entities along with `&`.
#[must_use]
pub fn jsx_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value placed inside a double-quoted JSX attribute
#[must_use]
pub fn attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' | '\r' | '\t' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Undo [`attr`] (and the common named entities)
#[must_use]
pub fn unescape_attr(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Render a double-quoted JS string literal, quotes included
#[must_use]
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape a link target for an `href` attribute
///
/// `javascript:`, `vbscript:` and `data:` targets collapse to `#`.
#[must_use]
pub fn href(s: &str) -> String {
    let trimmed = s.trim();
    let scheme: String = trimmed
        .chars()
        .take_while(|c| *c != ':')
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let blocked = trimmed.contains(':') && matches!(scheme.as_str(), "javascript" | "vbscript" | "data");
    if trimmed.is_empty() || blocked {
        return "#".to_string();
    }
    attr(trimmed)
}
