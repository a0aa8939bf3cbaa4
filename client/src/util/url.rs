//! URL component encoding for API path segments and `?from=` return paths.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use std::fmt::Write;

/// Percent-encode everything except RFC 3986 unreserved characters.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}
