//! Shared utility functions.

use url::{ParseError, Url};

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Derive a display name for a site from its URL.
///
/// Takes the parsed hostname without a leading `www.`. Scheme-less input
/// such as `example.org/about` is read as `http://`. Falls back to
/// `"Website"` when no host can be parsed.
pub fn site_name(url: &str) -> String {
    let url = url.trim();
    let parsed = match Url::parse(url) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{}", url)),
        other => other,
    };

    parsed
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .filter(|host| !host.is_empty())
        .map(|host| host.strip_prefix("www.").unwrap_or(&host).to_string())
        .unwrap_or_else(|| "Website".to_string())
}
