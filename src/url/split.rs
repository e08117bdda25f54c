//! Lenient URL splitting.
//!
//! Splits URL-like strings (absolute, scheme-relative or relative) into the five
//! [`UrlComponents`] without validating or decoding anything. The `url` crate only
//! accepts absolute URLs, so relative references are split here.

use crate::types::UrlComponents;

/// Characters removed anywhere in the input before splitting.
const UNSAFE_BYTES: [char; 3] = ['\t', '\r', '\n'];

/// Split a URL-like string into scheme, authority, path, query and fragment.
///
/// `default_scheme` is only used when the input itself carries no scheme.
/// With `keep_fragment == false` a `#...` suffix stays in the path or query.
/// Never fails: anything unrecognised ends up in the path.
///
/// # Examples
///
/// ```
/// use urlkit::split_url;
///
/// let parts = split_url("HTTP://localhost:8000/test/?x=1#top", None, true);
/// assert_eq!(parts.scheme, "http");
/// assert_eq!(parts.authority, "localhost:8000");
/// assert_eq!(parts.path, "/test/");
/// assert_eq!(parts.query, "x=1");
/// assert_eq!(parts.fragment, "top");
///
/// let relative = split_url("/?id=1", Some("https"), true);
/// assert_eq!(relative.scheme, "https");
/// assert_eq!(relative.authority, "");
/// ```
pub fn split_url(input: &str, default_scheme: Option<&str>, keep_fragment: bool) -> UrlComponents {
    let cleaned: String = input
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !UNSAFE_BYTES.contains(c))
        .collect();

    let mut scheme = default_scheme
        .map(|s| s.trim().to_ascii_lowercase())
        .unwrap_or_default();
    let mut rest = cleaned.as_str();

    if let Some((candidate, after)) = rest.split_once(':') {
        if is_scheme(candidate) {
            scheme = candidate.to_ascii_lowercase();
            rest = after;
        }
    }

    let mut authority = "";
    if let Some(after_slashes) = rest.strip_prefix("//") {
        let end = after_slashes
            .find(|c| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after_slashes.len());
        authority = &after_slashes[..end];
        rest = &after_slashes[end..];
    }

    let mut fragment = "";
    if keep_fragment {
        if let Some((before, after)) = rest.split_once('#') {
            rest = before;
            fragment = after;
        }
    }

    let mut query = "";
    if let Some((before, after)) = rest.split_once('?') {
        rest = before;
        query = after;
    }

    UrlComponents::new(scheme, authority, rest, query, fragment)
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Host part of an authority: the text after any `userinfo@`, without port
/// and without IPv6 brackets, lowercased. `None` when there is no host.
pub fn hostname(authority: &str) -> Option<String> {
    let host_info = host_info(authority);
    let host = match host_info.split_once('[') {
        Some((_, bracketed)) => bracketed.split_once(']').map_or(bracketed, |(h, _)| h),
        None => host_info.split_once(':').map_or(host_info, |(h, _)| h),
    };
    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

/// Port part of an authority.
///
/// `None` when absent, empty, non-numeric or out of range.
pub fn port(authority: &str) -> Option<u16> {
    let host_info = host_info(authority);
    let port = match host_info.split_once('[') {
        Some((_, bracketed)) => bracketed
            .split_once(']')
            .and_then(|(_, after)| after.split_once(':'))
            .map(|(_, p)| p),
        None => host_info.split_once(':').map(|(_, p)| p),
    }?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}

/// Userinfo part of an authority including the trailing '@', or "".
pub(crate) fn userinfo(authority: &str) -> &str {
    match authority.rfind('@') {
        Some(at) => &authority[..=at],
        None => "",
    }
}

fn host_info(authority: &str) -> &str {
    match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_relative() {
        let parts = split_url("/?id=1&b=2", None, true);
        assert_eq!(parts, UrlComponents::new("", "", "/", "id=1&b=2", ""));

        let file = split_url("test.html", None, true);
        assert_eq!(file, UrlComponents::new("", "", "test.html", "", ""));
    }

    #[test]
    fn test_split_scheme_relative() {
        let parts = split_url("//localhost:8000/test/index.html?x=1&y=2#test", None, true);
        assert_eq!(parts.scheme, "");
        assert_eq!(parts.authority, "localhost:8000");
        assert_eq!(parts.path, "/test/index.html");
        assert_eq!(parts.query, "x=1&y=2");
        assert_eq!(parts.fragment, "test");
    }

    #[test]
    fn test_split_default_scheme_only_when_missing() {
        assert_eq!(split_url("//ex.org/", Some("https"), true).scheme, "https");
        assert_eq!(split_url("http://ex.org/", Some("https"), true).scheme, "http");
    }

    #[test]
    fn test_split_scheme_rules() {
        // a leading digit is not a scheme
        assert_eq!(split_url("1http://x", None, true).scheme, "");
        // neither is an empty candidate
        assert_eq!(split_url(":foo", None, true).path, ":foo");
        assert_eq!(split_url("svn+ssh://host/repo", None, true).scheme, "svn+ssh");
        assert_eq!(split_url("mailto:someone@ex.org", None, true).path, "someone@ex.org");
    }

    #[test]
    fn test_split_authority_ends_at_query_or_fragment() {
        let parts = split_url("https://ex.org?x=1", None, true);
        assert_eq!(parts.authority, "ex.org");
        assert_eq!(parts.path, "");
        assert_eq!(parts.query, "x=1");

        let parts = split_url("https://ex.org#frag", None, true);
        assert_eq!(parts.authority, "ex.org");
        assert_eq!(parts.fragment, "frag");
    }

    #[test]
    fn test_split_without_fragments() {
        let parts = split_url("/page?x=1#top", None, false);
        assert_eq!(parts.query, "x=1#top");
        assert_eq!(parts.fragment, "");

        let parts = split_url("/page#top?x=1", None, false);
        assert_eq!(parts.path, "/page#top");
        assert_eq!(parts.query, "x=1");
    }

    #[test]
    fn test_split_removes_control_characters() {
        let parts = split_url("  https://ex.\norg/pa\tth", None, true);
        assert_eq!(parts.authority, "ex.org");
        assert_eq!(parts.path, "/path");
    }

    #[test]
    fn test_hostname() {
        assert_eq!(hostname("localhost:8000"), Some("localhost".to_string()));
        assert_eq!(hostname("user:pw@WWW.Ex.org:80"), Some("www.ex.org".to_string()));
        assert_eq!(hostname("[::1]:8080"), Some("::1".to_string()));
        assert_eq!(hostname(""), None);
        assert_eq!(hostname(":8080"), None);
    }

    #[test]
    fn test_port() {
        assert_eq!(port("localhost:8000"), Some(8000));
        assert_eq!(port("user:pw@ex.org"), None);
        assert_eq!(port("[::1]:8080"), Some(8080));
        assert_eq!(port("ex.org:"), None);
        assert_eq!(port("ex.org:http"), None);
        assert_eq!(port("ex.org:70000"), None);
        assert_eq!(port(""), None);
    }

    #[test]
    fn test_userinfo() {
        assert_eq!(userinfo("user:pw@ex.org"), "user:pw@");
        assert_eq!(userinfo("ex.org"), "");
    }
}
