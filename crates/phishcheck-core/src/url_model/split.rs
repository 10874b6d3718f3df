//! Lexical URL splitting per generic URL syntax.
//!
//! `scheme ":" ["//" authority] path ["?" query] ["#" fragment]`
//!
//! Components are returned as written: no percent-decoding, no IDNA, no
//! default path. Only scheme and host are lower-cased. This is deliberately
//! looser than `url::Url::parse`, which rejects inputs such as `https://`
//! and rewrites paths; feature lengths must reflect the submitted text.

/// Components of a URL relevant to feature extraction. Missing parts are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Lower-cased scheme, without the trailing `:`.
    pub scheme: String,
    /// Lower-cased host, with userinfo, port and IPv6 brackets removed.
    pub host: String,
    pub path: &'a str,
    /// Raw query string, without the leading `?`.
    pub query: &'a str,
}

/// Splits `url` into scheme, host, path and query. Never fails.
pub fn split_url(url: &str) -> UrlParts<'_> {
    let (scheme, rest) = split_scheme(url);

    let (authority, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            (Some(&after[..end]), &after[end..])
        }
        None => (None, rest),
    };

    let rest = match rest.find('#') {
        Some(i) => &rest[..i],
        None => rest,
    };
    let (path, query) = match rest.split_once('?') {
        Some((p, q)) => (p, q),
        None => (rest, ""),
    };

    UrlParts {
        scheme,
        host: authority.map(host_from_authority).unwrap_or_default(),
        path,
        query,
    }
}

/// Returns the lower-cased scheme and the remainder after `:`.
/// A prefix that is not a syntactically valid scheme yields an empty scheme.
fn split_scheme(url: &str) -> (String, &str) {
    let Some(colon) = url.find(':') else {
        return (String::new(), url);
    };
    let candidate = &url[..colon];
    let mut chars = candidate.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        (candidate.to_ascii_lowercase(), &url[colon + 1..])
    } else {
        (String::new(), url)
    }
}

fn host_from_authority(authority: &str) -> String {
    let host_port = match authority.rfind('@') {
        Some(i) => &authority[i + 1..],
        None => authority,
    };
    let host = match host_port.split_once('[') {
        Some((_, bracketed)) => bracketed.split(']').next().unwrap_or(""),
        None => host_port.split(':').next().unwrap_or(""),
    };
    host.to_lowercase()
}
