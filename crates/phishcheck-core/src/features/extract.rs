//! The extraction function itself.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{FeatureVector, Lexicon};
use crate::url_model::split_url;

static IPV4_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").expect("IPv4 literal pattern is valid")
});

/// Computes the feature vector of `url`.
///
/// Pure and total: the same input always produces the same vector, and no
/// input makes it fail. Pass a URL that already went through
/// [`crate::url_model::normalize`] so training and inference see the same text.
pub fn extract_features(url: &str, lexicon: &Lexicon) -> FeatureVector {
    let url = url.trim();
    let parts = split_url(url);
    let host = parts.host.as_str();

    FeatureVector {
        url_length: char_len(url),
        hostname_length: char_len(host),
        path_length: char_len(parts.path),
        query_length: char_len(parts.query),
        num_dots: count_char(host, '.'),
        num_hyphens: count_char(host, '-'),
        num_subdomains: subdomain_count(host),
        num_params: distinct_param_count(parts.query),
        has_at: url.contains('@'),
        has_ip: IPV4_LITERAL.is_match(host),
        is_https: parts.scheme == "https",
        is_shortened: lexicon.is_shortener_host(host),
        has_suspicious_words: lexicon.contains_suspicious_word(&url.to_lowercase()),
    }
}

fn char_len(s: &str) -> u64 {
    s.chars().count() as u64
}

fn count_char(s: &str, needle: char) -> u64 {
    s.chars().filter(|&c| c == needle).count() as u64
}

/// Non-empty labels beyond the registrable pair (`a.b.example.com` → 2).
fn subdomain_count(host: &str) -> u64 {
    let labels = host.split('.').filter(|l| !l.is_empty()).count();
    labels.saturating_sub(2) as u64
}

/// Distinct keys among `key=value` pairs; pairs with an empty value are skipped.
fn distinct_param_count(query: &str) -> u64 {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, _)| key)
        .collect::<HashSet<_>>()
        .len() as u64
}
