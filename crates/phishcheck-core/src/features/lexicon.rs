//! Word lists consulted by the extractor.

use serde::{Deserialize, Serialize};

const SUSPICIOUS_WORDS: [&str; 10] = [
    "secure", "account", "update", "login", "verify", "bank", "confirm", "free", "bonus", "gift",
];

const SHORTENER_DOMAINS: [&str; 7] = [
    "bit.ly",
    "t.co",
    "goo.gl",
    "tinyurl.com",
    "is.gd",
    "cutt.ly",
    "ow.ly",
];

/// Closed word sets used by `has_suspicious_words` and `is_shortened`.
///
/// A trained model is only meaningful together with the lexicon it was
/// trained under; changing these lists shifts the feature distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Matched case-insensitively anywhere in the URL.
    pub suspicious_words: Vec<String>,
    /// Matched as a plain suffix of the lower-cased host.
    pub shortener_domains: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            suspicious_words: SUSPICIOUS_WORDS.iter().map(|s| s.to_string()).collect(),
            shortener_domains: SHORTENER_DOMAINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Lower-cases every entry so matching can compare against lower-cased input.
    pub fn normalized(mut self) -> Self {
        for w in self
            .suspicious_words
            .iter_mut()
            .chain(self.shortener_domains.iter_mut())
        {
            *w = w.trim().to_lowercase();
        }
        self.suspicious_words.retain(|w| !w.is_empty());
        self.shortener_domains.retain(|d| !d.is_empty());
        self
    }

    pub(crate) fn contains_suspicious_word(&self, url_lower: &str) -> bool {
        self.suspicious_words
            .iter()
            .any(|w| url_lower.contains(w.as_str()))
    }

    pub(crate) fn is_shortener_host(&self, host: &str) -> bool {
        self.shortener_domains
            .iter()
            .any(|d| host.ends_with(d.as_str()))
    }
}
