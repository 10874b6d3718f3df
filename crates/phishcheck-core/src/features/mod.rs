//! URL feature extraction.
//!
//! Turns a normalized URL into a fixed, ordered vector of numeric features.
//! The column order in [`FEATURE_NAMES`] is shared by the extractor, the
//! trainer and every persisted model; a model trained under one order gives
//! silently wrong answers under another, so the model loader checks it.

mod extract;
mod lexicon;
mod vector;

pub use extract::extract_features;
pub use lexicon::Lexicon;
pub use vector::{FeatureRow, FeatureVector};

/// Number of features produced for every URL.
pub const FEATURE_COUNT: usize = 13;

/// Feature names in column order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "url_length",
    "hostname_length",
    "path_length",
    "query_length",
    "num_dots",
    "num_hyphens",
    "num_subdomains",
    "num_params",
    "has_at",
    "has_ip",
    "is_https",
    "is_shortened",
    "has_suspicious_words",
];
