//! The ordered feature vector and its serialized form.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{FEATURE_COUNT, FEATURE_NAMES};

/// One row of model input, in [`FEATURE_NAMES`] order.
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Features of a single URL. Flags are stored as `bool` and exported as 0/1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureVector {
    pub url_length: u64,
    pub hostname_length: u64,
    pub path_length: u64,
    pub query_length: u64,
    pub num_dots: u64,
    pub num_hyphens: u64,
    pub num_subdomains: u64,
    pub num_params: u64,
    pub has_at: bool,
    pub has_ip: bool,
    pub is_https: bool,
    pub is_shortened: bool,
    pub has_suspicious_words: bool,
}

impl FeatureVector {
    /// Integer values in column order.
    pub fn values(&self) -> [u64; FEATURE_COUNT] {
        [
            self.url_length,
            self.hostname_length,
            self.path_length,
            self.query_length,
            self.num_dots,
            self.num_hyphens,
            self.num_subdomains,
            self.num_params,
            u64::from(self.has_at),
            u64::from(self.has_ip),
            u64::from(self.is_https),
            u64::from(self.is_shortened),
            u64::from(self.has_suspicious_words),
        ]
    }

    /// Model input row in column order.
    pub fn to_row(&self) -> FeatureRow {
        self.values().map(|v| v as f64)
    }

    /// `(name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> {
        FEATURE_NAMES.into_iter().zip(self.values())
    }
}

/// Serializes as a map whose keys follow [`FEATURE_NAMES`] order.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
