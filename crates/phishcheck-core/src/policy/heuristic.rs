//! Rule-based fallback used when no trained model is available.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// Score weights and thresholds of the fallback rules (`[heuristic]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicRules {
    pub suspicious_words_weight: u32,
    pub shortener_weight: u32,
    pub ip_host_weight: u32,
    pub deep_subdomain_weight: u32,
    /// `num_subdomains` at or above this adds `deep_subdomain_weight`.
    pub deep_subdomain_min: u64,
    /// Scores at or above this are labeled phishing.
    pub phishing_threshold: u32,
}

impl Default for HeuristicRules {
    fn default() -> Self {
        Self {
            suspicious_words_weight: 2,
            shortener_weight: 1,
            ip_host_weight: 2,
            deep_subdomain_weight: 1,
            deep_subdomain_min: 3,
            phishing_threshold: 2,
        }
    }
}

impl HeuristicRules {
    pub fn score(&self, f: &FeatureVector) -> u32 {
        let mut score = 0u32;
        if f.has_suspicious_words {
            score = score.saturating_add(self.suspicious_words_weight);
        }
        if f.is_shortened {
            score = score.saturating_add(self.shortener_weight);
        }
        if f.has_ip {
            score = score.saturating_add(self.ip_host_weight);
        }
        if f.num_subdomains >= self.deep_subdomain_min {
            score = score.saturating_add(self.deep_subdomain_weight);
        }
        score
    }

    pub fn is_phishing(&self, f: &FeatureVector) -> bool {
        self.score(f) >= self.phishing_threshold
    }
}
