//! Inference policy: reachability gate, then model or heuristic decision.
//!
//! Every input string yields exactly one of three labels; nothing here
//! returns an error to the caller.

mod heuristic;

pub use heuristic::HeuristicRules;

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::features::{extract_features, FeatureVector, Lexicon};
use crate::model::Classifier;
use crate::probe::{Prober, Reachability};
use crate::url_model::normalize;

/// Probabilities strictly above this are labeled phishing.
pub const PHISHING_PROBABILITY_THRESHOLD: f64 = 0.5;

/// Final label of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Phishing,
    Legitimate,
    Unreachable,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Phishing => "Phishing",
            Verdict::Legitimate => "Legitimate",
            Verdict::Unreachable => "Unreachable Website",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Confidence attached to a verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    /// Model probability of phishing, rounded to two decimals.
    Probability(f64),
    /// No decision was made (unreachable URL). Rendered as `N/A`.
    NotApplicable,
    /// Decided by the fallback rules. Rendered as `N/A (heuristic)`.
    Heuristic,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Probability(p) => write!(f, "{p}"),
            Confidence::NotApplicable => f.write_str("N/A"),
            Confidence::Heuristic => f.write_str("N/A (heuristic)"),
        }
    }
}

/// Probabilities serialize as JSON numbers, sentinels as strings.
impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Confidence::Probability(p) => serializer.serialize_f64(*p),
            other => serializer.collect_str(other),
        }
    }
}

/// Result of one inference call.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub verdict: Verdict,
    pub confidence: Confidence,
    /// `None` only for unreachable URLs, where extraction is skipped.
    pub features: Option<FeatureVector>,
}

impl Prediction {
    fn unreachable() -> Self {
        Self {
            verdict: Verdict::Unreachable,
            confidence: Confidence::NotApplicable,
            features: None,
        }
    }
}

/// Decides a label for a URL.
///
/// The classifier is injected once at construction and never mutated, so a
/// policy can be shared across threads when its prober allows it.
pub struct InferencePolicy<P> {
    prober: P,
    classifier: Option<Arc<dyn Classifier>>,
    lexicon: Lexicon,
    rules: HeuristicRules,
}

impl<P: Prober> InferencePolicy<P> {
    /// Policy without a model; decisions use `rules`.
    pub fn new(prober: P, lexicon: Lexicon, rules: HeuristicRules) -> Self {
        Self {
            prober,
            classifier: None,
            lexicon,
            rules,
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Probes, extracts and decides. Never fails.
    pub fn predict(&self, raw_url: &str) -> Prediction {
        let url = normalize(raw_url);
        match self.prober.probe(&url) {
            Reachability::Reachable { status } => {
                tracing::debug!(%url, status, "url reachable");
            }
            Reachability::Unreachable(reason) => {
                tracing::debug!(%url, %reason, "url unreachable");
                return Prediction::unreachable();
            }
        }

        let features = extract_features(&url, &self.lexicon);
        let (verdict, confidence) = self.decide(&features);
        tracing::info!(%url, verdict = %verdict, confidence = %confidence, "url classified");
        Prediction {
            verdict,
            confidence,
            features: Some(features),
        }
    }

    /// Model decision when a classifier is loaded, heuristic otherwise.
    pub fn decide(&self, features: &FeatureVector) -> (Verdict, Confidence) {
        match &self.classifier {
            Some(classifier) => {
                let p = classifier.predict_probability(&features.to_row());
                decide_from_probability(p)
            }
            None => {
                let verdict = if self.rules.is_phishing(features) {
                    Verdict::Phishing
                } else {
                    Verdict::Legitimate
                };
                (verdict, Confidence::Heuristic)
            }
        }
    }
}

/// Thresholds a phishing probability (strictly above 0.5 is phishing).
pub fn decide_from_probability(p: f64) -> (Verdict, Confidence) {
    let verdict = if p > PHISHING_PROBABILITY_THRESHOLD {
        Verdict::Phishing
    } else {
        Verdict::Legitimate
    };
    (verdict, Confidence::Probability(round2(p)))
}

fn round2(p: f64) -> f64 {
    (p * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests;
