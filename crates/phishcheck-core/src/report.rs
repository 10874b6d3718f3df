//! JSON payloads for front ends (`{"url", "prediction", "probability", "features"}`).

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::features::FeatureVector;
use crate::policy::{Confidence, Prediction, Verdict};

/// Response body of a URL check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    /// The URL as submitted (trimmed, not normalized).
    pub url: String,
    pub prediction: Verdict,
    pub probability: Confidence,
    /// Ordered feature map; `{}` for unreachable URLs.
    #[serde(serialize_with = "features_or_empty")]
    pub features: Option<FeatureVector>,
}

impl CheckResponse {
    pub fn new(url: &str, prediction: Prediction) -> Self {
        Self {
            url: url.trim().to_string(),
            prediction: prediction.verdict,
            probability: prediction.confidence,
            features: prediction.features,
        }
    }
}

/// Liveness payload.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { ok: true }
    }
}

fn features_or_empty<S: Serializer>(
    features: &Option<FeatureVector>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match features {
        Some(f) => f.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
