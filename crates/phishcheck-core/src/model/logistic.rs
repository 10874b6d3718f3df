//! Standardized logistic regression.

use serde::{Deserialize, Serialize};

use super::{Classifier, ModelError};
use crate::features::{FeatureRow, FEATURE_COUNT, FEATURE_NAMES};

/// Bumped whenever the serialized layout changes incompatibly.
pub const MODEL_FORMAT_VERSION: u32 = 1;

/// Provenance recorded by the trainer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub trained_samples: usize,
    pub epochs: usize,
    /// Share of phishing rows in the training split.
    pub positive_fraction: f64,
}

/// `p = sigmoid(bias + Σ wᵢ · (xᵢ − meanᵢ) / scaleᵢ)`
///
/// `feature_names` travels with the parameters so a loader can reject a
/// model trained under a different column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub means: Vec<f64>,
    pub scales: Vec<f64>,
    pub weights: Vec<f64>,
    pub bias: f64,
    #[serde(default)]
    pub metadata: ModelMetadata,
}

impl LogisticModel {
    /// Builds a model over the current feature schema.
    pub fn new(
        means: FeatureRow,
        scales: FeatureRow,
        weights: FeatureRow,
        bias: f64,
        metadata: ModelMetadata,
    ) -> Self {
        Self {
            format_version: MODEL_FORMAT_VERSION,
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            means: means.to_vec(),
            scales: scales.to_vec(),
            weights: weights.to_vec(),
            bias,
            metadata,
        }
    }

    /// Checks the artifact against the running feature schema.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.format_version != MODEL_FORMAT_VERSION {
            return Err(ModelError::FormatVersion {
                expected: MODEL_FORMAT_VERSION,
                found: self.format_version,
            });
        }
        if !self.feature_names.iter().map(String::as_str).eq(FEATURE_NAMES) {
            return Err(ModelError::SchemaMismatch {
                expected: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
                found: self.feature_names.clone(),
            });
        }
        for (name, values) in [
            ("means", &self.means),
            ("scales", &self.scales),
            ("weights", &self.weights),
        ] {
            if values.len() != FEATURE_COUNT {
                return Err(ModelError::ParameterLength {
                    name,
                    expected: FEATURE_COUNT,
                    found: values.len(),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ModelError::InvalidParameter(name));
            }
        }
        if self.scales.iter().any(|s| *s <= 0.0) {
            return Err(ModelError::InvalidParameter("scales"));
        }
        if !self.bias.is_finite() {
            return Err(ModelError::InvalidParameter("bias"));
        }
        Ok(())
    }

    /// Linear score before the sigmoid.
    pub fn decision_function(&self, row: &FeatureRow) -> f64 {
        row.iter()
            .zip(&self.means)
            .zip(&self.scales)
            .zip(&self.weights)
            .fold(self.bias, |z, (((x, mean), scale), w)| {
                z + w * (x - mean) / scale
            })
    }
}

impl Classifier for LogisticModel {
    fn predict_probability(&self, row: &FeatureRow) -> f64 {
        sigmoid(self.decision_function(row)).clamp(0.0, 1.0)
    }
}

/// Overflow-safe logistic function.
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
