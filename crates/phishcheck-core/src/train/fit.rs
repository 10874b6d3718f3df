//! Full-batch gradient descent for [`LogisticModel`].

use crate::config::TrainingConfig;
use crate::features::{FeatureRow, FEATURE_COUNT};
use crate::model::{Classifier, LogisticModel, ModelMetadata};

/// Fits a standardized logistic regression on `rows` / `labels`.
///
/// Columns are centered and scaled by their population standard deviation;
/// constant columns keep scale 1 so they contribute nothing. Weights start at
/// zero, so the result is deterministic for a given input.
pub fn fit_logistic(rows: &[FeatureRow], labels: &[bool], cfg: &TrainingConfig) -> LogisticModel {
    debug_assert_eq!(rows.len(), labels.len());
    let n = rows.len().max(1) as f64;

    let mut means = [0.0; FEATURE_COUNT];
    for row in rows {
        for (m, x) in means.iter_mut().zip(row) {
            *m += x / n;
        }
    }
    let mut scales = [0.0; FEATURE_COUNT];
    for row in rows {
        for ((s, x), m) in scales.iter_mut().zip(row).zip(&means) {
            *s += (x - m).powi(2) / n;
        }
    }
    for s in scales.iter_mut() {
        *s = if *s > f64::EPSILON { s.sqrt() } else { 1.0 };
    }

    let standardized: Vec<FeatureRow> = rows
        .iter()
        .map(|row| {
            let mut z = [0.0; FEATURE_COUNT];
            for (i, v) in z.iter_mut().enumerate() {
                *v = (row[i] - means[i]) / scales[i];
            }
            z
        })
        .collect();

    // Train in standardized space: identity transform on top of the data.
    let mut model = LogisticModel::new(
        [0.0; FEATURE_COUNT],
        [1.0; FEATURE_COUNT],
        [0.0; FEATURE_COUNT],
        0.0,
        ModelMetadata::default(),
    );

    for _ in 0..cfg.epochs {
        let mut grad_w = [0.0; FEATURE_COUNT];
        let mut grad_b = 0.0;
        for (z, &y) in standardized.iter().zip(labels) {
            let err = model.predict_probability(z) - if y { 1.0 } else { 0.0 };
            for (g, x) in grad_w.iter_mut().zip(z) {
                *g += err * x / n;
            }
            grad_b += err / n;
        }
        for (w, g) in model.weights.iter_mut().zip(&grad_w) {
            *w -= cfg.learning_rate * (g + cfg.l2 * *w);
        }
        model.bias -= cfg.learning_rate * grad_b;
    }

    model.means = means.to_vec();
    model.scales = scales.to_vec();
    model.metadata = ModelMetadata {
        trained_samples: rows.len(),
        epochs: cfg.epochs,
        positive_fraction: labels.iter().filter(|&&y| y).count() as f64 / n,
    };
    tracing::debug!(bias = model.bias, weights = ?model.weights, "fitted logistic model");
    model
}
