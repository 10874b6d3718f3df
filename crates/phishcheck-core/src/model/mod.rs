//! Classifier abstraction and the persisted logistic-regression model.
//!
//! A model is created offline by [`crate::train`], written once, and loaded
//! once per process. After loading it is immutable and shared read-only.

mod error;
mod logistic;
mod persist;

pub use error::ModelError;
pub use logistic::{LogisticModel, ModelMetadata, MODEL_FORMAT_VERSION};
pub use persist::{load, load_optional, save, LoadedModel};

use crate::features::FeatureRow;

/// Anything that can score a feature row.
///
/// Implementations must be free of side effects so a single instance can be
/// shared across threads.
pub trait Classifier: Send + Sync {
    /// Probability of the positive ("phishing") class, in `[0, 1]`.
    fn predict_probability(&self, row: &FeatureRow) -> f64;
}
