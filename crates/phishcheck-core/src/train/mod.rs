//! Offline training driver.
//!
//! Reads labeled URLs, runs them through the same normalizer and extractor
//! the inference path uses, fits a [`LogisticModel`] on a stratified split,
//! reports held-out metrics and persists the model.

mod dataset;
mod error;
mod fit;
mod metrics;
mod split;

pub use dataset::{load_dataset, LabeledUrl};
pub use error::TrainError;
pub use fit::fit_logistic;
pub use metrics::{ClassMetrics, ClassificationReport};
pub use split::{stratified_split, Split};

use std::path::{Path, PathBuf};

use crate::config::TrainingConfig;
use crate::features::{extract_features, FeatureRow, Lexicon};
use crate::model::{self, Classifier, LogisticModel};
use crate::policy::PHISHING_PROBABILITY_THRESHOLD;
use crate::url_model::normalize;

/// What a finished training job produced.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub model: LogisticModel,
    pub report: ClassificationReport,
    pub train_rows: usize,
    pub test_rows: usize,
    pub model_path: PathBuf,
}

/// Runs the full job: load `data`, split, fit, evaluate, save to `out`.
pub fn run_training(
    data: &Path,
    out: &Path,
    cfg: &TrainingConfig,
    lexicon: &Lexicon,
) -> Result<TrainingOutcome, TrainError> {
    let samples = load_dataset(data)?;
    if samples.is_empty() {
        return Err(TrainError::EmptyDataset);
    }

    let rows: Vec<FeatureRow> = samples
        .iter()
        .map(|s| extract_features(&normalize(&s.url), lexicon).to_row())
        .collect();
    let labels: Vec<bool> = samples.iter().map(|s| s.phishing).collect();

    let split = stratified_split(&labels, cfg.test_fraction, cfg.seed)?;
    let pick = |idx: &[usize]| -> (Vec<FeatureRow>, Vec<bool>) {
        idx.iter().map(|&i| (rows[i], labels[i])).unzip()
    };
    let (train_x, train_y) = pick(&split.train);
    let (test_x, test_y) = pick(&split.test);
    tracing::info!(
        "training on {} rows, evaluating on {}",
        train_x.len(),
        test_x.len()
    );

    let model = fit_logistic(&train_x, &train_y, cfg);
    let predicted: Vec<bool> = test_x
        .iter()
        .map(|row| model.predict_probability(row) > PHISHING_PROBABILITY_THRESHOLD)
        .collect();
    let report = ClassificationReport::from_predictions(&test_y, &predicted);
    tracing::info!(
        accuracy = report.accuracy,
        phishing_f1 = report.phishing.f1,
        "evaluation finished"
    );

    model::save(&model, out)?;

    Ok(TrainingOutcome {
        model,
        report,
        train_rows: train_x.len(),
        test_rows: test_x.len(),
        model_path: out.to_path_buf(),
    })
}
