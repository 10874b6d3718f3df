//! `phishcheck train --data <csv>` – fit, report and save a model.

use anyhow::{Context, Result};
use phishcheck_core::config::PhishConfig;
use phishcheck_core::train;
use std::path::Path;

pub fn run_train(cfg: &PhishConfig, data: &Path, out: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let out = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cfg.resolved_model_path());
    let mut training = cfg.training.clone();
    if let Some(seed) = seed {
        training.seed = seed;
    }

    let outcome = train::run_training(data, &out, &training, &cfg.lexicon)
        .with_context(|| format!("train from {}", data.display()))?;

    println!(
        "Trained on {} rows, evaluated on {}.",
        outcome.train_rows, outcome.test_rows
    );
    println!();
    println!("=== CLASSIFICATION REPORT ===");
    println!("{}", outcome.report);
    println!("Saved model to {}", outcome.model_path.display());
    Ok(())
}
