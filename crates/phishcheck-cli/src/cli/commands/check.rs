//! `phishcheck check <url>` – probe and classify a URL.

use anyhow::{Context, Result};
use phishcheck_core::config::PhishConfig;
use phishcheck_core::model;
use phishcheck_core::policy::InferencePolicy;
use phishcheck_core::probe::CurlProber;
use phishcheck_core::report::CheckResponse;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct CheckOptions {
    pub json: bool,
    pub model: Option<PathBuf>,
    pub no_model: bool,
}

pub fn run_check(cfg: &PhishConfig, url: &str, opts: &CheckOptions) -> Result<()> {
    let mut policy = InferencePolicy::new(
        CurlProber::new(&cfg.probe),
        cfg.lexicon.clone(),
        cfg.heuristic.clone(),
    );

    if !opts.no_model {
        let path = opts
            .model
            .clone()
            .unwrap_or_else(|| cfg.resolved_model_path());
        let loaded = model::load_optional(&path)
            .with_context(|| format!("load model {}", path.display()))?;
        if let Some(loaded) = loaded {
            policy = policy.with_classifier(Arc::new(loaded.model));
        }
    }

    let prediction = policy.predict(url);
    let response = CheckResponse::new(url, prediction);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("URL:         {}", response.url);
    println!("Prediction:  {}", response.prediction);
    println!("Probability: {}", response.probability);
    if let Some(features) = &response.features {
        println!("Features:");
        for (name, value) in features.iter() {
            println!("  {:<22} {}", name, value);
        }
    }
    Ok(())
}
