//! `phishcheck features <url>` – show the feature vector, offline.

use anyhow::Result;
use phishcheck_core::config::PhishConfig;
use phishcheck_core::features::extract_features;
use phishcheck_core::url_model::normalize;

pub fn run_features(cfg: &PhishConfig, url: &str, json: bool) -> Result<()> {
    let normalized = normalize(url);
    let features = extract_features(&normalized, &cfg.lexicon);

    if json {
        println!("{}", serde_json::to_string_pretty(&features)?);
        return Ok(());
    }

    println!("{}", normalized);
    for (name, value) in features.iter() {
        println!("  {:<22} {}", name, value);
    }
    Ok(())
}
