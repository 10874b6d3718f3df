use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::features::Lexicon;
use crate::policy::HeuristicRules;

/// File name of the persisted model under the XDG data dir.
const MODEL_FILE_NAME: &str = "model.json";

/// Reachability probe parameters (optional `[probe]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Upper bound for the whole HEAD request, in seconds.
    pub timeout_secs: u64,
    /// Follow 3xx redirects and judge the final status.
    pub follow_redirects: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            follow_redirects: true,
        }
    }
}

/// Offline training parameters (optional `[training]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Share of each class held out for the evaluation report.
    pub test_fraction: f64,
    /// Seed for the stratified shuffle.
    pub seed: u64,
    /// Full-batch gradient descent iterations.
    pub epochs: usize,
    pub learning_rate: f64,
    /// L2 penalty on the weights (not the bias).
    pub l2: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.25,
            seed: 42,
            epochs: 2000,
            learning_rate: 0.1,
            l2: 0.001,
        }
    }
}

/// Global configuration loaded from `~/.config/phishcheck/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhishConfig {
    /// Persisted model location. Defaults to `~/.local/share/phishcheck/model.json`.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub heuristic: HeuristicRules,
    #[serde(default)]
    pub lexicon: Lexicon,
    #[serde(default)]
    pub training: TrainingConfig,
}

impl PhishConfig {
    /// Configured model path, or the XDG data location when unset.
    pub fn resolved_model_path(&self) -> PathBuf {
        self.model_path.clone().unwrap_or_else(default_model_path)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// `~/.local/share/phishcheck/model.json`, or `model.json` in the working
/// directory when no XDG base directory can be determined.
pub fn default_model_path() -> PathBuf {
    xdg::BaseDirectories::with_prefix("phishcheck")
        .map(|dirs| dirs.get_data_file(MODEL_FILE_NAME))
        .unwrap_or_else(|_| PathBuf::from(MODEL_FILE_NAME))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PhishConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PhishConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let mut cfg: PhishConfig = toml::from_str(&data)?;
    cfg.lexicon = cfg.lexicon.normalized();
    Ok(cfg)
}
