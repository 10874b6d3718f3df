//! CLI for phishcheck.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use phishcheck_core::config::{self, PhishConfig};
use std::path::PathBuf;

use commands::{run_check, run_features, run_health, run_train, CheckOptions};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "phishcheck")]
#[command(about = "phishcheck: classify URLs as phishing or legitimate", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Probe a URL and classify it with the trained model (or the heuristic).
    Check {
        /// URL to check; `https://` is added when no scheme is given.
        url: String,

        /// Print the JSON response instead of a summary.
        #[arg(long)]
        json: bool,

        /// Model file to load instead of the configured one.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,

        /// Ignore any model and use the heuristic rules.
        #[arg(long, conflicts_with = "model")]
        no_model: bool,
    },

    /// Print the feature vector of a URL without any network access.
    Features {
        /// URL to analyze.
        url: String,

        /// Print the ordered feature map as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Train a model from a labeled CSV (`url,label`, 1 = phishing) and save it.
    Train {
        /// Path to the dataset.
        #[arg(long, value_name = "CSV")]
        data: PathBuf,

        /// Where to write the model (defaults to the configured model path).
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Override the split seed.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the liveness payload.
    Health,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().command.run(config::load_or_init)
    }

    /// Dispatches the command. `load_config` runs only for commands that read
    /// configuration.
    pub fn run(self, load_config: impl FnOnce() -> Result<PhishConfig>) -> Result<()> {
        let load = || -> Result<PhishConfig> {
            let cfg = load_config()?;
            tracing::debug!("loaded config: {:?}", cfg);
            Ok(cfg)
        };

        match self {
            CliCommand::Check {
                url,
                json,
                model,
                no_model,
            } => run_check(
                &load()?,
                &url,
                &CheckOptions {
                    json,
                    model,
                    no_model,
                },
            )?,
            CliCommand::Features { url, json } => run_features(&load()?, &url, json)?,
            CliCommand::Train { data, out, seed } => {
                run_train(&load()?, &data, out.as_deref(), seed)?
            }
            CliCommand::Health => run_health()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
