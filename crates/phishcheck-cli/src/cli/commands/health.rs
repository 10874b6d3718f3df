//! `phishcheck health` – liveness payload.

use anyhow::Result;
use phishcheck_core::report::HealthResponse;

pub fn run_health() -> Result<()> {
    println!("{}", serde_json::to_string(&HealthResponse::default())?);
    Ok(())
}
