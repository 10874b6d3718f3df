//! CLI command handlers, one per file.

mod check;
mod features;
mod health;
mod train;

pub use check::{run_check, CheckOptions};
pub use features::run_features;
pub use health::run_health;
pub use train::run_train;
