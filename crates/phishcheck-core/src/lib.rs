pub mod config;
pub mod features;
pub mod logging;
pub mod model;
pub mod policy;
pub mod probe;
pub mod report;
pub mod train;
pub mod url_model;
