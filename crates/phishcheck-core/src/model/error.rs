//! Errors raised while reading or writing a model artifact.

use std::path::PathBuf;

/// Model load/save failure. A *missing* artifact is not an error; see
/// [`super::load_optional`].
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("read/write model {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decode model {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("encode model: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("unsupported model format version {found} (expected {expected})")]
    FormatVersion { expected: u32, found: u32 },
    /// The artifact was trained with a different feature column order.
    #[error("feature schema mismatch: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("model parameter `{name}` has {found} values (expected {expected})")]
    ParameterLength {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("model parameter `{0}` contains a non-finite or non-positive value")]
    InvalidParameter(&'static str),
}
