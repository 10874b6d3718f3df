//! Reading and writing model artifacts (pretty JSON).

use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::{LogisticModel, ModelError};

/// A validated model plus the SHA-256 of the bytes it was decoded from.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model: LogisticModel,
    /// Lowercase hex digest; logged so operators can tell artifacts apart.
    pub fingerprint: String,
}

/// Writes `model` to `path`, creating parent directories as needed.
pub fn save(model: &LogisticModel, path: &Path) -> Result<(), ModelError> {
    let io_err = |source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    };
    let json = serde_json::to_vec_pretty(model).map_err(ModelError::Encode)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, json).map_err(io_err)?;
    tracing::info!("saved model to {}", path.display());
    Ok(())
}

/// Reads, decodes and validates the model at `path`.
pub fn load(path: &Path) -> Result<LoadedModel, ModelError> {
    let bytes = fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, &bytes)
}

/// Like [`load`], but a missing file yields `Ok(None)`.
///
/// Callers fall back to the heuristic decision path in that case. A file
/// that exists but cannot be used is still an error.
pub fn load_optional(path: &Path) -> Result<Option<LoadedModel>, ModelError> {
    match fs::read(path) {
        Ok(bytes) => decode(path, &bytes).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("no model at {}; heuristic fallback active", path.display());
            Ok(None)
        }
        Err(source) => Err(ModelError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn decode(path: &Path, bytes: &[u8]) -> Result<LoadedModel, ModelError> {
    let model: LogisticModel =
        serde_json::from_slice(bytes).map_err(|source| ModelError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    model.validate()?;
    let fingerprint = hex::encode(Sha256::digest(bytes));
    tracing::info!(
        "loaded model from {} (sha256 {}, {} training rows)",
        path.display(),
        fingerprint,
        model.metadata.trained_samples
    );
    Ok(LoadedModel { model, fingerprint })
}
